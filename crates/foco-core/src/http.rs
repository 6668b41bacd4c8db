//! Shared HTTP client construction.

use std::time::Duration;

const USER_AGENT: &str = concat!("foco-gateway/", env!("CARGO_PKG_VERSION"));

/// `scheme://host:port`, with any userinfo replaced by `***`.
fn redact_proxy_url(url: &str) -> String {
    url::Url::parse(url)
        .map(|u| {
            let host = u.host_str().unwrap_or("?");
            let port = u.port_or_known_default().unwrap_or(0);
            if u.username().is_empty() && u.password().is_none() {
                format!("{}://{}:{}", u.scheme(), host, port)
            } else {
                format!("{}://***@{}:{}", u.scheme(), host, port)
            }
        })
        .unwrap_or_else(|_| "<invalid-url>".to_string())
}

/// Build the pooled HTTP client used for every FOCO call.
///
/// Per-operation timeouts are applied on each request, so only the connect
/// timeout is set here.
pub fn build_http_client(
    upstream_proxy: Option<&str>,
    connect_timeout_secs: u64,
) -> Result<reqwest::Client, String> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs.max(1)))
        .user_agent(USER_AGENT)
        .tcp_nodelay(true);

    if let Some(url) = upstream_proxy.map(str::trim).filter(|u| !u.is_empty()) {
        let proxy =
            reqwest::Proxy::all(url).map_err(|e| format!("Invalid upstream proxy url: {}", e))?;
        builder = builder.proxy(proxy);
        tracing::info!(proxy = %redact_proxy_url(url), "Routing FOCO traffic through upstream proxy");
    }

    builder.build().map_err(|e| format!("Failed to build HTTP client: {}", e))
}
