//! Read operations. These always address the configured base URL.

use serde_json::Value;

use foco_types::Result;

use super::response::{check, json_body, ErrorBody};
use super::{FocoClient, Root};
use crate::{DEFAULT_REQUEST_TIMEOUT, LONG_REQUEST_TIMEOUT};

impl FocoClient {
    /// `GET /services/oauth2/userinfo`
    pub async fn userinfo(&self) -> Result<Value> {
        let auth = self.authorize(Root::Base).await?;
        let url = auth.url(&["services", "oauth2", "userinfo"])?;
        tracing::debug!(%url, "userinfo");
        let resp = self.send(&auth, self.http.get(url), DEFAULT_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Raw).await?).await
    }

    /// `GET /services/data/vXX.X/sobjects`
    pub async fn list_sobjects(&self) -> Result<Value> {
        let auth = self.authorize(Root::Base).await?;
        let url = auth.data_url(&["sobjects"])?;
        tracing::debug!(%url, "list sobjects");
        let resp = self.send(&auth, self.http.get(url), DEFAULT_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Raw).await?).await
    }

    /// `GET /services/data/vXX.X/sobjects/{object}/describe`
    pub async fn describe(&self, object_name: &str) -> Result<Value> {
        let auth = self.authorize(Root::Base).await?;
        let url = auth.data_url(&["sobjects", object_name, "describe"])?;
        tracing::debug!(%url, "describe");
        let resp = self.send(&auth, self.http.get(url), DEFAULT_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Raw).await?).await
    }

    /// `GET /services/data/vXX.X/query?q={soql}`
    pub async fn query(&self, soql: &str) -> Result<Value> {
        let auth = self.authorize(Root::Base).await?;
        let url = auth.data_url(&["query"])?;
        tracing::debug!(%url, "query");
        let request = self.http.get(url).query(&[("q", soql)]);
        let resp = self.send(&auth, request, LONG_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Raw).await?).await
    }
}
