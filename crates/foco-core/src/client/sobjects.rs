//! Record writes and composite requests. These address the instance URL
//! resolved at login, falling back to the base URL.

use serde_json::Value;

use foco_types::{Result, UpdateOutcome, UpsertOutcome};

use super::response::{check, json_body, optional_json, ErrorBody};
use super::{FocoClient, Root};
use crate::{DEFAULT_REQUEST_TIMEOUT, LONG_REQUEST_TIMEOUT};

impl FocoClient {
    /// `POST /sobjects/{object}`
    pub async fn create(&self, object_name: &str, payload: &Value) -> Result<Value> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(&["sobjects", object_name])?;
        tracing::debug!(%url, "create record");
        let request = self.http.post(url).json(payload);
        let resp = self.send(&auth, request, DEFAULT_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Structured).await?).await
    }

    /// `PATCH /sobjects/{object}/{id}`. FOCO answers 204 with no body.
    pub async fn update(
        &self,
        object_name: &str,
        record_id: &str,
        payload: &Value,
    ) -> Result<UpdateOutcome> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(&["sobjects", object_name, record_id])?;
        tracing::debug!(%url, "update record");
        let request = self.http.patch(url).json(payload);
        let resp = self.send(&auth, request, DEFAULT_REQUEST_TIMEOUT).await?;
        let resp = check(resp, ErrorBody::Structured).await?;
        Ok(UpdateOutcome { success: true, status: resp.status().as_u16() })
    }

    /// `PATCH /sobjects/{object}/{external_field}/{external_value}`
    pub async fn upsert(
        &self,
        object_name: &str,
        external_field: &str,
        external_value: &str,
        payload: &Value,
    ) -> Result<UpsertOutcome> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(&["sobjects", object_name, external_field, external_value])?;
        tracing::debug!(%url, "upsert record");
        let request = self.http.patch(url).json(payload);
        let resp = self.send(&auth, request, DEFAULT_REQUEST_TIMEOUT).await?;
        let resp = check(resp, ErrorBody::Structured).await?;
        let status = resp.status().as_u16();
        Ok(UpsertOutcome::from_status(status, optional_json(resp).await?))
    }

    /// `POST /composite/sobjects`
    pub async fn composite_sobjects(&self, payload: &Value) -> Result<Value> {
        self.post_composite(&["composite", "sobjects"], payload).await
    }

    /// `POST /composite`
    pub async fn composite(&self, payload: &Value) -> Result<Value> {
        self.post_composite(&["composite"], payload).await
    }

    async fn post_composite(&self, segments: &[&str], payload: &Value) -> Result<Value> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(segments)?;
        tracing::debug!(%url, "composite");
        let request = self.http.post(url).json(payload);
        let resp = self.send(&auth, request, LONG_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Structured).await?).await
    }
}
