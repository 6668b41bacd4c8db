//! Bulk API 2.0 ingest. The job state machine lives in FOCO; these calls only
//! forward. Error bodies are always reported as raw text.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

use foco_types::{BulkJobRequest, BulkResultKind, Result};

use super::response::{check, json_body, optional_json, transport, ErrorBody};
use super::{FocoClient, Root};
use crate::{DEFAULT_REQUEST_TIMEOUT, LONG_REQUEST_TIMEOUT};

impl FocoClient {
    /// `POST /jobs/ingest`
    pub async fn bulk_create_job(&self, job: &BulkJobRequest) -> Result<Value> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(&["jobs", "ingest"])?;
        tracing::info!(object = %job.object, operation = %job.operation, "creating bulk ingest job");
        let request = self.http.post(url).json(job);
        let resp = self.send(&auth, request, DEFAULT_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Raw).await?).await
    }

    /// `PUT /jobs/ingest/{id}/batches` with a raw CSV body.
    ///
    /// Returns the JSON body when FOCO sends one, otherwise `{"status": <code>}`.
    pub async fn bulk_upload_batch(&self, job_id: &str, csv: Bytes) -> Result<Value> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(&["jobs", "ingest", job_id, "batches"])?;
        tracing::debug!(%url, bytes = csv.len(), "uploading bulk batch");
        let request = self.http.put(url).header(CONTENT_TYPE, "text/csv").body(csv);
        let resp = self.send(&auth, request, LONG_REQUEST_TIMEOUT).await?;
        let resp = check(resp, ErrorBody::Raw).await?;
        let status = resp.status().as_u16();
        Ok(optional_json(resp).await?.unwrap_or_else(|| json!({ "status": status })))
    }

    /// `PATCH /jobs/ingest/{id}` with `{"state": state}`.
    pub async fn bulk_close_job(&self, job_id: &str, state: &str) -> Result<Value> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(&["jobs", "ingest", job_id])?;
        tracing::info!(job_id, state, "changing bulk job state");
        let request = self.http.patch(url).json(&json!({ "state": state }));
        let resp = self.send(&auth, request, DEFAULT_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Raw).await?).await
    }

    /// `GET /jobs/ingest/{id}`
    pub async fn bulk_job_status(&self, job_id: &str) -> Result<Value> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(&["jobs", "ingest", job_id])?;
        let resp = self.send(&auth, self.http.get(url), DEFAULT_REQUEST_TIMEOUT).await?;
        json_body(check(resp, ErrorBody::Raw).await?).await
    }

    /// `GET /jobs/ingest/{id}/{kind}`, returned as the unparsed CSV text.
    pub async fn bulk_results(&self, job_id: &str, kind: BulkResultKind) -> Result<String> {
        let auth = self.authorize(Root::Instance).await?;
        let url = auth.data_url(&["jobs", "ingest", job_id, kind.as_path()])?;
        tracing::debug!(%url, "downloading bulk results");
        let resp = self.send(&auth, self.http.get(url), LONG_REQUEST_TIMEOUT).await?;
        check(resp, ErrorBody::Raw).await?.text().await.map_err(transport)
    }
}
