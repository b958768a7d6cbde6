//! Progress-record façade over `/progresses`.
//!
//! Two routes deserve care: `create` switches between JSON and multipart
//! depending on whether evidence is attached, and the status/verify
//! transitions carry their value as a query parameter on a bodyless PATCH.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use serde_json::Value;

use super::client::{ApiClient, RequestOptions, encode_segment};
use super::error::{ApiError, ApiResult};
use super::transport::{FormPart, Method, Transport};
use super::types::{CreateProgress, Progress, ProgressStatus, UpdateProgress};

const COLLECTION: &str = "/progresses";

/// Multipart field name for the evidence attachment.
pub const EVIDENCE_FIELD: &str = "evidence";

fn item_endpoint(id: &str) -> String {
    format!("{COLLECTION}/{}", encode_segment(id))
}

fn scoped_endpoint(scope: &str, id: &str) -> String {
    format!("{COLLECTION}/{scope}/{}", encode_segment(id))
}

/// Flatten `payload` into text parts (nulls skipped) followed by the file part.
fn multipart_parts(payload: &CreateProgress) -> ApiResult<Vec<(String, FormPart)>> {
    let value = serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(ApiError::Encode("progress payload is not an object".to_owned()));
    };
    let mut parts = fields
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| {
            let text = match v {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (k, FormPart::Text(text))
        })
        .collect::<Vec<_>>();
    if let Some(file) = &payload.evidence_file {
        parts.push((EVIDENCE_FIELD.to_owned(), FormPart::File(file.clone())));
    }
    Ok(parts)
}

/// Pick the body encoding for `create`.
fn create_options(payload: &CreateProgress) -> ApiResult<RequestOptions> {
    let options = RequestOptions::new(Method::Post);
    if payload.evidence_file.is_some() {
        Ok(options.multipart(multipart_parts(payload)?))
    } else {
        options.json(payload)
    }
}

pub struct ProgressApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> ApiClient<T> {
    pub fn progress(&self) -> ProgressApi<'_, T> {
        ProgressApi { client: self }
    }
}

impl<T: Transport> ProgressApi<'_, T> {
    /// `GET /progresses?limit=&offset=`
    pub async fn get_all(&self, limit: u32, offset: u32) -> ApiResult<Vec<Progress>> {
        self.client
            .request_list(COLLECTION, RequestOptions::get().page(limit, offset))
            .await
    }

    /// `GET /progresses/{id}`
    pub async fn get_by_id(&self, id: &str) -> ApiResult<Option<Progress>> {
        self.client.request(&item_endpoint(id), RequestOptions::get()).await
    }

    /// `GET /progresses/user/{userId}?limit=&offset=`
    pub async fn get_by_user(&self, user_id: &str, limit: u32, offset: u32) -> ApiResult<Vec<Progress>> {
        self.client
            .request_list(&scoped_endpoint("user", user_id), RequestOptions::get().page(limit, offset))
            .await
    }

    /// `GET /progresses/hive/{hiveId}?limit=&offset=`
    pub async fn get_by_hive(&self, hive_id: &str, limit: u32, offset: u32) -> ApiResult<Vec<Progress>> {
        self.client
            .request_list(&scoped_endpoint("hive", hive_id), RequestOptions::get().page(limit, offset))
            .await
    }

    /// `GET /progresses/habit/{habitId}?limit=&offset=`
    pub async fn get_by_habit(&self, habit_id: &str, limit: u32, offset: u32) -> ApiResult<Vec<Progress>> {
        self.client
            .request_list(&scoped_endpoint("habit", habit_id), RequestOptions::get().page(limit, offset))
            .await
    }

    /// `POST /progresses`, multipart when evidence is attached, JSON otherwise.
    pub async fn create(&self, payload: &CreateProgress) -> ApiResult<Option<Progress>> {
        let options = create_options(payload)?;
        self.client.request(COLLECTION, options).await
    }

    /// `PUT /progresses/{id}`
    pub async fn update(&self, id: &str, payload: &UpdateProgress) -> ApiResult<Option<Progress>> {
        let options = RequestOptions::new(Method::Put).json(payload)?;
        self.client.request(&item_endpoint(id), options).await
    }

    /// `PATCH /progresses/{id}/status?status=`
    pub async fn update_status(&self, id: &str, status: ProgressStatus) -> ApiResult<Option<Progress>> {
        let endpoint = format!("{}/status", item_endpoint(id));
        let options = RequestOptions::new(Method::Patch).query("status", status.as_str());
        self.client.request(&endpoint, options).await
    }

    /// `PATCH /progresses/{id}/verify?verifiedBy=`
    pub async fn verify(&self, id: &str, verified_by: &str) -> ApiResult<Option<Progress>> {
        let endpoint = format!("{}/verify", item_endpoint(id));
        let options = RequestOptions::new(Method::Patch).query("verifiedBy", verified_by);
        self.client.request(&endpoint, options).await
    }

    /// `DELETE /progresses/{id}`
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.execute(&item_endpoint(id), RequestOptions::delete()).await
    }
}
