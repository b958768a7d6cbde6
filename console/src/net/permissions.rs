//! Permission façade over `/permissions`.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use super::client::{ApiClient, RequestOptions, encode_segment};
use super::error::ApiResult;
use super::transport::{Method, Transport};
use super::types::{NamePayload, Permission};

const COLLECTION: &str = "/permissions";

fn item_endpoint(id: &str) -> String {
    format!("{COLLECTION}/{}", encode_segment(id))
}

pub struct PermissionsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> ApiClient<T> {
    pub fn permissions(&self) -> PermissionsApi<'_, T> {
        PermissionsApi { client: self }
    }
}

impl<T: Transport> PermissionsApi<'_, T> {
    pub async fn get_all(&self, limit: u32, offset: u32) -> ApiResult<Vec<Permission>> {
        self.client
            .request_list(COLLECTION, RequestOptions::get().page(limit, offset))
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Option<Permission>> {
        self.client.request(&item_endpoint(id), RequestOptions::get()).await
    }

    pub async fn create(&self, payload: &NamePayload) -> ApiResult<Option<Permission>> {
        let options = RequestOptions::new(Method::Post).json(payload)?;
        self.client.request(COLLECTION, options).await
    }

    pub async fn update(&self, id: &str, payload: &NamePayload) -> ApiResult<Option<Permission>> {
        let options = RequestOptions::new(Method::Put).json(payload)?;
        self.client.request(&item_endpoint(id), options).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.execute(&item_endpoint(id), RequestOptions::delete()).await
    }
}
