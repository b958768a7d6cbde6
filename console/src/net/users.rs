//! User façade over `/users`.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::client::{ApiClient, RequestOptions, encode_segment};
use super::error::ApiResult;
use super::transport::{Method, Transport};
use super::types::{User, UserPayload};

const COLLECTION: &str = "/users";

fn item_endpoint(id: &str) -> String {
    format!("{COLLECTION}/{}", encode_segment(id))
}

pub struct UsersApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> ApiClient<T> {
    pub fn users(&self) -> UsersApi<'_, T> {
        UsersApi { client: self }
    }
}

impl<T: Transport> UsersApi<'_, T> {
    pub async fn get_all(&self, limit: u32, offset: u32) -> ApiResult<Vec<User>> {
        self.client
            .request_list(COLLECTION, RequestOptions::get().page(limit, offset))
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Option<User>> {
        self.client.request(&item_endpoint(id), RequestOptions::get()).await
    }

    pub async fn create(&self, payload: &UserPayload) -> ApiResult<Option<User>> {
        let options = RequestOptions::new(Method::Post).json(payload)?;
        self.client.request(COLLECTION, options).await
    }

    pub async fn update(&self, id: &str, payload: &UserPayload) -> ApiResult<Option<User>> {
        let options = RequestOptions::new(Method::Put).json(payload)?;
        self.client.request(&item_endpoint(id), options).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.execute(&item_endpoint(id), RequestOptions::delete()).await
    }
}
