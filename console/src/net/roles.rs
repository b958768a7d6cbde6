//! Role façade over `/roles`, including role-permission assignments.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use super::client::{ApiClient, RequestOptions, encode_segment};
use super::error::ApiResult;
use super::transport::{Method, Transport};
use super::types::{NamePayload, Permission, Role};

const COLLECTION: &str = "/roles";

fn item_endpoint(id: &str) -> String {
    format!("{COLLECTION}/{}", encode_segment(id))
}

fn assignment_endpoint(role_id: &str, permission_id: &str) -> String {
    format!("{}/permissions/{}", item_endpoint(role_id), encode_segment(permission_id))
}

pub struct RolesApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> ApiClient<T> {
    pub fn roles(&self) -> RolesApi<'_, T> {
        RolesApi { client: self }
    }
}

impl<T: Transport> RolesApi<'_, T> {
    pub async fn get_all(&self, limit: u32, offset: u32) -> ApiResult<Vec<Role>> {
        self.client
            .request_list(COLLECTION, RequestOptions::get().page(limit, offset))
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Option<Role>> {
        self.client.request(&item_endpoint(id), RequestOptions::get()).await
    }

    pub async fn create(&self, payload: &NamePayload) -> ApiResult<Option<Role>> {
        let options = RequestOptions::new(Method::Post).json(payload)?;
        self.client.request(COLLECTION, options).await
    }

    pub async fn update(&self, id: &str, payload: &NamePayload) -> ApiResult<Option<Role>> {
        let options = RequestOptions::new(Method::Put).json(payload)?;
        self.client.request(&item_endpoint(id), options).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.execute(&item_endpoint(id), RequestOptions::delete()).await
    }

    /// `GET /roles/{id}/permissions`
    pub async fn get_permissions(&self, role_id: &str) -> ApiResult<Vec<Permission>> {
        let endpoint = format!("{}/permissions", item_endpoint(role_id));
        self.client.request_list(&endpoint, RequestOptions::get()).await
    }

    /// `POST /roles/{id}/permissions/{permissionId}`
    pub async fn assign_permission(&self, role_id: &str, permission_id: &str) -> ApiResult<()> {
        self.client
            .execute(&assignment_endpoint(role_id, permission_id), RequestOptions::new(Method::Post))
            .await
    }

    /// `DELETE /roles/{id}/permissions/{permissionId}`
    pub async fn revoke_permission(&self, role_id: &str, permission_id: &str) -> ApiResult<()> {
        self.client
            .execute(&assignment_endpoint(role_id, permission_id), RequestOptions::delete())
            .await
    }
}
