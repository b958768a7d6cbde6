//! Auth façade: credential exchange and identity lookup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::{ApiClient, RequestOptions};
use super::error::{ApiError, ApiResult};
use super::transport::{Method, Transport};
use super::types::{Credentials, Session, User};

const LOGIN_ENDPOINT: &str = "/auth/login";
const ME_ENDPOINT: &str = "/auth/me";

pub struct AuthApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T: Transport> ApiClient<T> {
    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi { client: self }
    }
}

impl<T: Transport> AuthApi<'_, T> {
    /// `POST /auth/login`. A success without a session body is treated as a
    /// decode failure since there is no token to keep.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Session> {
        let options = RequestOptions::new(Method::Post).json(credentials)?;
        self.client
            .request::<Session>(LOGIN_ENDPOINT, options)
            .await?
            .ok_or_else(|| ApiError::Decode("login response had no session".to_owned()))
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> ApiResult<Option<User>> {
        self.client.request(ME_ENDPOINT, RequestOptions::get()).await
    }
}
