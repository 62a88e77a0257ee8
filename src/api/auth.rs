//! Auth Endpoints
//!
//! The backend keeps the session in a cookie; these calls only move it.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::User;

#[derive(Serialize)]
struct RegisterArgs<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        self.post_json("register", &RegisterArgs { name, email, password }).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.post_json("login", &LoginArgs { email, password }).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("logout").await
    }

    /// Current user, if the session cookie is still valid
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("me").await
    }
}
