//! Board Endpoints

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::Board;

#[derive(Serialize)]
struct BoardArgs<'a> {
    name: &'a str,
    description: &'a str,
}

impl ApiClient {
    /// Boards owned by the logged-in user
    pub async fn list_boards(&self) -> Result<Vec<Board>, ApiError> {
        self.get_json("boards").await
    }

    pub async fn get_board(&self, id: u32) -> Result<Board, ApiError> {
        self.get_json(&format!("boards/{}", id)).await
    }

    pub async fn create_board(&self, name: &str, description: &str) -> Result<Board, ApiError> {
        self.post_json("boards", &BoardArgs { name, description }).await
    }

    pub async fn update_board(&self, id: u32, name: &str, description: &str) -> Result<Board, ApiError> {
        self.put_json(&format!("boards/{}", id), &BoardArgs { name, description }).await
    }

    pub async fn delete_board(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("boards/{}", id)).await
    }
}
