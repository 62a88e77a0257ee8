//! List Endpoints

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::List;

#[derive(Serialize)]
struct ListArgs<'a> {
    name: &'a str,
    position: i32,
}

impl ApiClient {
    pub async fn list_lists(&self, board_id: u32) -> Result<Vec<List>, ApiError> {
        self.get_json(&format!("boards/{}/lists", board_id)).await
    }

    pub async fn create_list(&self, board_id: u32, name: &str, position: i32) -> Result<List, ApiError> {
        self.post_json(&format!("boards/{}/lists", board_id), &ListArgs { name, position }).await
    }

    /// Stores both name and position as sent
    pub async fn update_list(&self, id: u32, name: &str, position: i32) -> Result<List, ApiError> {
        self.put_json(&format!("lists/{}", id), &ListArgs { name, position }).await
    }

    pub async fn delete_list(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("lists/{}", id)).await
    }
}
