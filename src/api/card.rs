//! Card Endpoints

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::Card;

#[derive(Serialize)]
struct CreateCardArgs<'a> {
    title: &'a str,
    description: &'a str,
    position: i32,
}

#[derive(Serialize)]
struct UpdateCardArgs<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct MoveCardArgs {
    list_id: u32,
    position: i32,
}

impl ApiClient {
    pub async fn list_cards(&self, list_id: u32) -> Result<Vec<Card>, ApiError> {
        self.get_json(&format!("lists/{}/cards", list_id)).await
    }

    pub async fn get_card(&self, id: u32) -> Result<Card, ApiError> {
        self.get_json(&format!("cards/{}", id)).await
    }

    pub async fn create_card(&self, list_id: u32, title: &str, description: &str, position: i32) -> Result<Card, ApiError> {
        let args = CreateCardArgs { title, description, position };
        self.post_json(&format!("lists/{}/cards", list_id), &args).await
    }

    pub async fn update_card(&self, id: u32, title: &str, description: &str) -> Result<Card, ApiError> {
        self.put_json(&format!("cards/{}", id), &UpdateCardArgs { title, description }).await
    }

    /// Move a card to `list_id` at `position`; the server renumbers siblings
    pub async fn move_card(&self, id: u32, list_id: u32, position: i32) -> Result<Card, ApiError> {
        self.put_json(&format!("cards/{}/move", id), &MoveCardArgs { list_id, position }).await
    }

    pub async fn delete_card(&self, id: u32) -> Result<(), ApiError> {
        self.delete(&format!("cards/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_args_wire_names() {
        let json = serde_json::to_value(MoveCardArgs { list_id: 4, position: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"list_id": 4, "position": 2}));
    }
}
