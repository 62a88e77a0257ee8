//! Frontend Models
//!
//! Read copies of backend entities. Boards, lists and cards keep the
//! backend's Go field names on the wire.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "CreatedBy", default)]
    pub created_by: u32,
    #[serde(rename = "CreatedAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: Option<String>,
}

/// List (column) data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "BoardID")]
    pub board_id: u32,
    #[serde(rename = "Position")]
    pub position: i32,
    #[serde(rename = "CreatedAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: Option<String>,
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "ListID")]
    pub list_id: u32,
    #[serde(rename = "Position")]
    pub position: i32,
    #[serde(rename = "CreatedAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: Option<String>,
}

impl Board {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_date)
    }
}

impl Card {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Backend timestamps come with or without a zone offset
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_backend_json() {
        let json = r#"{
            "ID": 3,
            "Name": "Website",
            "Description": "Redesign",
            "CreatedBy": 1,
            "CreatedAt": "2024-05-02T09:15:00.123456+02:00",
            "UpdatedAt": "2024-05-02T09:15:00.123456+02:00"
        }"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.id, 3);
        assert_eq!(board.description_text(), "Redesign");
        assert_eq!(board.created_on(), NaiveDate::from_ymd_opt(2024, 5, 2));
    }

    #[test]
    fn test_card_null_description() {
        let json = r#"{"ID": 9, "Title": "Ship", "Description": null, "ListID": 4, "Position": 2}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.description, None);
        assert_eq!(card.description_text(), "");
        assert_eq!((card.list_id, card.position), (4, 2));
    }

    #[test]
    fn test_list_from_backend_json() {
        let json = r#"{"ID": 4, "Name": "Doing", "BoardID": 3, "Position": 1, "CreatedAt": "2024-05-02T09:15:00"}"#;
        let list: List = serde_json::from_str(json).unwrap();
        assert_eq!(list.board_id, 3);
        assert_eq!(list.position, 1);
    }

    #[test]
    fn test_user_lowercase_fields() {
        let json = r#"{"id": 1, "name": "Ada", "email": "ada@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 31);
        assert_eq!(parse_date("2024-01-31T23:00:00Z"), expected);
        assert_eq!(parse_date("2024-01-31T23:00:00.5"), expected);
        assert_eq!(parse_date("yesterday"), None);
    }
}
