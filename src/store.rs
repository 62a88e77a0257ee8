//! Application State Store
//!
//! Transient read copies of server data, replaced wholesale on every fetch.
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::BoardSnapshot;
use crate::models::Board;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Boards shown on the dashboard
    pub boards: Vec<Board>,
    /// Board currently open, with its columns
    pub snapshot: Option<BoardSnapshot>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_boards(store: &AppStore, boards: Vec<Board>) {
    store.boards().set(boards);
}

/// Replace the open board. Whichever response lands last wins.
pub fn store_set_snapshot(store: &AppStore, snapshot: BoardSnapshot) {
    store.snapshot().set(Some(snapshot));
}

/// Forget everything fetched for the previous session
pub fn store_clear(store: &AppStore) {
    store.boards().set(Vec::new());
    store.snapshot().set(None);
}
