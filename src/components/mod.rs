//! UI Components
//!
//! Leptos components for the board client. Event listeners are attached to
//! the elements each component renders.

mod auth_form;
mod board_editor;
mod board_view;
mod card_editor;
mod card_item;
mod dashboard;
mod delete_confirm_button;
mod editor_target;
mod error_banner;
mod list_column;
mod log_panel;
mod nav_bar;
mod new_board_form;
mod new_card_form;
mod new_list_form;

pub use auth_form::{LoginForm, RegisterForm};
pub use board_editor::BoardEditor;
pub use board_view::BoardView;
pub use card_editor::CardEditor;
pub use card_item::CardItem;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use editor_target::EditTarget;
pub use error_banner::ErrorBanner;
pub use list_column::ListColumn;
pub use log_panel::LogPanel;
pub use nav_bar::NavBar;
pub use new_board_form::NewBoardForm;
pub use new_card_form::NewCardForm;
pub use new_list_form::NewListForm;
