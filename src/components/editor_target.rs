//! Edit Target Type
//!
//! Represents the target being edited in the side panel.

/// Edit target type - either a Card or the open Board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    /// Card being edited (id)
    Card(u32),
    /// Board being edited (id)
    Board(u32),
}
