//! Board Utilities
//!
//! Helpers for turning fetched lists and cards into ordered columns.

use crate::api::{ApiClient, ApiError};
use crate::models::{Board, Card, List};
use std::collections::HashMap;

/// A list with its cards, both in position order
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub list: List,
    pub cards: Vec<Card>,
}

/// Everything rendered on the board screen
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub board: Board,
    pub columns: Vec<Column>,
}

/// Direction for list reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Left,
    Right,
}

/// Group cards under their lists, ordered by position (id breaks ties).
/// Cards pointing at an unknown list are dropped.
pub fn build_columns(mut lists: Vec<List>, cards: Vec<Card>) -> Vec<Column> {
    let mut by_list: HashMap<u32, Vec<Card>> = HashMap::new();
    for card in cards {
        by_list.entry(card.list_id).or_default().push(card);
    }

    lists.sort_by_key(|l| (l.position, l.id));
    lists
        .into_iter()
        .map(|list| {
            let mut cards = by_list.remove(&list.id).unwrap_or_default();
            cards.sort_by_key(|c| (c.position, c.id));
            Column { list, cards }
        })
        .collect()
}

/// New cards go to the end of their list
pub fn next_card_position(column: &Column) -> i32 {
    column.cards.len() as i32
}

/// New lists go to the right of the board
pub fn next_list_position(columns: &[Column]) -> i32 {
    columns.len() as i32
}

/// Stored name and position written back for one list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPlacement {
    pub id: u32,
    pub name: String,
    pub position: i32,
}

impl ListPlacement {
    /// Rename keeps the stored position, whatever the rendered index
    pub fn renamed(list: &List, name: &str) -> Self {
        Self {
            id: list.id,
            name: name.to_string(),
            position: list.position,
        }
    }
}

/// The two writes that move a list one step: the mover takes its
/// neighbour's position and the neighbour takes the mover's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSwap {
    pub mover: ListPlacement,
    pub neighbour: ListPlacement,
}

impl ListSwap {
    pub fn updates(&self) -> [&ListPlacement; 2] {
        [&self.mover, &self.neighbour]
    }
}

/// Swap for moving a list one step, or `None` at the edge.
/// The server stores positions verbatim, so both lists are written.
/// Tied positions fall back to the rendered indices.
pub fn list_swap(columns: &[Column], list_id: u32, shift: Shift) -> Option<ListSwap> {
    let index = columns.iter().position(|c| c.list.id == list_id)?;
    let other = match shift {
        Shift::Left => index.checked_sub(1)?,
        Shift::Right if index + 1 < columns.len() => index + 1,
        Shift::Right => return None,
    };
    let (mover, neighbour) = (&columns[index].list, &columns[other].list);
    let (mover_position, neighbour_position) = if mover.position == neighbour.position {
        (other as i32, index as i32)
    } else {
        (neighbour.position, mover.position)
    };
    Some(ListSwap {
        mover: ListPlacement {
            id: mover.id,
            name: mover.name.clone(),
            position: mover_position,
        },
        neighbour: ListPlacement {
            id: neighbour.id,
            name: neighbour.name.clone(),
            position: neighbour_position,
        },
    })
}

/// Fetch a board with all of its lists and cards
pub async fn fetch_board(api: &ApiClient, board_id: u32) -> Result<BoardSnapshot, ApiError> {
    let board = api.get_board(board_id).await?;
    let lists = api.list_lists(board_id).await?;

    let mut cards = Vec::new();
    for list in &lists {
        cards.extend(api.list_cards(list.id).await?);
    }

    log::debug!("loaded board {}: {} lists, {} cards", board_id, lists.len(), cards.len());
    Ok(BoardSnapshot {
        board,
        columns: build_columns(lists, cards),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(id: u32, position: i32) -> List {
        List {
            id,
            name: format!("List {}", id),
            board_id: 1,
            position,
            created_at: None,
            updated_at: None,
        }
    }

    fn make_card(id: u32, list_id: u32, position: i32) -> Card {
        Card {
            id,
            title: format!("Card {}", id),
            description: None,
            list_id,
            position,
            created_at: None,
            updated_at: None,
        }
    }

    fn ids(column: &Column) -> Vec<u32> {
        column.cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_build_columns_orders_lists_and_cards() {
        let lists = vec![make_list(20, 1), make_list(10, 0)];
        let cards = vec![
            make_card(1, 10, 2),
            make_card(2, 20, 0),
            make_card(3, 10, 0),
            make_card(4, 10, 1),
        ];

        let columns = build_columns(lists, cards);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].list.id, 10);
        assert_eq!(ids(&columns[0]), vec![3, 4, 1]);
        assert_eq!(columns[1].list.id, 20);
        assert_eq!(ids(&columns[1]), vec![2]);
    }

    #[test]
    fn test_build_columns_position_ties_use_id() {
        let columns = build_columns(
            vec![make_list(1, 0)],
            vec![make_card(9, 1, 0), make_card(5, 1, 0)],
        );
        assert_eq!(ids(&columns[0]), vec![5, 9]);
    }

    #[test]
    fn test_build_columns_drops_orphan_cards() {
        let columns = build_columns(vec![make_list(1, 0)], vec![make_card(7, 99, 0)]);
        assert!(columns[0].cards.is_empty());
    }

    #[test]
    fn test_next_positions() {
        let columns = build_columns(
            vec![make_list(1, 0), make_list(2, 1)],
            vec![make_card(1, 1, 0), make_card(2, 1, 1)],
        );
        assert_eq!(next_card_position(&columns[0]), 2);
        assert_eq!(next_card_position(&columns[1]), 0);
        assert_eq!(next_list_position(&columns), 2);
        assert_eq!(next_list_position(&[]), 0);
    }

    fn order(columns: &[Column]) -> Vec<u32> {
        columns.iter().map(|c| c.list.id).collect()
    }

    /// Write the swap the way the server does (verbatim) and rebuild
    fn apply(lists: &mut [List], swap: &ListSwap) {
        for update in swap.updates() {
            let list = lists.iter_mut().find(|l| l.id == update.id).unwrap();
            list.name = update.name.clone();
            list.position = update.position;
        }
    }

    #[test]
    fn test_rename_keeps_stored_position() {
        // Position 7 after earlier deletes, rendered second
        let mut lists = vec![make_list(1, 0), make_list(2, 7), make_list(3, 9)];
        let columns = build_columns(lists.clone(), vec![]);

        let update = ListPlacement::renamed(&columns[1].list, "Doing");
        assert_eq!(update, ListPlacement { id: 2, name: "Doing".to_string(), position: 7 });

        let list = lists.iter_mut().find(|l| l.id == update.id).unwrap();
        list.name = update.name;
        list.position = update.position;
        assert_eq!(order(&build_columns(lists, vec![])), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_swap_edges() {
        let columns = build_columns(vec![make_list(1, 0), make_list(2, 1), make_list(3, 2)], vec![]);
        assert_eq!(list_swap(&columns, 1, Shift::Left), None);
        assert_eq!(list_swap(&columns, 3, Shift::Right), None);
        assert_eq!(list_swap(&columns, 42, Shift::Left), None);
    }

    #[test]
    fn test_list_swap_right_moves_list() {
        let mut lists = vec![make_list(1, 0), make_list(2, 1)];
        let columns = build_columns(lists.clone(), vec![]);

        let swap = list_swap(&columns, 1, Shift::Right).unwrap();
        assert_eq!(swap.mover.position, 1);
        assert_eq!(swap.neighbour.position, 0);

        apply(&mut lists, &swap);
        assert_eq!(order(&build_columns(lists, vec![])), vec![2, 1]);
    }

    #[test]
    fn test_list_swap_keeps_stored_positions_with_gaps() {
        let mut lists = vec![make_list(1, 0), make_list(2, 4), make_list(3, 9)];
        let columns = build_columns(lists.clone(), vec![]);

        let swap = list_swap(&columns, 3, Shift::Left).unwrap();
        assert_eq!(swap.mover, ListPlacement { id: 3, name: "List 3".to_string(), position: 4 });
        assert_eq!(swap.neighbour, ListPlacement { id: 2, name: "List 2".to_string(), position: 9 });

        apply(&mut lists, &swap);
        let columns = build_columns(lists.clone(), vec![]);
        assert_eq!(order(&columns), vec![1, 3, 2]);

        // And back again
        let swap = list_swap(&columns, 3, Shift::Right).unwrap();
        apply(&mut lists, &swap);
        assert_eq!(order(&build_columns(lists, vec![])), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_swap_tied_positions_use_indices() {
        let mut lists = vec![make_list(1, 0), make_list(2, 0)];
        let columns = build_columns(lists.clone(), vec![]);

        let swap = list_swap(&columns, 1, Shift::Right).unwrap();
        apply(&mut lists, &swap);
        assert_eq!(order(&build_columns(lists, vec![])), vec![2, 1]);
    }
}
