//! Drag Engine
//!
//! Pure insertion-point geometry and drag session bookkeeping.
//! Nothing here touches the DOM, so it runs (and is tested) natively.

/// Vertical extent of a rendered card, in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBox {
    pub id: u32,
    pub top: f64,
    pub height: f64,
}

impl CardBox {
    pub fn new(id: u32, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Find the card the pointer has not yet passed.
///
/// For every candidate `offset = pointer_y - midpoint`. Among candidates with
/// `offset < 0` the one closest to zero wins and becomes the insert-before
/// anchor. `None` means the pointer is below every card (append at end).
/// On equal offsets the earlier candidate in rendered order wins.
pub fn find_insertion_anchor(pointer_y: f64, candidates: &[CardBox]) -> Option<u32> {
    let mut best: Option<(f64, u32)> = None;
    for card in candidates {
        let offset = pointer_y - card.midpoint();
        if offset >= 0.0 {
            continue;
        }
        match best {
            Some((best_offset, _)) if offset <= best_offset => {}
            _ => best = Some((offset, card.id)),
        }
    }
    best.map(|(_, id)| id)
}

/// The card being dragged and the list it was picked up from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub card_id: u32,
    pub source_list_id: u32,
}

/// Drag state machine: Idle <-> Dragging
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    /// Begin a drag. Any stale session is replaced, so at most one exists.
    pub fn start(&mut self, session: DragSession) {
        *self = DragState::Dragging(session);
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging_card(&self, card_id: u32) -> bool {
        self.session().is_some_and(|s| s.card_id == card_id)
    }

    /// End the drag and hand back the session, if there was one
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Drag ended without a drop
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }
}

/// Where the drop indicator is drawn while hovering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverTarget {
    pub list_id: u32,
    /// Card to insert before; `None` draws the indicator at the end of the list
    pub anchor: Option<u32>,
}

impl HoverTarget {
    /// Hover feedback that matches what a drop would resolve to.
    /// Cross-list drags always append, so the anchor is dropped.
    pub fn for_session(session: &DragSession, list_id: u32, anchor: Option<u32>) -> Self {
        let anchor = if list_id == session.source_list_id { anchor } else { None };
        Self { list_id, anchor }
    }
}

/// Move request produced by a drop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCommand {
    pub card_id: u32,
    pub list_id: u32,
    pub position: i32,
}

/// Translate a drop into the (list, position) sent to the server.
///
/// `rendered_ids` is the target container's card order at drop time without
/// the dragged card. Within the source list the position is the anchor's
/// index (remove-then-reinsert), or the count of the other cards when there
/// is no anchor. Dropping on another list always appends.
pub fn resolve_drop(
    session: &DragSession,
    target_list_id: u32,
    rendered_ids: &[u32],
    anchor: Option<u32>,
) -> MoveCommand {
    let others: Vec<u32> = rendered_ids
        .iter()
        .copied()
        .filter(|id| *id != session.card_id)
        .collect();

    let index = if target_list_id == session.source_list_id {
        anchor
            .and_then(|anchor_id| others.iter().position(|id| *id == anchor_id))
            .unwrap_or(others.len())
    } else {
        others.len()
    };

    MoveCommand {
        card_id: session.card_id,
        list_id: target_list_id,
        position: index as i32,
    }
}

/// Full drop resolution from measured geometry: drop the dragged card from
/// the candidates, find the anchor under `pointer_y`, then resolve.
pub fn drop_command(
    session: &DragSession,
    target_list_id: u32,
    pointer_y: f64,
    candidates: &[CardBox],
) -> MoveCommand {
    let others: Vec<CardBox> = candidates
        .iter()
        .copied()
        .filter(|c| c.id != session.card_id)
        .collect();
    let anchor = find_insertion_anchor(pointer_y, &others);
    let rendered: Vec<u32> = others.iter().map(|c| c.id).collect();
    resolve_drop(session, target_list_id, &rendered, anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards_at(mids: &[(u32, f64)]) -> Vec<CardBox> {
        // 40px tall boxes centred on the given midpoints
        mids.iter().map(|(id, mid)| CardBox::new(*id, mid - 20.0, 40.0)).collect()
    }

    fn session(card_id: u32, source_list_id: u32) -> DragSession {
        DragSession { card_id, source_list_id }
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(CardBox::new(1, 100.0, 50.0).midpoint(), 125.0);
    }

    #[test]
    fn test_anchor_above_first_card() {
        let cards = cards_at(&[(1, 100.0), (2, 200.0), (3, 300.0)]);
        assert_eq!(find_insertion_anchor(10.0, &cards), Some(1));
        assert_eq!(find_insertion_anchor(99.9, &cards), Some(1));
    }

    #[test]
    fn test_anchor_below_last_card_is_none() {
        let cards = cards_at(&[(1, 100.0), (2, 200.0), (3, 300.0)]);
        assert_eq!(find_insertion_anchor(350.0, &cards), None);
        assert_eq!(find_insertion_anchor(300.5, &cards), None);
    }

    #[test]
    fn test_anchor_between_cards_is_next_card() {
        let cards = cards_at(&[(1, 100.0), (2, 200.0), (3, 300.0)]);
        assert_eq!(find_insertion_anchor(150.0, &cards), Some(2));
        assert_eq!(find_insertion_anchor(250.0, &cards), Some(3));
    }

    #[test]
    fn test_pointer_on_midpoint_has_passed_card() {
        let cards = cards_at(&[(1, 100.0), (2, 200.0)]);
        assert_eq!(find_insertion_anchor(100.0, &cards), Some(2));
        assert_eq!(find_insertion_anchor(200.0, &cards), None);
    }

    #[test]
    fn test_anchor_ignores_rendered_order() {
        // Candidates arrive out of vertical order; geometry still decides
        let cards = cards_at(&[(3, 300.0), (1, 100.0), (2, 200.0)]);
        assert_eq!(find_insertion_anchor(150.0, &cards), Some(2));
    }

    #[test]
    fn test_anchor_tie_prefers_first_candidate() {
        let cards = vec![CardBox::new(7, 180.0, 40.0), CardBox::new(8, 180.0, 40.0)];
        assert_eq!(find_insertion_anchor(150.0, &cards), Some(7));
    }

    #[test]
    fn test_anchor_empty_container() {
        assert_eq!(find_insertion_anchor(42.0, &[]), None);
    }

    #[test]
    fn test_drag_state_lifecycle() {
        let mut state = DragState::default();
        assert_eq!(state.session(), None);

        state.start(session(5, 1));
        assert!(state.is_dragging_card(5));
        assert!(!state.is_dragging_card(6));

        assert_eq!(state.take(), Some(session(5, 1)));
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.take(), None);
    }

    #[test]
    fn test_cancel_clears_session() {
        let mut state = DragState::default();
        state.start(session(5, 1));
        state.cancel();
        assert_eq!(state, DragState::Idle);
        assert!(!state.is_dragging_card(5));
    }

    #[test]
    fn test_start_replaces_stale_session() {
        let mut state = DragState::default();
        state.start(session(5, 1));
        state.start(session(9, 2));
        assert_eq!(state.session(), Some(&session(9, 2)));
    }

    #[test]
    fn test_intra_list_drop_uses_anchor_index() {
        // List 1 holds A(10) B(20) C(30) D(40); dragging A, others rendered
        let s = session(10, 1);
        let cmd = resolve_drop(&s, 1, &[20, 30, 40], Some(30));
        assert_eq!(cmd, MoveCommand { card_id: 10, list_id: 1, position: 1 });
    }

    #[test]
    fn test_intra_list_drop_without_anchor_appends() {
        // Four cards, dragged one excluded: position = length - 1
        let s = session(10, 1);
        let cmd = resolve_drop(&s, 1, &[20, 30, 40], None);
        assert_eq!(cmd.position, 3);
    }

    #[test]
    fn test_intra_list_drop_excludes_dragged_card_if_present() {
        let s = session(10, 1);
        let with_self = resolve_drop(&s, 1, &[10, 20, 30], None);
        let without_self = resolve_drop(&s, 1, &[20, 30], None);
        assert_eq!(with_self, without_self);
        assert_eq!(with_self.position, 2);

        let anchored = resolve_drop(&s, 1, &[10, 20, 30], Some(30));
        assert_eq!(anchored.position, 1);
    }

    #[test]
    fn test_worked_example_from_geometry() {
        // Cards at midpoints 100, 200, 300 while a fourth card is dragged
        let cards = cards_at(&[(1, 100.0), (2, 200.0), (3, 300.0)]);
        let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        let s = session(99, 1);

        let anchor = find_insertion_anchor(150.0, &cards);
        assert_eq!(resolve_drop(&s, 1, &ids, anchor).position, 1);

        let anchor = find_insertion_anchor(350.0, &cards);
        assert_eq!(resolve_drop(&s, 1, &ids, anchor).position, 3);
    }

    #[test]
    fn test_single_card_list_drop_on_self() {
        // Only card in the list: no other candidates, stays at 0
        let s = session(10, 1);
        assert_eq!(resolve_drop(&s, 1, &[], None).position, 0);
    }

    #[test]
    fn test_cross_list_drop_always_appends() {
        let s = session(10, 1);
        let top = resolve_drop(&s, 2, &[50, 60], Some(50));
        let bottom = resolve_drop(&s, 2, &[50, 60], None);
        assert_eq!(top, MoveCommand { card_id: 10, list_id: 2, position: 2 });
        assert_eq!(top, bottom);
        assert_eq!(resolve_drop(&s, 3, &[], None).position, 0);
    }

    #[test]
    fn test_unknown_anchor_appends() {
        let s = session(10, 1);
        assert_eq!(resolve_drop(&s, 1, &[20, 30], Some(77)).position, 2);
    }

    #[test]
    fn test_hover_target_matches_drop_resolution() {
        let s = session(10, 1);
        assert_eq!(
            HoverTarget::for_session(&s, 1, Some(20)),
            HoverTarget { list_id: 1, anchor: Some(20) }
        );
        assert_eq!(
            HoverTarget::for_session(&s, 2, Some(50)),
            HoverTarget { list_id: 2, anchor: None }
        );
    }

    #[test]
    fn test_drop_command_intra_list() {
        let cards = cards_at(&[(1, 100.0), (2, 200.0), (3, 300.0)]);
        let s = session(99, 1);
        assert_eq!(
            drop_command(&s, 1, 150.0, &cards),
            MoveCommand { card_id: 99, list_id: 1, position: 1 }
        );
        assert_eq!(drop_command(&s, 1, 350.0, &cards).position, 3);
    }

    #[test]
    fn test_drop_command_cross_list_ignores_pointer() {
        let cards = cards_at(&[(50, 100.0), (60, 200.0)]);
        let s = session(10, 1);
        let top = drop_command(&s, 2, 10.0, &cards);
        assert_eq!(top, MoveCommand { card_id: 10, list_id: 2, position: 2 });
        assert_eq!(drop_command(&s, 2, 500.0, &cards), top);
    }

    #[test]
    fn test_drop_command_skips_dragged_card_in_geometry() {
        // Dragged card 2 still measured at 200; pointer just above it
        let cards = cards_at(&[(1, 100.0), (2, 200.0), (3, 300.0)]);
        let s = session(2, 1);
        // Card 2 is not the anchor; card 3 is, at index 1 among the others
        assert_eq!(drop_command(&s, 1, 190.0, &cards).position, 1);
        assert_eq!(drop_command(&s, 1, 50.0, &cards).position, 0);
        assert_eq!(drop_command(&s, 1, 320.0, &cards).position, 2);
    }

    #[test]
    fn test_drop_then_dragend_leaves_no_session() {
        // Drop takes the session, the trailing dragend cancels an idle state
        let mut state = DragState::default();
        state.start(session(5, 1));
        let taken = state.take();
        assert_eq!(taken, Some(session(5, 1)));
        state.cancel();
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.session(), None);
    }
}
