//! Leptos DragDrop Utilities
//!
//! Card drag-and-drop for Leptos using native HTML5 drag events.
//! Listeners are attached to the rendered cards and list containers;
//! the geometry lives in [`engine`].

pub mod engine;

pub use engine::{
    drop_command, find_insertion_anchor, resolve_drop, CardBox, DragSession, DragState, HoverTarget, MoveCommand,
};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Attribute carrying the card id on every draggable card element
pub const CARD_ID_ATTR: &str = "data-card-id";

const CARD_SELECTOR: &str = "[data-card-id]";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state_read: ReadSignal<DragState>,
    pub state_write: WriteSignal<DragState>,
    /// Current insertion feedback, only set while dragging over a list
    pub hover_read: ReadSignal<Option<HoverTarget>>,
    pub hover_write: WriteSignal<Option<HoverTarget>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (state_read, state_write) = signal(DragState::Idle);
    let (hover_read, hover_write) = signal(None::<HoverTarget>);
    DndSignals {
        state_read,
        state_write,
        hover_read,
        hover_write,
    }
}

impl DndSignals {
    pub fn session(&self) -> Option<DragSession> {
        self.state_read.get_untracked().session().copied()
    }

    /// Reactive: is this card the one being dragged
    pub fn is_dragging(&self, card_id: u32) -> bool {
        self.state_read.get().is_dragging_card(card_id)
    }

    /// Reactive: should the indicator be drawn before `anchor` in `list_id`
    pub fn shows_indicator(&self, list_id: u32, anchor: Option<u32>) -> bool {
        self.hover_read.get() == Some(HoverTarget { list_id, anchor })
    }
}

/// End drag operation without a drop
pub fn end_drag(dnd: &DndSignals) {
    dnd.state_write.update(DragState::cancel);
    dnd.hover_write.set(None);
}

/// End drag operation on drop, handing back the session if one was live
pub fn take_drag(dnd: &DndSignals) -> Option<DragSession> {
    let session = dnd.state_write.try_update(DragState::take).flatten();
    dnd.hover_write.set(None);
    session
}

/// Read the layout of every card in `container` except the dragged one,
/// in rendered (document) order.
pub fn measure_candidates(container: &web_sys::Element, exclude: Option<u32>) -> Vec<CardBox> {
    let Ok(nodes) = container.query_selector_all(CARD_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let id = el.get_attribute(CARD_ID_ATTR)?.parse::<u32>().ok()?;
            if Some(id) == exclude {
                return None;
            }
            let rect = el.get_bounding_client_rect();
            Some(CardBox::new(id, rect.top(), rect.height()))
        })
        .collect()
}

fn event_container(ev: &web_sys::DragEvent) -> Option<web_sys::Element> {
    ev.current_target()?.dyn_into::<web_sys::Element>().ok()
}

/// Create dragstart handler for a card
pub fn make_on_dragstart(dnd: DndSignals, card_id: u32, list_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox will not start a drag without payload
            let _ = dt.set_data("text/plain", &card_id.to_string());
        }
        dnd.state_write.update(|state| {
            state.start(DragSession {
                card_id,
                source_list_id: list_id,
            })
        });
        dnd.hover_write.set(None);
        log::debug!("drag start: card={} list={}", card_id, list_id);
    }
}

/// Create dragend handler for a card.
/// Fires after drop as well; the session is cleared either way.
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        if dnd.session().is_some() {
            log::debug!("drag cancelled");
        }
        end_drag(&dnd);
    }
}

/// Create dragover handler for a list's card container.
/// Recomputes the insertion point and marks it; the drag state is untouched.
pub fn make_on_container_dragover(dnd: DndSignals, list_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        let Some(session) = dnd.session() else {
            return;
        };
        // Accept the drop
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        let Some(container) = event_container(&ev) else {
            return;
        };
        let candidates = measure_candidates(&container, Some(session.card_id));
        let anchor = find_insertion_anchor(f64::from(ev.client_y()), &candidates);
        let target = HoverTarget::for_session(&session, list_id, anchor);
        if dnd.hover_read.get_untracked() != Some(target) {
            dnd.hover_write.set(Some(target));
        }
    }
}

/// Create dragleave handler for a list's card container
pub fn make_on_container_dragleave(dnd: DndSignals, list_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        // Moving onto a child element also fires dragleave
        if let (Some(container), Some(related)) = (event_container(&ev), ev.related_target()) {
            if let Some(node) = related.dyn_ref::<web_sys::Node>() {
                if container.contains(Some(node)) {
                    return;
                }
            }
        }
        if dnd.hover_read.get_untracked().is_some_and(|h| h.list_id == list_id) {
            dnd.hover_write.set(None);
        }
    }
}

/// Create drop handler for a list's card container.
/// The session is torn down before `on_drop` runs, so the command outcome
/// never affects drag state. A drop without a live session does nothing.
pub fn make_on_container_drop<F>(dnd: DndSignals, list_id: u32, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(MoveCommand) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let Some(session) = take_drag(&dnd) else {
            return;
        };
        let candidates = event_container(&ev)
            .map(|container| measure_candidates(&container, Some(session.card_id)))
            .unwrap_or_default();
        let command = drop_command(&session, list_id, f64::from(ev.client_y()), &candidates);
        log::debug!(
            "drop: card={} -> list={} position={}",
            command.card_id,
            command.list_id,
            command.position
        );
        on_drop(command);
    }
}
