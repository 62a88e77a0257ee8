//! Card Item Component
//!
//! A single draggable card inside a list column.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, DndSignals};

use crate::components::EditTarget;
use crate::models::Card;

#[component]
pub fn CardItem(
    card: Card,
    dnd: DndSignals,
    set_editing_target: WriteSignal<Option<EditTarget>>,
) -> impl IntoView {
    let id = card.id;
    let list_id = card.list_id;
    let description = card.description_text().to_string();
    let has_description = !description.is_empty();

    let on_dragstart = make_on_dragstart(dnd, id, list_id);
    let on_dragend = make_on_dragend(dnd);

    let card_class = move || {
        if dnd.is_dragging(id) { "kanban-card dragging" } else { "kanban-card" }
    };

    view! {
        <div
            class=card_class
            draggable="true"
            data-card-id=id.to_string()
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:click=move |_| set_editing_target.set(Some(EditTarget::Card(id)))
        >
            <div class="kanban-card-title">{card.title}</div>
            {has_description.then(|| view! {
                <div class="kanban-card-description">{description}</div>
            })}
        </div>
    }
}
