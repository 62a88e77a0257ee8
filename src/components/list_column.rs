//! List Column Component
//!
//! One list on the board: header with rename/reorder/delete, the card
//! container that accepts drops, and the add-card form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    make_on_container_dragleave, make_on_container_dragover, make_on_container_drop, DndSignals, MoveCommand,
};

use crate::board::{next_card_position, Column, ListPlacement, ListSwap};
use crate::components::{CardItem, DeleteConfirmButton, EditTarget, NewCardForm};
use crate::context::use_app_context;

#[component]
pub fn ListColumn(
    column: Column,
    /// Writes behind the ◀ / ▶ buttons, `None` at the edges
    swap_left: Option<ListSwap>,
    swap_right: Option<ListSwap>,
    dnd: DndSignals,
    #[prop(into)] on_move: Callback<MoveCommand>,
    set_editing_target: WriteSignal<Option<EditTarget>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let list_id = column.list.id;
    let list_name = column.list.name.clone();
    let card_count = column.cards.len();
    let append_position = next_card_position(&column);

    let (renaming, set_renaming) = signal(false);
    let (name_value, set_name_value) = signal(list_name.clone());

    let list = column.list.clone();
    let save_name = {
        let list_name = list_name.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let name = name_value.get_untracked().trim().to_string();
            set_renaming.set(false);
            if name.is_empty() || name == list_name {
                return;
            }
            let update = ListPlacement::renamed(&list, &name);
            spawn_local(async move {
                match ctx.api().update_list(update.id, &update.name, update.position).await {
                    Ok(_) => ctx.reload(),
                    Err(e) => ctx.report_error("Rename list", &e),
                }
            });
        }
    };

    // Both lists are written; reload either way so a half-applied swap shows
    let run_swap = move |swap: Option<ListSwap>| {
        let Some(swap) = swap else {
            return;
        };
        spawn_local(async move {
            for update in swap.updates() {
                if let Err(e) = ctx.api().update_list(update.id, &update.name, update.position).await {
                    ctx.report_error("Move list", &e);
                    break;
                }
            }
            ctx.reload();
        });
    };
    let can_left = swap_left.is_some();
    let can_right = swap_right.is_some();
    let shift_left = move |_| run_swap(swap_left.clone());
    let shift_right = move |_| run_swap(swap_right.clone());

    let delete_list = move |_| {
        spawn_local(async move {
            match ctx.api().delete_list(list_id).await {
                Ok(()) => ctx.reload(),
                Err(e) => ctx.report_error("Delete list", &e),
            }
        });
    };

    let on_dragover = make_on_container_dragover(dnd, list_id);
    let on_dragleave = make_on_container_dragleave(dnd, list_id);
    let on_drop = make_on_container_drop(dnd, list_id, move |command| on_move.run(command));

    let container_class = move || {
        let hovered = dnd.hover_read.get().is_some_and(|h| h.list_id == list_id);
        if hovered { "card-container drag-over" } else { "card-container" }
    };

    view! {
        <div class="list-column">
            <div class="list-header">
                {move || if renaming.get() {
                    view! {
                        <form class="list-rename-form" on:submit=save_name.clone()>
                            <input
                                type="text"
                                required
                                prop:value=move || name_value.get()
                                on:input=move |ev| set_name_value.set(event_target_value(&ev))
                            />
                        </form>
                    }.into_any()
                } else {
                    let name = list_name.clone();
                    view! {
                        <h3 class="list-title" on:dblclick=move |_| set_renaming.set(true)>{name}</h3>
                    }.into_any()
                }}
                <span class="list-count">{card_count}</span>
                <div class="list-actions">
                    <button
                        type="button"
                        class="list-shift-btn"
                        title="Move left"
                        disabled=!can_left
                        on:click=shift_left
                    >"◀"</button>
                    <button
                        type="button"
                        class="list-shift-btn"
                        title="Move right"
                        disabled=!can_right
                        on:click=shift_right
                    >"▶"</button>
                    <DeleteConfirmButton button_class="list-delete-btn" prompt="Delete list?" on_confirm=delete_list />
                </div>
            </div>

            <div
                class=container_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                {column.cards.into_iter().map(|card| {
                    let card_id = card.id;
                    view! {
                        <Show when=move || dnd.shows_indicator(list_id, Some(card_id))>
                            <div class="drop-indicator"></div>
                        </Show>
                        <CardItem card=card dnd=dnd set_editing_target=set_editing_target />
                    }
                }).collect_view()}
                <Show when=move || dnd.shows_indicator(list_id, None)>
                    <div class="drop-indicator"></div>
                </Show>
            </div>

            <NewCardForm list_id=list_id position=append_position />
        </div>
    }
}
