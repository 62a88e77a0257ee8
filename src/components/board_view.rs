//! Board View Component
//!
//! Columns of cards with drag-and-drop reordering, plus the side editor.
//! Uses leptos-dragdrop; every successful mutation re-fetches the board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{create_dnd_signals, MoveCommand};

use crate::board::{fetch_board, list_swap, next_list_position, Shift};
use crate::components::{BoardEditor, CardEditor, EditTarget, ListColumn, NewListForm};
use crate::context::{use_app_context, View};
use crate::store::{store_set_snapshot, AppStateStoreFields};

#[component]
pub fn BoardView(board_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (editing_target, set_editing_target) = signal(None::<EditTarget>);

    // Drop any board left over from a previous visit before loading
    store.snapshot().set(None);

    // Load board when mounted or trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("loading board {} (trigger={})", board_id, trigger);
        spawn_local(async move {
            match fetch_board(&ctx.api(), board_id).await {
                Ok(snapshot) => store_set_snapshot(&store, snapshot),
                Err(e) => ctx.report_error("Load board", &e),
            }
        });
    });

    let dnd = create_dnd_signals();

    // Exactly one move per drop. No local reordering: on failure the board
    // stays as last fetched.
    let on_move = move |command: MoveCommand| {
        spawn_local(async move {
            match ctx.api().move_card(command.card_id, command.list_id, command.position).await {
                Ok(_) => {
                    log::info!(
                        "moved card {} to list {} at {}",
                        command.card_id,
                        command.list_id,
                        command.position
                    );
                    ctx.reload();
                }
                Err(e) => ctx.report_error("Move card", &e),
            }
        });
    };

    view! {
        <div class="board-layout">
            {move || match store.snapshot().get() {
                None => view! { <div class="board-loading">"Loading board..."</div> }.into_any(),
                Some(snapshot) => {
                    let board = snapshot.board.clone();
                    let new_list_position = next_list_position(&snapshot.columns);
                    let columns = snapshot.columns.clone();
                    view! {
                        <main class="board-main">
                            <div class="board-header">
                                <button type="button" class="btn btn-secondary" on:click=move |_| ctx.navigate(View::Dashboard)>
                                    "← Boards"
                                </button>
                                <div class="board-heading">
                                    <h1>{board.name.clone()}</h1>
                                    <p class="board-description">{board.description_text().to_string()}</p>
                                </div>
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    on:click=move |_| set_editing_target.set(Some(EditTarget::Board(board_id)))
                                >
                                    "Edit board"
                                </button>
                            </div>

                            <div class="board-columns">
                                {snapshot.columns.into_iter().map(|column| {
                                    let list_id = column.list.id;
                                    view! {
                                        <ListColumn
                                            column=column
                                            swap_left=list_swap(&columns, list_id, Shift::Left)
                                            swap_right=list_swap(&columns, list_id, Shift::Right)
                                            dnd=dnd
                                            on_move=on_move
                                            set_editing_target=set_editing_target
                                        />
                                    }
                                }).collect_view()}
                                <NewListForm board_id=board_id position=new_list_position />
                            </div>
                        </main>
                    }.into_any()
                }
            }}

            // Side panel, shown while editing
            {move || editing_target.get().map(|target| match target {
                EditTarget::Card(card_id) => view! {
                    <CardEditor card_id=card_id on_close=move |_| set_editing_target.set(None) />
                }.into_any(),
                EditTarget::Board(id) => view! {
                    <BoardEditor board_id=id on_close=move |_| set_editing_target.set(None) />
                }.into_any(),
            })}
        </div>
    }
}
