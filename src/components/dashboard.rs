//! Dashboard Component
//!
//! Grid of the user's boards with an empty state and the create-board panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::NewBoardForm;
use crate::context::{use_app_context, View};
use crate::models::Board;
use crate::store::{store_set_boards, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (creating, set_creating) = signal(false);
    let (loaded, set_loaded) = signal(false);

    // Load boards on mount and after every mutation
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match ctx.api().list_boards().await {
                Ok(boards) => {
                    log::debug!("loaded {} boards", boards.len());
                    store_set_boards(&store, boards);
                    set_loaded.set(true);
                }
                Err(e) => ctx.report_error("Load boards", &e),
            }
        });
    });

    let open_create = move |_| set_creating.set(true);

    view! {
        <div class="container">
            <div class="dashboard-header">
                <h1>"Your Boards"</h1>
                <button type="button" class="btn" on:click=open_create>"+ New Board"</button>
            </div>

            <div class="boards-grid">
                {move || {
                    let boards = store.boards().get();
                    if boards.is_empty() && loaded.get() {
                        view! {
                            <div class="card empty-state">
                                <h3>"No boards yet"</h3>
                                <p>"Create your first board to get started!"</p>
                                <button type="button" class="btn" on:click=open_create>"Create Your First Board"</button>
                            </div>
                        }.into_any()
                    } else {
                        boards.into_iter()
                            .map(|board| view! { <BoardTile board=board /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || creating.get()>
                <NewBoardForm on_close=move |_| set_creating.set(false) />
            </Show>
        </div>
    }
}

/// One board in the grid
#[component]
fn BoardTile(board: Board) -> impl IntoView {
    let ctx = use_app_context();
    let id = board.id;
    let created = board
        .created_on()
        .map(|d| format!("Created {}", d.format("%b %-d, %Y")))
        .unwrap_or_default();
    let description = board.description_text().to_string();

    view! {
        <div class="card board-card" on:click=move |_| ctx.navigate(View::Board(id))>
            <h3 class="board-card-title">{board.name}</h3>
            <p class="board-card-description">{description}</p>
            <small class="board-card-date">{created}</small>
        </div>
    }
}
