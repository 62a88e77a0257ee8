//! Board Editor Column
//!
//! Side panel for renaming, describing or deleting the open board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, View};
use crate::store::AppStateStoreFields;

#[component]
pub fn BoardEditor(
    board_id: u32,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let current = ctx.store.snapshot().get_untracked().map(|s| s.board);
    let (name, set_name) = signal(current.as_ref().map(|b| b.name.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        current.as_ref().map(|b| b.description_text().to_string()).unwrap_or_default(),
    );

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked().trim().to_string();
        if name.is_empty() { return; }
        let description = description.get_untracked().trim().to_string();

        spawn_local(async move {
            match ctx.api().update_board(board_id, &name, &description).await {
                Ok(_) => {
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => ctx.report_error("Save board", &e),
            }
        });
    };

    let delete_board = move |_| {
        spawn_local(async move {
            match ctx.api().delete_board(board_id).await {
                Ok(()) => {
                    log::info!("deleted board {}", board_id);
                    ctx.navigate(View::Dashboard);
                }
                Err(e) => ctx.report_error("Delete board", &e),
            }
        });
    };

    view! {
        <aside class="editor-column">
            <div class="editor-header">
                <h2>"Edit board"</h2>
                <button type="button" class="editor-close" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            <form class="editor-form" on:submit=save>
                <div class="form-group">
                    <label for="edit-board-name">"Name"</label>
                    <input
                        type="text"
                        id="edit-board-name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="edit-board-description">"Description"</label>
                    <textarea
                        id="edit-board-description"
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-actions">
                    <DeleteConfirmButton button_class="btn btn-danger" label="Delete board" prompt="Delete board and its lists?" on_confirm=delete_board />
                    <button type="submit" class="btn">"Save"</button>
                </div>
            </form>
        </aside>
    }
}
