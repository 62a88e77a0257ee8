//! New Board Form Component
//!
//! Panel for creating a board. Closes and reloads the dashboard on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn NewBoardForm(
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_board = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked().trim().to_string();
        if name.is_empty() { return; }
        let description = description.get_untracked().trim().to_string();

        spawn_local(async move {
            match ctx.api().create_board(&name, &description).await {
                Ok(board) => {
                    log::info!("created board {}", board.id);
                    set_name.set(String::new());
                    set_description.set(String::new());
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => ctx.report_error("Create board", &e),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2>"Create New Board"</h2>

                <form class="new-board-form" on:submit=create_board>
                    <div class="form-group">
                        <label for="board-name">"Board Name"</label>
                        <input
                            type="text"
                            id="board-name"
                            name="name"
                            required
                            placeholder="e.g., Website Redesign"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="board-description">"Description (Optional)"</label>
                        <textarea
                            id="board-description"
                            name="description"
                            rows="3"
                            placeholder="What's this board for?"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                        <button type="submit" class="btn">"Create Board"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
