//! New List Form Component
//!
//! Trailing column on the board for adding a list at the right edge.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn NewListForm(board_id: u32, position: i32) -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());

    let create_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked().trim().to_string();
        if name.is_empty() { return; }

        spawn_local(async move {
            match ctx.api().create_list(board_id, &name, position).await {
                Ok(list) => {
                    log::info!("created list {} on board {}", list.id, board_id);
                    ctx.reload();
                }
                Err(e) => ctx.report_error("Add list", &e),
            }
        });
    };

    view! {
        <div class="list-column new-list-column">
            <form class="new-list-form" on:submit=create_list>
                <input
                    type="text"
                    placeholder="Add list..."
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-small">"+"</button>
            </form>
        </div>
    }
}
