//! New Card Form Component
//!
//! Collapsed "+ Add card" button that expands into a form at the bottom of
//! a list. New cards are appended (position = current card count).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn NewCardForm(list_id: u32, position: i32) -> impl IntoView {
    let ctx = use_app_context();

    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_card = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked().trim().to_string();
        if title.is_empty() { return; }
        let description = description.get_untracked().trim().to_string();

        spawn_local(async move {
            match ctx.api().create_card(list_id, &title, &description, position).await {
                Ok(card) => {
                    log::info!("created card {} in list {}", card.id, list_id);
                    ctx.reload();
                }
                Err(e) => ctx.report_error("Add card", &e),
            }
        });
    };

    view! {
        {move || if open.get() {
            view! {
                <form class="new-card-form" on:submit=create_card>
                    <input
                        type="text"
                        placeholder="Card title"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        rows="2"
                        placeholder="Description (optional)"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-small">"Add"</button>
                        <button type="button" class="btn btn-small btn-secondary" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            }.into_any()
        } else {
            view! {
                <button type="button" class="add-card-btn" on:click=move |_| set_open.set(true)>"+ Add card"</button>
            }.into_any()
        }}
    }
}
