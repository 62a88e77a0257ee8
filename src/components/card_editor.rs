//! Card Editor Column
//!
//! Side panel for editing a card's title and description, or deleting it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn CardEditor(
    card_id: u32,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (loaded, set_loaded) = signal(false);

    // Fetch a fresh copy; the board may be stale
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().get_card(card_id).await {
                Ok(card) => {
                    set_title.set(card.title.clone());
                    set_description.set(card.description_text().to_string());
                    set_loaded.set(true);
                }
                Err(e) => {
                    ctx.report_error("Load card", &e);
                    on_close.run(());
                }
            }
        });
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked().trim().to_string();
        if title.is_empty() { return; }
        let description = description.get_untracked().trim().to_string();

        spawn_local(async move {
            match ctx.api().update_card(card_id, &title, &description).await {
                Ok(_) => {
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => ctx.report_error("Save card", &e),
            }
        });
    };

    let delete_card = move |_| {
        spawn_local(async move {
            match ctx.api().delete_card(card_id).await {
                Ok(()) => {
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => ctx.report_error("Delete card", &e),
            }
        });
    };

    view! {
        <aside class="editor-column">
            <div class="editor-header">
                <h2>"Edit card"</h2>
                <button type="button" class="editor-close" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            <Show when=move || loaded.get() fallback=|| view! { <p class="editor-loading">"Loading..."</p> }>
                <form class="editor-form" on:submit=save>
                    <div class="form-group">
                        <label for="card-title">"Title"</label>
                        <input
                            type="text"
                            id="card-title"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="card-description">"Description"</label>
                        <textarea
                            id="card-description"
                            rows="6"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        <DeleteConfirmButton button_class="btn btn-danger" label="Delete card" prompt="Delete this card?" on_confirm=delete_card />
                        <button type="submit" class="btn">"Save"</button>
                    </div>
                </form>
            </Show>
        </aside>
    }
}
