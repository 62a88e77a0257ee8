//! Delete Confirm Button Component
//!
//! Two-step delete for lists, cards and boards.

use leptos::prelude::*;

/// Renders `label` until clicked, then `prompt` with ✓ / ✗.
/// Clicks never reach the enclosing card or column.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] prompt: Option<String>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let label = label.unwrap_or_else(|| "×".to_string());
    let prompt = prompt.unwrap_or_else(|| "Delete?".to_string());

    let answer = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        set_asking.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button type="button" class="confirm-btn" on:click=move |ev| answer(ev, true)>"✓"</button>
                    <button type="button" class="cancel-btn" on:click=move |ev| answer(ev, false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    type="button"
                    class=button_class.clone()
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    {label.clone()}
                </button>
            }
            .into_any()
        }
    }
}
