//! Error Banner Component
//!
//! Inline message for failed actions. Auto-dismisses after the configured
//! delay; the view underneath keeps its last good state.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        let Some(notice) = ctx.error.get() else {
            return;
        };
        let delay = ctx.error_display_ms();
        if delay == 0 {
            return;
        }
        let seq = notice.seq;
        Timeout::new(delay, move || ctx.dismiss_error_if(seq)).forget();
    });

    view! {
        {move || ctx.error.get().map(|notice| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{notice.message}</span>
                <button type="button" class="error-close" on:click=move |_| ctx.dismiss_error()>"×"</button>
            </div>
        })}
    }
}
