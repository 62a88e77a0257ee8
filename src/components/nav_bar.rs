//! Navigation Bar Component
//!
//! Brand, greeting and session controls. Switches between sign-in and
//! sign-up when logged out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::LogPanel;
use crate::context::{use_app_context, View};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let (show_log, set_show_log) = signal(false);

    // Tear down locally even if the server call fails
    let logout = move |_| {
        spawn_local(async move {
            if let Err(e) = ctx.api().logout().await {
                log::warn!("logout request failed: {}", e);
            }
            ctx.end_session();
        });
    };

    let home = move |_| {
        if ctx.user.get_untracked().is_some() {
            ctx.navigate(View::Dashboard);
        }
    };

    view! {
        <nav class="navbar">
            <div class="nav-brand" on:click=home>
                <span class="nav-title">"GoBoard"</span>
            </div>

            <div class="nav-links">
                <button type="button" class="btn btn-secondary" title="Recent log" on:click=move |_| set_show_log.set(true)>
                    "Log"
                </button>
                {move || match (ctx.user.get(), ctx.view.get()) {
                    (Some(user), _) => view! {
                        <span class="nav-greeting">"Welcome, " {user.name}</span>
                        <button type="button" class="btn btn-secondary" on:click=logout>"Logout"</button>
                    }.into_any(),
                    (None, View::Register) => view! {
                        <button type="button" class="btn btn-secondary" on:click=move |_| ctx.navigate(View::Login)>
                            "Sign In"
                        </button>
                    }.into_any(),
                    (None, View::Loading) => view! { <span></span> }.into_any(),
                    (None, _) => view! {
                        <button type="button" class="btn" on:click=move |_| ctx.navigate(View::Register)>
                            "Sign Up"
                        </button>
                    }.into_any(),
                }}
            </div>
        </nav>
        <Show when=move || show_log.get()>
            <LogPanel on_close=move |_| set_show_log.set(false) />
        </Show>
    }
}
