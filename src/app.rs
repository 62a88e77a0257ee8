//! GoBoard Frontend App
//!
//! Application shell: navbar, error banner and the current screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{BoardView, Dashboard, ErrorBanner, LoginForm, NavBar, RegisterForm};
use crate::config::AppConfig;
use crate::context::{AppContext, View};

#[component]
pub fn App(api: ApiClient, config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(api, config);

    // Provide context to all children
    provide_context(ctx);

    // Resume an existing session if the cookie is still valid
    spawn_local(async move {
        match ctx.api().me().await {
            Ok(user) => ctx.begin_session(user),
            Err(e) => {
                log::info!("no active session: {}", e);
                ctx.navigate(View::Login);
            }
        }
    });

    view! {
        <NavBar />
        <ErrorBanner />
        <div id="main-content">
            {move || match ctx.view.get() {
                View::Loading => view! { <div class="app-loading">"Loading..."</div> }.into_any(),
                View::Login => view! { <LoginForm /> }.into_any(),
                View::Register => view! { <RegisterForm /> }.into_any(),
                View::Dashboard => view! { <Dashboard /> }.into_any(),
                View::Board(board_id) => view! { <BoardView board_id=board_id /> }.into_any(),
            }}
        </div>
    }
}

/// Shown when the client cannot start at all
#[component]
pub fn StartupError(message: String) -> impl IntoView {
    view! {
        <div class="container">
            <div class="card error">{message}</div>
        </div>
    }
}
