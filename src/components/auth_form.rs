//! Auth Form Components
//!
//! Sign-in and sign-up forms. Required fields use native form validation;
//! failures show inline inside the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, View};

/// Minimum password length accepted at sign-up
const MIN_PASSWORD_LEN: &str = "6";

/// Sign-in form
#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            match ctx.api().login(&email, &password).await {
                Ok(user) => ctx.begin_session(user),
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error.set(Some(if e.is_unauthorized() {
                        "Invalid credentials".to_string()
                    } else {
                        e.user_message()
                    }));
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="container">
            <div class="card auth-card">
                <h1 class="auth-title">"Welcome Back"</h1>

                {move || error.get().map(|msg| view! { <div class="error">{msg}</div> })}

                <form class="auth-form" on:submit=submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn btn-block" disabled=move || pending.get()>"Sign In"</button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(View::Register);
                    }>"Sign up here"</a>
                </p>
            </div>
        </div>
    }
}

/// Sign-up form
#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            match ctx.api().register(&name, &email, &password).await {
                Ok(user) => ctx.begin_session(user),
                Err(e) => {
                    log::warn!("registration failed: {}", e);
                    set_error.set(Some(format!("Registration failed: {}", e.user_message())));
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="container">
            <div class="card auth-card">
                <h1 class="auth-title">"Create Account"</h1>

                {move || error.get().map(|msg| view! { <div class="error">{msg}</div> })}

                <form class="auth-form" on:submit=submit>
                    <div class="form-group">
                        <label for="name">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            required
                            minlength=MIN_PASSWORD_LEN
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn btn-block" disabled=move || pending.get()>"Create Account"</button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(View::Login);
                    }>"Sign in here"</a>
                </p>
            </div>
        </div>
    }
}
