//! Application Context
//!
//! All app-wide state, created once at mount and provided via the Leptos
//! Context API. A session starts on login/register (or a valid cookie at
//! startup) and ends on logout, clearing everything fetched under it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::models::User;
use crate::store::{store_clear, AppState, AppStore};

/// Which screen is shown in the main content area
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Waiting for the startup session check
    Loading,
    Login,
    Register,
    Dashboard,
    Board(u32),
}

/// Error shown in the banner. `seq` increases monotonically so a timer
/// only dismisses the error it was started for.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub seq: u64,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
    error_seq: StoredValue<u64>,
    pub store: AppStore,
    /// Logged-in user - read
    pub user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
    /// Current screen - read
    pub view: ReadSignal<View>,
    set_view: WriteSignal<View>,
    /// Trigger to re-fetch the current screen - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Banner error - read
    pub error: ReadSignal<Option<ErrorNotice>>,
    set_error: WriteSignal<Option<ErrorNotice>>,
}

impl AppContext {
    pub fn new(api: ApiClient, config: AppConfig) -> Self {
        let (user, set_user) = signal(None::<User>);
        let (view, set_view) = signal(View::Loading);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (error, set_error) = signal(None::<ErrorNotice>);
        Self {
            api: StoredValue::new(api),
            config: StoredValue::new(config),
            error_seq: StoredValue::new(0),
            store: Store::new(AppState::default()),
            user,
            set_user,
            view,
            set_view,
            reload_trigger,
            set_reload_trigger,
            error,
            set_error,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn error_display_ms(&self) -> u32 {
        self.config.with_value(|c| c.error_display_ms)
    }

    /// Trigger a re-fetch of whatever is on screen
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, view: View) {
        log::debug!("navigate: {:?}", view);
        self.dismiss_error();
        self.set_view.set(view);
    }

    pub fn begin_session(&self, user: User) {
        log::info!("session started for {}", user.email);
        self.set_user.set(Some(user));
        self.navigate(View::Dashboard);
    }

    pub fn end_session(&self) {
        log::info!("session ended");
        self.set_user.set(None);
        store_clear(&self.store);
        self.navigate(View::Login);
    }

    /// Report a failed user action. The view keeps its last good state.
    /// A 401 while logged in means the session is gone.
    pub fn report_error(&self, action: &str, err: &ApiError) {
        log::error!("{} failed: {}", action, err);
        if err.is_unauthorized() && self.user.get_untracked().is_some() {
            self.end_session();
            self.show_error("Your session has expired. Please sign in again.".to_string());
            return;
        }
        self.show_error(format!("{}: {}", action, err.user_message()));
    }

    pub fn show_error(&self, message: String) {
        self.error_seq.update_value(|s| *s += 1);
        let seq = self.error_seq.get_value();
        self.set_error.set(Some(ErrorNotice { seq, message }));
    }

    pub fn dismiss_error(&self) {
        self.set_error.set(None);
    }

    /// Dismiss only if the banner still shows error `seq`
    pub fn dismiss_error_if(&self, seq: u64) {
        if self.error.get_untracked().is_some_and(|e| e.seq == seq) {
            self.set_error.set(None);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
