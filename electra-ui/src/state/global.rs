//! Global Application State
//!
//! Reactive session and toast state shared by every page.

use electra::api::ApiClient;
use electra::session::{clear_session, Session, SessionContext};
use electra::ViewError;
use leptos::*;

use super::storage::LocalStore;
use crate::api::{api_client, GlooTransport};

/// Global application state provided to all components. Only signals, so
/// closures can copy it freely.
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// What the router guard sees
    pub session: RwSignal<Session>,
    /// Token and profile of the signed-in user
    pub context: RwSignal<Option<SessionContext>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree, restoring any saved session
pub fn provide_global_state() {
    let context = SessionContext::load(&LocalStore::new());
    let session = context
        .as_ref()
        .map(SessionContext::session)
        .unwrap_or_default();

    let state = GlobalState {
        session: create_rw_signal(session),
        context: create_rw_signal(context),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// API client carrying the current token
    pub fn api(&self) -> ApiClient<GlooTransport> {
        api_client(self.context.get_untracked().as_ref())
    }

    /// Adopt a freshly saved session
    pub fn signed_in(&self, ctx: SessionContext) {
        self.session.set(ctx.session());
        self.context.set(Some(ctx));
    }

    /// Forget the session in storage and in memory
    pub fn sign_out(&self) {
        if let Err(e) = clear_session(&mut LocalStore::new()) {
            web_sys::console::error_1(&format!("Failed to clear session: {}", e).into());
        }
        self.context.set(None);
        self.session.set(Session::anonymous());
    }

    /// Show a view failure; a refused token also ends the session
    pub fn report(&self, err: &ViewError) {
        self.show_error(&err.to_string());
        if err.is_unauthorized() {
            self.sign_out();
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
