//! Application Context
//!
//! Session state provided via Leptos Context API.

use leptos::prelude::*;

use crate::session;

/// Reactive view of the session token, provided at the app root
///
/// Seeded from local storage at startup. Login and logout keep the
/// persisted token and the signal in sync; route guards and the navbar
/// react to the signal.
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
}

impl SessionContext {
    /// Initialize from the persisted token
    pub fn load() -> Self {
        Self {
            token: RwSignal::new(session::get_token()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Store a freshly issued token and publish it to the app
    pub fn login(&self, token: String) {
        session::set_token(&token);
        self.token.set(Some(token));
    }

    /// Drop the session, both persisted and in-memory
    ///
    /// Used for explicit logout and for detected 401s (session expiry).
    pub fn logout(&self) {
        session::clear_token();
        self.token.set(None);
    }
}

/// Get the session context from context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
