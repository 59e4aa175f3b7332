use dioxus::prelude::*;
use shared_types::User;

use crate::user_sync::SessionStore;

/// Reads the stored token sentinel; resolves to `null` when nothing is stored.
const READ_TOKEN_SENTINEL_JS: &str = "return window.localStorage.getItem('token');";

/// Global authentication state shared by every route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<User>>,
    /// Raw value of `localStorage["token"]`, `None` until read or when unset.
    pub token: Signal<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            token: Signal::new(None),
        }
    }
}

impl SessionStore for AuthState {
    fn current_user(&self) -> Option<User> {
        self.current_user.peek().clone()
    }

    fn set_user(&self, user: User) {
        let mut slot = self.current_user;
        slot.set(Some(user));
    }

    fn token_sentinel(&self) -> Option<String> {
        self.token.peek().clone()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Load the token sentinel from browser storage once on mount.
///
/// Hosts without `localStorage` (server rendering, native shells) leave the
/// sentinel unset.
pub fn use_token_sentinel_loader(auth: AuthState) {
    use_effect(move || {
        let mut token = auth.token;
        spawn(async move {
            match document::eval(READ_TOKEN_SENTINEL_JS).await {
                Ok(value) => token.set(value.as_str().map(str::to_string)),
                Err(e) => tracing::debug!(error = ?e, "Token sentinel unavailable"),
            }
        });
    });
}
