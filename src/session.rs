//! Admin Session Context
//!
//! Shared auth and edit-mode state provided via Leptos Context API.
//! Pages read the signals; mutation goes through the action methods only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

/// App-wide session state. Invariant: `edit_mode` is only true while
/// `authenticated` is true.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Whether the admin session is valid - read
    pub authenticated: ReadSignal<bool>,
    set_authenticated: WriteSignal<bool>,
    /// Whether inline editors are active - read
    pub edit_mode: ReadSignal<bool>,
    set_edit_mode: WriteSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (authenticated, set_authenticated) = signal(false);
        let (edit_mode, set_edit_mode) = signal(false);
        Self {
            authenticated,
            set_authenticated,
            edit_mode,
            set_edit_mode,
        }
    }

    /// Verify the stored session against the backend, once per app load.
    /// Any failure (network, 401) degrades to an unauthenticated session.
    pub fn check_status(&self) {
        let this = *self;
        spawn_local(async move {
            let ok = api::verify().await;
            this.set_authenticated.try_set(ok);
            if !ok {
                this.set_edit_mode.try_set(false);
            }
        });
    }

    /// Try to open an admin session. Returns false for a wrong password
    /// and for a network failure alike.
    pub async fn login(self, password: String) -> bool {
        if api::login(&password).await {
            self.set_authenticated.set(true);
            true
        } else {
            false
        }
    }

    /// Close the session locally and tell the backend on a best-effort basis
    pub fn logout(&self) {
        spawn_local(async move {
            api::logout().await;
        });
        self.set_edit_mode.set(false);
        self.set_authenticated.set(false);
    }

    /// Flip edit mode. No-op while unauthenticated.
    pub fn toggle_edit_mode(&self) {
        if !self.authenticated.get_untracked() {
            return;
        }
        self.set_edit_mode.update(|on| *on = !*on);
    }
}

/// Get the session context from Leptos context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_noop_while_unauthenticated() {
        let owner = Owner::new();
        owner.set();
        let session = SessionContext::new();
        session.toggle_edit_mode();
        assert!(!session.edit_mode.get_untracked());
    }

    #[test]
    fn test_toggle_flips_once_authenticated() {
        let owner = Owner::new();
        owner.set();
        let session = SessionContext::new();
        session.set_authenticated.set(true);
        session.toggle_edit_mode();
        assert!(session.edit_mode.get_untracked());
        session.toggle_edit_mode();
        assert!(!session.edit_mode.get_untracked());
    }
}
