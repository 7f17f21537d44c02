//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::models::{Toast, ToastKind};

/// How long a toast stays on screen
const TOAST_DURATION_MS: u32 = 3_000;

static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(1);

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently visible toasts, oldest first
    pub toasts: Vec<Toast>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a toast; it removes itself after the display duration
pub fn push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    store.toasts().write().push(Toast {
        id,
        message: message.into(),
        kind,
    });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        store.toasts().write().retain(|toast| toast.id != id);
    });
}

/// Remove a toast before its timer fires
pub fn dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
