//! UI Components
//!
//! Reusable Leptos components.

mod editable_image;
mod editable_list;
mod editable_text;
mod login_modal;
mod nav_bar;
mod toast_host;

pub use editable_image::EditableImage;
pub use editable_list::EditableList;
pub use editable_text::EditableText;
pub use login_modal::LoginModal;
pub use nav_bar::NavBar;
pub use toast_host::ToastHost;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type SaveFuture = Pin<Box<dyn Future<Output = bool>>>;

/// Async save seam between an editable binding and its page container.
/// The container merges the value into its record and persists it; the
/// binding only learns whether that succeeded and leaves the editor open
/// on failure so the user can retry or cancel.
#[derive(Clone)]
pub struct SaveCallback<T: 'static>(Arc<dyn Fn(T) -> SaveFuture + Send + Sync>);

impl<T> SaveCallback<T> {
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        Self(Arc::new(move |value| -> SaveFuture { Box::pin(handler(value)) }))
    }

    pub async fn run(&self, value: T) -> bool {
        (self.0)(value).await
    }
}
