//! Shared application state for the list server.

use std::sync::Arc;

use shoplist::io::list_store::ListStore;

use crate::render::PageRenderer;

/// Shared state accessible from all request handlers.
///
/// Holds no list data: every request loads the list fresh from `store`.
#[derive(Clone)]
pub struct AppState {
    pub store: ListStore,
    pub renderer: Arc<PageRenderer>,
    /// Page title and heading.
    pub title: String,
}

impl AppState {
    pub fn new(store: ListStore, renderer: PageRenderer, title: impl Into<String>) -> Self {
        Self {
            store,
            renderer: Arc::new(renderer),
            title: title.into(),
        }
    }
}
