//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use persisted_cell::BrowserStorage;

use crate::notify::Notifier;
use crate::todos::TodoList;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The todo list, mirrored into localStorage
    pub todos: RwSignal<TodoList<BrowserStorage>>,
    /// Transient banners
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(todos: TodoList<BrowserStorage>) -> Self {
        Self {
            todos: RwSignal::new(todos),
            notifier: Notifier::new(),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
