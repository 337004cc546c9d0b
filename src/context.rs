//! Application Context
//!
//! Read-only configuration provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::TodoConfig;

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<TodoConfig>,
}

impl AppContext {
    pub fn new(config: TodoConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Page heading
    pub fn title(&self) -> String {
        self.config.with_value(|c| c.title.clone())
    }

    pub fn placeholder(&self) -> String {
        self.config.with_value(|c| c.placeholder.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
