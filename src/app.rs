//! Todo List App
//!
//! Root component: owns the store and lays out the card.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoConfig;

use crate::components::{TodoForm, TodoList};
use crate::context::AppContext;
use crate::store::{todo_count, AppState};

/// Footer text under the list
pub fn item_count_label(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = TodoConfig::default();
    let store = Store::new(AppState::new(&config));
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="bg-white p-6 rounded shadow-lg w-full max-w-md">
                <h1 class="text-2xl font-bold mb-4">{ctx.title()}</h1>

                <TodoForm />

                <TodoList />

                <p class="text-sm text-gray-500 mt-4">{move || item_count_label(todo_count(&store))}</p>
            </div>
        </div>
    }
}
