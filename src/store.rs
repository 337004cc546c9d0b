//! Application State Store
//!
//! Wraps the framework-agnostic `TodoState` in a Leptos reactive store.
//! Components read through the helpers below and mutate only via `dispatch`.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{TodoAction, TodoConfig, TodoId, TodoItem, TodoState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, draft and edit mode
    pub todos: TodoState,
    /// Inline hint from the last rejected action
    pub feedback: Option<String>,
}

impl AppState {
    pub fn new(config: &TodoConfig) -> Self {
        Self {
            todos: TodoState::with_policy(config.update_policy),
            feedback: None,
        }
    }
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

/// Apply a user action. A rejection leaves the todos as they were and
/// shows its message; any accepted action clears the message.
pub fn dispatch(store: &AppStore, action: TodoAction) {
    let outcome = store.todos().write().reduce(action);
    if let Err(err) = &outcome {
        tracing::debug!(%err, "action rejected");
    }
    store.feedback().set(outcome.err().map(|err| err.to_string()));
}

pub fn todo_items(store: &AppStore) -> Vec<TodoItem> {
    store.todos().read().items().to_vec()
}

pub fn todo_count(store: &AppStore) -> usize {
    store.todos().read().len()
}

/// Current input text
pub fn draft(store: &AppStore) -> String {
    store.todos().read().draft().to_string()
}

pub fn editing_id(store: &AppStore) -> Option<TodoId> {
    store.todos().read().editing_id()
}

pub fn feedback(store: &AppStore) -> Option<String> {
    store.feedback().get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::UpdatePolicy;

    fn with_store(state: AppState, test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(state)));
    }

    #[test]
    fn test_blank_submit_shows_feedback() {
        with_store(AppState::default(), |store| {
            dispatch(&store, TodoAction::Submit);
            assert_eq!(feedback(&store).as_deref(), Some("Please enter some text first"));
            assert_eq!(todo_count(&store), 0);
        });
    }

    #[test]
    fn test_typing_clears_feedback() {
        with_store(AppState::default(), |store| {
            dispatch(&store, TodoAction::Submit);
            dispatch(&store, TodoAction::SetDraft("x".to_string()));
            assert_eq!(feedback(&store), None);
            assert_eq!(draft(&store), "x");
        });
    }

    #[test]
    fn test_submit_appends_and_clears_draft() {
        with_store(AppState::default(), |store| {
            dispatch(&store, TodoAction::SetDraft("  Buy milk ".to_string()));
            dispatch(&store, TodoAction::Submit);
            let items = todo_items(&store);
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].text, "Buy milk");
            assert_eq!(draft(&store), "");
            assert_eq!(feedback(&store), None);
        });
    }

    #[test]
    fn test_edit_round_trip_through_dispatch() {
        let config = TodoConfig {
            update_policy: UpdatePolicy::RejectEmpty,
            ..TodoConfig::default()
        };
        with_store(AppState::new(&config), |store| {
            dispatch(&store, TodoAction::Add("Walk dog".to_string()));
            let id = todo_items(&store)[0].id;

            dispatch(&store, TodoAction::BeginEdit(id));
            assert_eq!(editing_id(&store), Some(id));
            assert_eq!(draft(&store), "Walk dog");

            dispatch(&store, TodoAction::CommitEdit(" ".to_string()));
            assert_eq!(editing_id(&store), Some(id));
            assert!(feedback(&store).is_some());

            dispatch(&store, TodoAction::CommitEdit("Walk cat".to_string()));
            assert_eq!(editing_id(&store), None);
            assert_eq!(todo_items(&store)[0].text, "Walk cat");
            assert_eq!(feedback(&store), None);
        });
    }
}
