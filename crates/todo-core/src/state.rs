//! Todo List State
//!
//! Owns the ordered items, the input draft and the current mode.
//! All mutation goes through the transition methods below.

use crate::config::UpdatePolicy;
use crate::error::{TodoError, TodoResult};
use crate::item::{IdSequence, TodoId, TodoItem};

/// What the input draft currently feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Draft becomes a new item on submit
    #[default]
    Composing,
    /// Draft overwrites the text of this item on submit
    Editing(TodoId),
}

/// Todo list plus editing state, for the lifetime of the mounted view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoState {
    items: Vec<TodoItem>,
    mode: EditMode,
    draft: String,
    ids: IdSequence,
    policy: UpdatePolicy,
}

impl TodoState {
    /// Empty list in Composing mode
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UpdatePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    // ========================
    // Queries
    // ========================

    /// Items in insertion order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Current contents of the input field
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        match self.mode {
            EditMode::Editing(id) => Some(id),
            EditMode::Composing => None,
        }
    }

    // ========================
    // Transitions
    // ========================

    /// Replace the input draft verbatim (keystrokes)
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append a new item with the trimmed text and clear the draft.
    ///
    /// Blank text leaves the state untouched and returns `EmptyText`.
    pub fn add(&mut self, text: &str) -> TodoResult<TodoId> {
        if text.trim().is_empty() {
            tracing::trace!("ignoring blank todo");
            return Err(TodoError::EmptyText);
        }
        let id = self.ids.next_id();
        self.items.push(TodoItem::new(id, text));
        self.draft.clear();
        tracing::debug!(%id, len = self.items.len(), "todo added");
        Ok(id)
    }

    /// Remove the item with this id, if any. Mode is left as it is.
    pub fn delete(&mut self, id: TodoId) -> Option<TodoItem> {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            tracing::trace!(%id, "delete of unknown todo");
            return None;
        };
        let removed = self.items.remove(index);
        tracing::debug!(%id, len = self.items.len(), "todo removed");
        Some(removed)
    }

    /// Switch to editing `id`, loading its text into the draft.
    /// Retargets the edit when another item is already being edited.
    pub fn begin_edit(&mut self, id: TodoId) -> TodoResult<()> {
        let Some(text) = self.get(id).map(|item| item.text.clone()) else {
            tracing::trace!(%id, "edit of unknown todo");
            return Err(TodoError::UnknownItem(id));
        };
        self.draft = text;
        self.mode = EditMode::Editing(id);
        tracing::debug!(%id, "editing todo");
        Ok(())
    }

    /// Overwrite the edited item's text with trimmed `text` and go back to
    /// composing.
    ///
    /// Returns the id the edit targeted. If that item was removed while
    /// editing, the list is left alone and the edit still ends, so `Ok` does
    /// not mean the id is still in the list; check with [`TodoState::get`].
    pub fn commit_edit(&mut self, text: &str) -> TodoResult<TodoId> {
        let EditMode::Editing(id) = self.mode else {
            tracing::trace!("commit while composing");
            return Err(TodoError::NotEditing);
        };
        let text = text.trim();
        if text.is_empty() && self.policy == UpdatePolicy::RejectEmpty {
            tracing::trace!(%id, "ignoring blank update");
            return Err(TodoError::EmptyText);
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text.to_string();
                tracing::debug!(%id, "todo updated");
            }
            None => tracing::trace!(%id, "edited todo was removed, dropping edit"),
        }
        self.draft.clear();
        self.mode = EditMode::Composing;
        Ok(id)
    }

    /// Leave editing without touching the list
    pub fn cancel_edit(&mut self) {
        if let EditMode::Editing(id) = self.mode {
            tracing::debug!(%id, "edit cancelled");
            self.draft.clear();
            self.mode = EditMode::Composing;
        }
    }

    /// Primary button: feed the draft to `add` or `commit_edit` by mode
    pub fn submit(&mut self) -> TodoResult<TodoId> {
        let draft = std::mem::take(&mut self.draft);
        let result = match self.mode {
            EditMode::Composing => self.add(&draft),
            EditMode::Editing(_) => self.commit_edit(&draft),
        };
        if result.is_err() {
            self.draft = draft;
        }
        result
    }
}
