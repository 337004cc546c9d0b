//! Todo Actions
//!
//! Every user event is one of these. Views send actions instead of calling
//! the transition methods directly.

use crate::error::TodoResult;
use crate::item::TodoId;
use crate::state::TodoState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Input changed
    SetDraft(String),
    Add(String),
    Delete(TodoId),
    BeginEdit(TodoId),
    CommitEdit(String),
    CancelEdit,
    /// Primary button or Enter
    Submit,
}

impl TodoState {
    /// Apply one action in place
    pub fn reduce(&mut self, action: TodoAction) -> TodoResult<()> {
        match action {
            TodoAction::SetDraft(text) => self.set_draft(text),
            TodoAction::Add(text) => {
                self.add(&text)?;
            }
            TodoAction::Delete(id) => {
                self.delete(id);
            }
            TodoAction::BeginEdit(id) => self.begin_edit(id)?,
            TodoAction::CommitEdit(text) => {
                self.commit_edit(&text)?;
            }
            TodoAction::CancelEdit => self.cancel_edit(),
            TodoAction::Submit => {
                self.submit()?;
            }
        }
        Ok(())
    }

    /// Take-and-return form of [`TodoState::reduce`]. A rejected action
    /// yields the state unchanged.
    #[must_use]
    pub fn reduced(mut self, action: TodoAction) -> Self {
        if let Err(err) = self.reduce(action) {
            tracing::trace!(%err, "action absorbed");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::state::EditMode;

    #[test]
    fn test_reduce_dispatches() {
        let mut state = TodoState::new();
        state.reduce(TodoAction::SetDraft("Buy milk".into())).unwrap();
        state.reduce(TodoAction::Submit).unwrap();
        let id = state.items()[0].id;

        state.reduce(TodoAction::BeginEdit(id)).unwrap();
        assert_eq!(state.mode(), EditMode::Editing(id));
        state.reduce(TodoAction::CommitEdit("Buy bread".into())).unwrap();
        assert_eq!(state.items()[0].text, "Buy bread");

        state.reduce(TodoAction::Delete(id)).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_reduce_reports_rejection() {
        let mut state = TodoState::new();
        assert_eq!(state.reduce(TodoAction::Add("  ".into())), Err(TodoError::EmptyText));
        assert_eq!(state.reduce(TodoAction::CommitEdit("x".into())), Err(TodoError::NotEditing));
        assert_eq!(state.reduce(TodoAction::Delete(TodoId::from_raw(5))), Ok(()));
    }

    #[test]
    fn test_reduced_chains() {
        let state = TodoState::new()
            .reduced(TodoAction::Add("a".into()))
            .reduced(TodoAction::Add("".into()))
            .reduced(TodoAction::Add("b".into()));
        assert_eq!(state.len(), 2);
    }
}
