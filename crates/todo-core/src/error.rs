//! Transition Errors
//!
//! A rejected transition never mutates state. Views surface these as inline
//! hints next to the input rather than as faults.

use thiserror::Error;

use crate::item::TodoId;

/// Result type for todo transitions
pub type TodoResult<T> = Result<T, TodoError>;

/// Why a transition was absorbed as a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Text was empty after trimming
    #[error("Please enter some text first")]
    EmptyText,
    /// No item with this id is in the list
    #[error("Todo #{0} no longer exists")]
    UnknownItem(TodoId),
    /// Commit requested while composing a new item
    #[error("No todo is being edited")]
    NotEditing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(TodoError::EmptyText.to_string(), "Please enter some text first");
        assert_eq!(TodoError::UnknownItem(TodoId::from_raw(7)).to_string(), "Todo #7 no longer exists");
    }
}
