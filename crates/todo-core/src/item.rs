//! Todo Item Entity
//!
//! Ids come from a per-list monotonic counter, so two items added in the
//! same instant still get distinct ids.

use std::fmt;

/// Unique identifier of a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(u64);

impl TodoId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source. Ids are never handed out twice, even after deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next id
    pub fn next_id(&mut self) -> TodoId {
        let id = TodoId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// A single user-entered task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    /// Display text, stored trimmed
    pub text: String,
}

impl TodoItem {
    /// Create an item, trimming surrounding whitespace from `text`
    pub fn new(id: TodoId, text: &str) -> Self {
        Self {
            id,
            text: text.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut ids = IdSequence::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn test_item_trims_text() {
        let item = TodoItem::new(TodoId::from_raw(3), "  Buy milk \n");
        assert_eq!(item.text, "Buy milk");
        assert_eq!(item.id.to_string(), "3");
    }
}
