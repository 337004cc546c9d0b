//! Todo Configuration
//!
//! Presentation strings and the rule for committing blank edits.

/// How `commit_edit` treats text that is empty after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Overwrite the item with the empty string, as adding never would
    #[default]
    KeepEmpty,
    /// Refuse the commit and stay in editing mode
    RejectEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Heading shown above the input
    pub title: String,
    /// Input placeholder
    pub placeholder: String,
    pub update_policy: UpdatePolicy,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            placeholder: "Enter your work".to_string(),
            update_policy: UpdatePolicy::default(),
        }
    }
}
