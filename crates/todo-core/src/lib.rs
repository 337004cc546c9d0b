//! Todo Core
//!
//! Framework-agnostic todo list state. The UI binds its reactivity around
//! [`TodoState`]; nothing in here knows about the browser.
//!
//! Layout:
//! - item: ids and the item entity
//! - state: the list plus the Composing/Editing mode and the input draft
//! - action: the single dispatch seam used by views
//! - config: presentation strings and the update policy
//! - error: rejected transitions

mod action;
mod config;
mod error;
mod item;
mod state;

pub use action::TodoAction;
pub use config::{TodoConfig, UpdatePolicy};
pub use error::{TodoError, TodoResult};
pub use item::{IdSequence, TodoId, TodoItem};
pub use state::{EditMode, TodoState};
