//! Handler module - TEA update function
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `rows`: Per-row edits and title annotation

pub(crate) mod rows;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
