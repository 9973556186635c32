//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the active view/overlay
//! - `auth`: Landing, sign-in and registration handlers
//! - `discover`: Swipe deck and match handlers
//! - `overlay`: Tab, modal and chat handlers

pub(crate) mod auth;
pub(crate) mod discover;
pub(crate) mod keys;
pub(crate) mod overlay;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the run loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// Background tasks to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Simulated login delay. Delivers `LoginDelayElapsed { seq }` after
    /// `delay_ms`; the reducer discards it unless `seq` is still the
    /// current attempt and the sign-in view is still up.
    LoginTimer {
        seq: u64,
        email: String,
        delay_ms: u64,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the run loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
