//! spice-app - Application state and orchestration for the SPICE client
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`] owned by the reducer, [`Message`]s as
//! the only way to mutate it, and [`UpdateAction`]s for the work the run
//! loop performs outside the reducer (the simulated login timer).

pub mod actions;
pub mod config;
pub mod forms;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod premium;
pub mod state;
pub mod swipe;

// Re-export primary types
pub use actions::handle_action;
pub use config::Settings;
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use premium::PremiumPlan;
pub use state::{AppState, ChatState, HeroButton, Tab, View};
