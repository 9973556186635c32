//! # spice-core - Core Domain Types
//!
//! Foundation crate for the SPICE terminal client. Provides the domain
//! types (profiles, chat messages), the seed data that stands in for a
//! backend, error handling, and logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Profile`] - A dating profile (single or couple) from the seed list
//! - [`ProfileKind`] - Single vs. couple profile variant
//! - [`ChatMessage`] - One message in a conversation
//! - [`MessageKind`] - Message payload type (text only in this build)
//!
//! ### Seed Data (`seed`)
//! - [`seed_profiles()`] - The static discovery deck
//! - [`seed_conversation()`] - The static message history
//! - [`profile_by_id()`] - Guarded lookup into a profile list
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum with `fatal` vs `recoverable`
//!   classification
//! - [`AuthError`], [`SendError`], [`MatchError`] - Per-operation rejection
//!   reasons for login/signup, message send, and profile matching
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use spice_core::prelude::*;
//! ```

pub mod chat;
pub mod error;
pub mod logging;
pub mod profile;
pub mod seed;

/// Prelude for common imports used throughout all SPICE crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use chat::{ChatMessage, MessageKind};
pub use error::{AuthError, Error, MatchError, Result, ResultExt, SendError};
pub use profile::{Profile, ProfileKind};
pub use seed::{
    profile_by_id, seed_conversation, seed_profiles, CURRENT_USER_ID, CURRENT_USER_NAME,
};
