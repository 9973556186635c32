//! Per-screen form state.
//!
//! Forms own their field buffers and focus; validation happens here, at
//! the form layer, before anything reaches the reducer's navigation
//! logic.

pub mod login;
pub mod signup;

pub use login::{LoginField, LoginForm};
pub use signup::{SignupData, SignupField, SignupForm};
