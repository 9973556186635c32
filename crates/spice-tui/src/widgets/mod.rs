//! Screen and overlay widgets.
//!
//! Every widget borrows state from spice-app and renders it; none of
//! them hold state of their own.

pub mod bottom_nav;
pub mod chat_view;
pub mod hero;
pub mod login_form;
pub mod match_modal;
pub mod modal_overlay;
pub mod placeholder;
pub mod premium_modal;
pub mod signup_form;
pub mod swipe_card;
