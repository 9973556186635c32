//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{auth, discover, keys::handle_key, overlay, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quitting = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Top-Level Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowLogin => auth::handle_show_login(state),
        Message::ShowSignup => auth::handle_show_signup(state),
        Message::ShowLanding => auth::handle_show_landing(state),
        Message::HeroToggleFocus => auth::handle_hero_toggle_focus(state),

        // ─────────────────────────────────────────────────────────
        // Sign-In Form
        // ─────────────────────────────────────────────────────────
        Message::LoginChar(c) => auth::handle_login_char(state, c),
        Message::LoginBackspace => auth::handle_login_backspace(state),
        Message::LoginFocusNext => auth::handle_login_focus_next(state),
        Message::LoginFocusPrev => auth::handle_login_focus_prev(state),
        Message::LoginToggleShowPassword => auth::handle_login_toggle_show_password(state),
        Message::LoginToggleRemember => auth::handle_login_toggle_remember(state),
        Message::SubmitLogin => auth::handle_submit_login(state),
        Message::LoginDelayElapsed { seq } => auth::handle_login_delay_elapsed(state, seq),
        Message::ForgotPassword => auth::handle_forgot_password(state),

        // ─────────────────────────────────────────────────────────
        // Registration Form
        // ─────────────────────────────────────────────────────────
        Message::SignupChar(c) => auth::handle_signup_char(state, c),
        Message::SignupBackspace => auth::handle_signup_backspace(state),
        Message::SignupFocusNext => auth::handle_signup_focus_next(state),
        Message::SignupFocusPrev => auth::handle_signup_focus_prev(state),
        Message::SubmitSignup => auth::handle_submit_signup(state),

        // ─────────────────────────────────────────────────────────
        // Discovery Deck
        // ─────────────────────────────────────────────────────────
        Message::SwipeRight => discover::handle_swipe_right(state),
        Message::SwipeLeft => discover::handle_swipe_left(state),
        Message::MatchProfile { profile_id } => discover::handle_match_profile(state, profile_id),

        // ─────────────────────────────────────────────────────────
        // Tabs & Overlays
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => overlay::handle_select_tab(state, tab),
        Message::StartChat { profile_id } => discover::handle_start_chat(state, profile_id),
        Message::CloseMatchModal => overlay::handle_close_match_modal(state),
        Message::ClosePremiumModal => overlay::handle_close_premium_modal(state),
        Message::CloseChat => overlay::handle_close_chat(state),

        // ─────────────────────────────────────────────────────────
        // Chat
        // ─────────────────────────────────────────────────────────
        Message::ChatChar(c) => overlay::handle_chat_char(state, c),
        Message::ChatBackspace => overlay::handle_chat_backspace(state),
        Message::SendChatMessage => overlay::handle_send_chat_message(state),

        // ─────────────────────────────────────────────────────────
        // Premium Modal
        // ─────────────────────────────────────────────────────────
        Message::PremiumPrevPlan => overlay::handle_premium_prev_plan(state),
        Message::PremiumNextPlan => overlay::handle_premium_next_plan(state),
        Message::SubscribePremium { plan } => overlay::handle_subscribe_premium(state, plan),
    }
}
