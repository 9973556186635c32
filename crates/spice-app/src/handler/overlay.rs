//! Tab, modal and chat overlay handlers.
//!
//! Tab activation is the one place navigation and overlay-triggering
//! meet: content tabs navigate, Messages and Premium act. Closing an
//! overlay only ever clears that overlay.

use spice_core::prelude::*;
use spice_core::SendError;

use crate::premium::PremiumPlan;
use crate::state::{AppState, ChatState, Tab};

use super::UpdateResult;

/// Activate a bottom-bar tab.
///
/// Content tabs (Discover/Matches/Profile) become the active tab.
/// Premium opens the upsell modal and Messages opens the chat overlay
/// on the first seed profile; neither touches the active tab, so
/// dismissing the overlay lands back on the content the user was on.
pub fn handle_select_tab(state: &mut AppState, tab: Tab) -> UpdateResult {
    match tab {
        Tab::Premium => {
            state.premium_cursor = 0;
            state.premium_modal = true;
        }
        Tab::Messages => {
            if state.conversation.is_empty() {
                debug!("messages tab with no conversation, nothing to open");
                return UpdateResult::none();
            }
            match state.first_profile_id() {
                Some(id) => {
                    let id = id.to_string();
                    state.chat = Some(ChatState::new(id));
                }
                None => warn!("messages tab with no profiles, nothing to open"),
            }
        }
        _ => state.tab = tab,
    }
    UpdateResult::none()
}

pub fn handle_close_match_modal(state: &mut AppState) -> UpdateResult {
    state.match_modal = None;
    UpdateResult::none()
}

pub fn handle_close_premium_modal(state: &mut AppState) -> UpdateResult {
    state.premium_modal = false;
    UpdateResult::none()
}

pub fn handle_close_chat(state: &mut AppState) -> UpdateResult {
    state.chat = None;
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────

pub fn handle_chat_char(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(chat) = &mut state.chat {
        chat.draft.push(c);
    }
    UpdateResult::none()
}

pub fn handle_chat_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(chat) = &mut state.chat {
        chat.draft.pop();
    }
    UpdateResult::none()
}

/// Send the draft. There is no transport: a valid draft is logged and
/// cleared, the displayed history stays as seeded.
pub fn handle_send_chat_message(state: &mut AppState) -> UpdateResult {
    let Some(chat) = &mut state.chat else {
        return UpdateResult::none();
    };

    if chat.draft.trim().is_empty() {
        let err = SendError::EmptyMessage;
        warn!(error = %err, "send rejected");
        return UpdateResult::none();
    }

    info!(to = %chat.profile_id, text = %chat.draft, "sending message (mock transport)");
    chat.draft.clear();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Premium Modal
// ─────────────────────────────────────────────────────────

pub fn handle_premium_prev_plan(state: &mut AppState) -> UpdateResult {
    state.premium_cursor = state.premium_cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_premium_next_plan(state: &mut AppState) -> UpdateResult {
    if state.premium_cursor + 1 < PremiumPlan::ALL.len() {
        state.premium_cursor += 1;
    }
    UpdateResult::none()
}

pub fn handle_subscribe_premium(state: &mut AppState, plan: PremiumPlan) -> UpdateResult {
    info!(plan = plan.id(), "subscription requested (mock billing)");
    state.premium_modal = false;
    UpdateResult::none()
}
