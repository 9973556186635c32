//! Swipe deck and match handlers.
//!
//! A right swipe matches unconditionally (no reciprocity check exists in
//! this build). All lookups are guarded: an unknown profile id leaves
//! every visibility flag untouched.

use spice_core::prelude::*;
use spice_core::MatchError;

use crate::message::Message;
use crate::state::{AppState, ChatState};

use super::UpdateResult;

/// Like the top card. The deck advances and the like resolves into a
/// `MatchProfile` follow-up carrying the card's id.
pub fn handle_swipe_right(state: &mut AppState) -> UpdateResult {
    let Some(top) = state.swipe.top(&state.profiles) else {
        debug!("right swipe on empty deck ignored");
        return UpdateResult::none();
    };
    let profile_id = top.id.clone();
    state.swipe.advance();
    UpdateResult::message(Message::MatchProfile { profile_id })
}

/// Pass on the top card. The deck advances; nobody is told.
pub fn handle_swipe_left(state: &mut AppState) -> UpdateResult {
    if let Some(top) = state.swipe.top(&state.profiles) {
        debug!(profile = %top.name, "passed");
        state.swipe.advance();
    }
    UpdateResult::none()
}

/// A like resolved to a profile id. Opens the match modal when the id
/// exists; an unknown id is logged and changes nothing.
pub fn handle_match_profile(state: &mut AppState, profile_id: String) -> UpdateResult {
    match state.profile(&profile_id) {
        Some(profile) => {
            info!(profile = %profile.name, "it's a match");
            state.match_modal = Some(profile_id);
        }
        None => {
            let err = MatchError::UnknownProfile { id: profile_id };
            warn!(error = %err, "match request dropped");
        }
    }
    UpdateResult::none()
}

/// Open the chat overlay with a profile. The match modal closes; the
/// chat overlay replaces tab content until dismissed. An unknown id is
/// logged and changes nothing.
pub fn handle_start_chat(state: &mut AppState, profile_id: String) -> UpdateResult {
    match state.profile(&profile_id) {
        Some(profile) => {
            info!(profile = %profile.name, "opening chat");
            state.chat = Some(ChatState::new(profile_id));
            state.match_modal = None;
        }
        None => {
            let err = MatchError::UnknownProfile { id: profile_id };
            warn!(error = %err, "chat request dropped");
        }
    }
    UpdateResult::none()
}
