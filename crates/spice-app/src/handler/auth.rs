//! Landing, sign-in and registration handlers.
//!
//! Nothing here talks to a backend: login waits out a timer and then
//! succeeds, signup validates and navigates. Passwords are never logged.

use spice_core::prelude::*;

use crate::state::{AppState, PendingLogin, Tab, View};

use super::{Task, UpdateAction, UpdateResult};

pub fn handle_show_login(state: &mut AppState) -> UpdateResult {
    state.view = View::Login;
    UpdateResult::none()
}

pub fn handle_show_signup(state: &mut AppState) -> UpdateResult {
    state.view = View::Signup;
    UpdateResult::none()
}

/// Back out to the landing screen. Any in-flight login is cancelled so
/// its timer cannot navigate a view that is no longer there.
pub fn handle_show_landing(state: &mut AppState) -> UpdateResult {
    state.cancel_pending_login();
    state.view = View::Landing;
    UpdateResult::none()
}

pub fn handle_hero_toggle_focus(state: &mut AppState) -> UpdateResult {
    state.hero_focus = state.hero_focus.toggled();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Sign-In Form
// ─────────────────────────────────────────────────────────

pub fn handle_login_char(state: &mut AppState, c: char) -> UpdateResult {
    state.login_form.insert_char(c);
    UpdateResult::none()
}

pub fn handle_login_backspace(state: &mut AppState) -> UpdateResult {
    state.login_form.backspace();
    UpdateResult::none()
}

pub fn handle_login_focus_next(state: &mut AppState) -> UpdateResult {
    state.login_form.focus_next();
    UpdateResult::none()
}

pub fn handle_login_focus_prev(state: &mut AppState) -> UpdateResult {
    state.login_form.focus_prev();
    UpdateResult::none()
}

pub fn handle_login_toggle_show_password(state: &mut AppState) -> UpdateResult {
    state.login_form.toggle_show_password();
    UpdateResult::none()
}

pub fn handle_login_toggle_remember(state: &mut AppState) -> UpdateResult {
    state.login_form.toggle_remember();
    UpdateResult::none()
}

/// Submit the sign-in form. On success the view does NOT change yet;
/// a `LoginTimer` task delivers `LoginDelayElapsed` after the
/// configured delay and the transition happens there.
pub fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    if state.pending_login.is_some() {
        debug!("login already in flight, ignoring resubmit");
        return UpdateResult::none();
    }

    if let Err(e) = state.login_form.validate() {
        warn!(error = %e, "sign-in submission rejected");
        state.login_form.error = Some(e);
        return UpdateResult::none();
    }

    let seq = state.next_login_seq();
    let email = state.login_form.email.trim().to_string();
    info!(%email, seq, "sign-in submitted, starting mock login");
    state.pending_login = Some(PendingLogin {
        seq,
        email: email.clone(),
    });

    UpdateResult::action(UpdateAction::SpawnTask(Task::LoginTimer {
        seq,
        email,
        delay_ms: state.settings.login_delay_ms,
    }))
}

/// The login timer fired. Only the current attempt, with the sign-in
/// view still up, may transition; anything else is a stale timer.
pub fn handle_login_delay_elapsed(state: &mut AppState, seq: u64) -> UpdateResult {
    let current = matches!(&state.pending_login, Some(p) if p.seq == seq);
    if !current || state.view != View::Login {
        debug!(seq, "stale login timer ignored");
        return UpdateResult::none();
    }

    let pending = state.pending_login.take();
    if let Some(p) = pending {
        info!(email = %p.email, "signed in (mock)");
    }
    state.login_form.password.clear();
    state.login_form.error = None;
    state.view = View::Main;
    state.tab = Tab::Discover;
    UpdateResult::none()
}

pub fn handle_forgot_password(_state: &mut AppState) -> UpdateResult {
    info!("forgot-password flow is not wired in this build");
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Registration Form
// ─────────────────────────────────────────────────────────

pub fn handle_signup_char(state: &mut AppState, c: char) -> UpdateResult {
    state.signup_form.insert_char(c);
    UpdateResult::none()
}

pub fn handle_signup_backspace(state: &mut AppState) -> UpdateResult {
    state.signup_form.backspace();
    UpdateResult::none()
}

pub fn handle_signup_focus_next(state: &mut AppState) -> UpdateResult {
    state.signup_form.focus_next();
    UpdateResult::none()
}

pub fn handle_signup_focus_prev(state: &mut AppState) -> UpdateResult {
    state.signup_form.focus_prev();
    UpdateResult::none()
}

/// Submit the registration form. No account is created; a valid
/// submission navigates to sign-in.
pub fn handle_submit_signup(state: &mut AppState) -> UpdateResult {
    match state.signup_form.validate() {
        Err(e) => {
            warn!(error = %e, "registration submission rejected");
            state.signup_form.error = Some(e);
            UpdateResult::none()
        }
        Ok(data) => {
            info!(email = %data.email, age = data.age, "registration submitted, continue to sign-in");
            state.view = View::Login;
            UpdateResult::none()
        }
    }
}
