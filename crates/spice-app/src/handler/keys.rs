//! Key event handlers for the active view and overlays

use crate::forms::{LoginField, SignupField};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::premium::PremiumPlan;
use crate::state::{AppState, HeroButton, Tab, View};

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Emergency exit works from anywhere, even mid-typing
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.view {
        View::Landing => handle_key_landing(state, key),
        View::Login => handle_key_login(state, key),
        View::Signup => handle_key_signup(state, key),
        View::Main => handle_key_main(state, key),
    }
}

/// Landing: two buttons and a quit key
fn handle_key_landing(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left
        | InputKey::Right
        | InputKey::Up
        | InputKey::Down
        | InputKey::Tab
        | InputKey::BackTab => Some(Message::HeroToggleFocus),

        InputKey::Enter => Some(match state.hero_focus {
            HeroButton::SignIn => Message::ShowLogin,
            HeroButton::SignUp => Message::ShowSignup,
        }),

        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Sign-in form. Enter acts on the focused control; typing lands in the
/// focused text field.
fn handle_key_login(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.login_form.focus;
    match key {
        InputKey::Esc => Some(Message::ShowLanding),

        InputKey::Tab | InputKey::Down => Some(Message::LoginFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::LoginFocusPrev),

        // Eye toggle on the password field
        InputKey::CharCtrl('p') => Some(Message::LoginToggleShowPassword),

        InputKey::Enter => Some(match focus {
            LoginField::Email | LoginField::Password | LoginField::Submit => Message::SubmitLogin,
            LoginField::Remember => Message::LoginToggleRemember,
            LoginField::Forgot => Message::ForgotPassword,
            LoginField::CreateAccount => Message::ShowSignup,
        }),

        // Space toggles the checkbox when it has focus, otherwise types
        InputKey::Char(' ') if focus == LoginField::Remember => {
            Some(Message::LoginToggleRemember)
        }

        InputKey::Char(c) if focus.is_text() => Some(Message::LoginChar(c)),
        InputKey::Backspace if focus.is_text() => Some(Message::LoginBackspace),

        _ => None,
    }
}

/// Registration form, same shape as sign-in
fn handle_key_signup(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.signup_form.focus;
    match key {
        InputKey::Esc => Some(Message::ShowLanding),

        InputKey::Tab | InputKey::Down => Some(Message::SignupFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::SignupFocusPrev),

        InputKey::Enter => Some(match focus {
            SignupField::SignIn => Message::ShowLogin,
            _ => Message::SubmitSignup,
        }),

        InputKey::Char(c) if focus.is_text() => Some(Message::SignupChar(c)),
        InputKey::Backspace if focus.is_text() => Some(Message::SignupBackspace),

        _ => None,
    }
}

/// Main view: overlays take key priority over tab content. The premium
/// modal sits above everything, then the match modal, then the chat
/// overlay, then whatever tab is showing.
fn handle_key_main(state: &AppState, key: InputKey) -> Option<Message> {
    if state.premium_modal {
        return handle_key_premium_modal(state, key);
    }
    if state.match_modal.is_some() {
        return handle_key_match_modal(state, key);
    }
    if state.chat.is_some() {
        return handle_key_chat(key);
    }
    handle_key_tab_content(state, key)
}

fn handle_key_tab_content(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Bottom bar, in display order
        InputKey::Char('1') => Some(Message::SelectTab(Tab::Discover)),
        InputKey::Char('2') => Some(Message::SelectTab(Tab::Matches)),
        InputKey::Char('3') => Some(Message::SelectTab(Tab::Messages)),
        InputKey::Char('4') => Some(Message::SelectTab(Tab::Profile)),
        InputKey::Char('5') => Some(Message::SelectTab(Tab::Premium)),

        // Swiping only makes sense on the deck
        InputKey::Right | InputKey::Char('l') if state.tab == Tab::Discover => {
            Some(Message::SwipeRight)
        }
        InputKey::Left | InputKey::Char('h') if state.tab == Tab::Discover => {
            Some(Message::SwipeLeft)
        }

        _ => None,
    }
}

fn handle_key_match_modal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('c') => {
            state.match_modal.as_ref().map(|id| Message::StartChat {
                profile_id: id.clone(),
            })
        }
        InputKey::Esc | InputKey::Char('k') => Some(Message::CloseMatchModal),
        _ => None,
    }
}

fn handle_key_premium_modal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::PremiumPrevPlan),
        InputKey::Down => Some(Message::PremiumNextPlan),
        InputKey::Enter => PremiumPlan::ALL
            .get(state.premium_cursor)
            .map(|plan| Message::SubscribePremium { plan: *plan }),
        InputKey::Esc => Some(Message::ClosePremiumModal),
        _ => None,
    }
}

fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseChat),
        InputKey::Enter => Some(Message::SendChatMessage),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::Char(c) => Some(Message::ChatChar(c)),
        _ => None,
    }
}
