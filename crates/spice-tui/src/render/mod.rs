//! Top-level render dispatch: one frame is a pure function of AppState.

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use spice_app::{AppState, Tab, View};

use crate::widgets::bottom_nav::BottomNav;
use crate::widgets::chat_view::ChatView;
use crate::widgets::hero::HeroScreen;
use crate::widgets::login_form::LoginScreen;
use crate::widgets::match_modal::MatchModal;
use crate::widgets::placeholder::PlaceholderScreen;
use crate::widgets::premium_modal::PremiumModal;
use crate::widgets::signup_form::SignupScreen;
use crate::widgets::swipe_card::DiscoverScreen;

/// Render the whole frame for the current state
pub fn render(state: &AppState, frame: &mut Frame) {
    match state.view {
        View::Landing => frame.render_widget(HeroScreen::new(state.hero_focus), frame.area()),
        View::Login => frame.render_widget(
            LoginScreen::new(&state.login_form, state.pending_login.is_some()),
            frame.area(),
        ),
        View::Signup => {
            frame.render_widget(SignupScreen::new(&state.signup_form), frame.area())
        }
        View::Main => render_main(state, frame),
    }
}

/// Main view: either the chat overlay (which takes the whole screen,
/// bottom bar included) or the active tab content above the bottom bar.
/// Modals stack on top of both.
fn render_main(state: &AppState, frame: &mut Frame) {
    match (&state.chat, state.chat_partner()) {
        (Some(chat), Some(partner)) => {
            frame.render_widget(
                ChatView::new(
                    partner,
                    &state.conversation,
                    &chat.draft,
                    &state.settings.current_user_id,
                ),
                frame.area(),
            );
        }
        _ => {
            let [content, nav] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(3)])
                    .areas(frame.area());

            match state.tab {
                Tab::Matches => frame.render_widget(PlaceholderScreen::matches(), content),
                Tab::Profile => frame.render_widget(PlaceholderScreen::profile(), content),
                _ => frame.render_widget(
                    DiscoverScreen::new(
                        state.swipe.top(&state.profiles),
                        state.swipe.remaining(state.profiles.len()),
                        state.profiles.len(),
                    ),
                    content,
                ),
            }

            frame.render_widget(
                BottomNav::new(state.tab, state.match_count(), state.unread_message_count()),
                nav,
            );
        }
    }

    if let Some(profile) = state.matched_profile() {
        frame.render_widget(
            MatchModal::new(profile, &state.settings.current_user_name),
            frame.area(),
        );
    }
    if state.premium_modal {
        frame.render_widget(PremiumModal::new(state.premium_cursor), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use spice_app::ChatState;

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(state, f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    fn main_state() -> AppState {
        let mut state = AppState::default();
        state.view = View::Main;
        state
    }

    #[test]
    fn test_landing_frame() {
        let state = AppState::default();
        let content = render_to_string(&state);
        assert!(content.contains("S P I C E"));
        assert!(content.contains("Sign In"));
    }

    #[test]
    fn test_login_frame() {
        let mut state = AppState::default();
        state.view = View::Login;
        let content = render_to_string(&state);
        assert!(content.contains("Welcome Back"));
    }

    #[test]
    fn test_main_frame_shows_deck_and_nav() {
        let state = main_state();
        let content = render_to_string(&state);
        assert!(content.contains("Alexandra, 28"));
        assert!(content.contains("Discover"));
        assert!(content.contains("Premium"));
    }

    #[test]
    fn test_chat_overlay_replaces_tab_content() {
        let mut state = main_state();
        state.chat = Some(ChatState::new("1"));
        let content = render_to_string(&state);
        assert!(content.contains("Thanks for the match"));
        // The bottom bar is suspended while chatting
        assert!(!content.contains("[1] Discover"));
    }

    #[test]
    fn test_match_modal_frame() {
        let mut state = main_state();
        state.match_modal = Some("2".to_string());
        let content = render_to_string(&state);
        assert!(content.contains("It's a Match!"));
    }

    #[test]
    fn test_premium_modal_frame() {
        let mut state = main_state();
        state.premium_modal = true;
        let content = render_to_string(&state);
        assert!(content.contains("SPICE Premium"));
        assert!(content.contains("$29.99/mo"));
    }

    #[test]
    fn test_modal_with_dangling_id_renders_nothing() {
        let mut state = main_state();
        state.match_modal = Some("999".to_string());
        let content = render_to_string(&state);
        assert!(!content.contains("It's a Match!"));
    }
}
