//! Main run loop: draw, poll, reduce, dispatch.

use spice_app::{handle_action, handler, AppState, Message, Settings};
use spice_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Capacity of the channel background tasks deliver messages on
const CHANNEL_CAPACITY: usize = 64;

/// Set up the terminal, run until quit, restore the terminal.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = run_loop(&mut term, settings).await;
    ratatui::restore();
    result
}

async fn run_loop(terminal: &mut ratatui::DefaultTerminal, settings: Settings) -> Result<()> {
    let mut state = AppState::new(settings);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

    info!("entering main loop");
    while !state.should_quit() {
        terminal.draw(|frame| render::render(&state, frame))?;

        // Terminal input (or a tick on timeout), then anything the
        // background tasks delivered since the last iteration.
        if let Some(message) = event::poll()? {
            process_message(&mut state, message, &msg_tx);
        }
        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &msg_tx);
        }
    }
    info!("main loop finished");
    Ok(())
}

/// Run a message through the reducer, following follow-up messages and
/// dispatching any emitted actions.
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spice_app::{Tab, View};

    #[tokio::test]
    async fn test_login_flow_end_to_end() {
        let settings = Settings {
            login_delay_ms: 5,
            ..Default::default()
        };
        let mut state = AppState::new(settings);
        let (tx, mut rx) = mpsc::channel(8);

        process_message(&mut state, Message::ShowLogin, &tx);
        state.login_form.email = "a@b.com".to_string();
        state.login_form.password = "x".to_string();
        process_message(&mut state, Message::SubmitLogin, &tx);

        // Still signing in until the timer message lands
        assert_eq!(state.view, View::Login);
        assert!(state.pending_login.is_some());

        let msg = rx.recv().await.expect("login timer message");
        process_message(&mut state, msg, &tx);

        assert_eq!(state.view, View::Main);
        assert_eq!(state.tab, Tab::Discover);
        assert!(state.pending_login.is_none());
    }

    #[tokio::test]
    async fn test_cancelled_login_discards_late_timer() {
        let settings = Settings {
            login_delay_ms: 5,
            ..Default::default()
        };
        let mut state = AppState::new(settings);
        let (tx, mut rx) = mpsc::channel(8);

        process_message(&mut state, Message::ShowLogin, &tx);
        state.login_form.email = "a@b.com".to_string();
        state.login_form.password = "x".to_string();
        process_message(&mut state, Message::SubmitLogin, &tx);

        // Back out before the timer fires
        process_message(&mut state, Message::ShowLanding, &tx);

        let msg = rx.recv().await.expect("login timer message");
        process_message(&mut state, msg, &tx);

        // The dead timer did not navigate
        assert_eq!(state.view, View::Landing);
    }

    #[test]
    fn test_swipe_follow_up_is_processed_in_one_call() {
        let mut state = AppState::default();
        state.view = View::Main;
        let (tx, _rx) = mpsc::channel(8);

        process_message(&mut state, Message::SwipeRight, &tx);

        // SwipeRight resolves into MatchProfile in the same call
        assert_eq!(state.match_modal.as_deref(), Some("1"));
    }
}
