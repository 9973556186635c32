//! Background task dispatch.
//!
//! The reducer never spawns anything itself; it returns an
//! [`UpdateAction`] and the run loop hands it here. The only task in
//! this build is the simulated login delay.

use std::time::Duration;

use spice_core::prelude::*;
use tokio::sync::mpsc;

use crate::handler::{Task, UpdateAction};
use crate::message::Message;

/// Perform an action emitted by the reducer
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::SpawnTask(task) => spawn_task(task, msg_tx),
    }
}

fn spawn_task(task: Task, msg_tx: mpsc::Sender<Message>) {
    match task {
        Task::LoginTimer {
            seq,
            email,
            delay_ms,
        } => {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                debug!(%email, seq, "login timer elapsed");
                // The reducer decides whether this attempt is still
                // current; a closed channel just means we're quitting.
                if msg_tx
                    .send(Message::LoginDelayElapsed { seq })
                    .await
                    .is_err()
                {
                    debug!("message channel closed before login timer delivery");
                }
            });
        }
    }
}
