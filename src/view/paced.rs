//! A view that logs events and waits between them.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::{EntityId, SpeedRate};

use super::View;

/// Logs each event at `info` level and sleeps for `base * SpeedRate`.
///
/// Used by the `duel` binary to give a terminal game some rhythm.
#[derive(Clone, Copy, Debug)]
pub struct PacedView {
    base: Duration,
}

impl PacedView {
    /// Create a paced view with the given base delay per event.
    #[must_use]
    pub fn new(base: Duration) -> Self {
        Self { base }
    }

    async fn pause(&self) {
        let delay = SpeedRate::scale(self.base);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for PacedView {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[async_trait(?Send)]
impl View for PacedView {
    async fn show_attack(&self, attacker: EntityId) {
        tracing::info!(target: "view", %attacker, "attack");
        self.pause().await;
    }

    async fn signal_ability(&self, card: EntityId) {
        tracing::info!(target: "view", %card, "ability");
        self.pause().await;
    }

    async fn signal_damage(&self, card: EntityId, amount: u32) {
        tracing::info!(target: "view", %card, amount, "damage");
        self.pause().await;
    }

    async fn signal_heal(&self, card: EntityId, amount: u32) {
        tracing::info!(target: "view", %card, amount, "heal");
        self.pause().await;
    }

    async fn signal_removal(&self, card: EntityId) {
        tracing::info!(target: "view", %card, "removed");
        self.pause().await;
    }
}
