//! A view that remembers what it was asked to show.

use std::cell::RefCell;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::EntityId;

use super::View;

/// One animation request, in the order the engine issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    Attack(EntityId),
    Ability(EntityId),
    Damage(EntityId, u32),
    Heal(EntityId, u32),
    Removal(EntityId),
}

/// Records every event and resolves immediately.
///
/// ```
/// use duck_duel::core::EntityId;
/// use duck_duel::view::{RecordingView, View, ViewEvent};
///
/// let view = RecordingView::new();
/// tokio::runtime::Builder::new_current_thread()
///     .build()
///     .unwrap()
///     .block_on(view.show_attack(EntityId(3)));
///
/// assert_eq!(view.events(), vec![ViewEvent::Attack(EntityId(3))]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<ViewEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[async_trait(?Send)]
impl View for RecordingView {
    async fn show_attack(&self, attacker: EntityId) {
        self.push(ViewEvent::Attack(attacker));
    }

    async fn signal_ability(&self, card: EntityId) {
        self.push(ViewEvent::Ability(card));
    }

    async fn signal_damage(&self, card: EntityId, amount: u32) {
        self.push(ViewEvent::Damage(card, amount));
    }

    async fn signal_heal(&self, card: EntityId, amount: u32) {
        self.push(ViewEvent::Heal(card, amount));
    }

    async fn signal_removal(&self, card: EntityId) {
        self.push(ViewEvent::Removal(card));
    }
}
