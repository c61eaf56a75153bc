//! Rendering and animation collaborators.
//!
//! The engine never draws anything itself. It awaits a [`View`] at the
//! points where play pauses for an animation: an attack
//! starting, an ability firing, damage landing. Every method resolves
//! exactly once (it is a future), possibly immediately, and combat only
//! proceeds after it resolves.
//!
//! ## Implementations
//!
//! - [`NullView`]: resolves immediately, draws nothing
//! - [`RecordingView`]: resolves immediately, records every event in order
//! - [`PacedView`]: logs each event and sleeps for a delay scaled by
//!   [`SpeedRate`](crate::core::SpeedRate)

mod paced;
mod recording;

pub use paced::PacedView;
pub use recording::{RecordingView, ViewEvent};

use async_trait::async_trait;

use crate::core::EntityId;

/// Animation hooks the combat engine waits on.
///
/// Views are black boxes that never fail. Only `show_attack` and
/// `signal_ability` are required; the rest default to resolving
/// immediately.
#[async_trait(?Send)]
pub trait View {
    /// An attack by `attacker` begins.
    async fn show_attack(&self, attacker: EntityId);

    /// An ability of `card` fires.
    async fn signal_ability(&self, card: EntityId);

    /// `card` took `amount` damage.
    async fn signal_damage(&self, _card: EntityId, _amount: u32) {}

    /// `card` recovered `amount` power.
    async fn signal_heal(&self, _card: EntityId, _amount: u32) {}

    /// `card` left play.
    async fn signal_removal(&self, _card: EntityId) {}
}

/// A view that draws nothing and never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

#[async_trait(?Send)]
impl View for NullView {
    async fn show_attack(&self, _attacker: EntityId) {}

    async fn signal_ability(&self, _card: EntityId) {}
}
