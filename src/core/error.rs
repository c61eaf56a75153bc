//! Errors surfaced at the game boundary.
//!
//! Combat itself never fails: an attack without targets is a no-op and
//! negative quantities are clamped. Only building and driving a game can
//! go wrong, and only in the ways listed here.

use crate::cards::CardId;

use super::PlayerId;

/// Errors from building or driving a [`Game`](crate::game::Game).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("card kind {0} is not in the registry")]
    UnknownCard(CardId),

    #[error("{0} has an empty deck")]
    EmptyDeck(PlayerId),

    #[error("{player} has no card at table position {position}")]
    InvalidSelection { player: PlayerId, position: usize },

    #[error("the game has already been started")]
    AlreadyStarted,

    #[error("the game has already finished")]
    Finished,

    #[error("game has not been started; call play first")]
    NotStarted,

    #[error("failed to build the async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
