//! Core types: entities, players, configuration, state, errors.
//!
//! These are the building blocks every other module shares.

pub mod entity;
pub mod player;
pub mod config;
pub mod speed;
pub mod error;
pub mod record;
pub mod state;

pub use entity::EntityId;
pub use player::{PlayerId, PlayerMap};
pub use config::GameConfig;
pub use speed::SpeedRate;
pub use error::GameError;
pub use record::{HitRecord, HitTarget};
pub use state::{GameState, Player};
