//! Game sessions: building, turn flow, results.
//!
//! ## Key Types
//!
//! - `GameBuilder`: Configures a session and validates both decks
//! - `Game`: Deploys the decks and drives alternating attacks
//! - `GameResult`: Winner or draw
//!
//! ## Example
//!
//! ```
//! use duck_duel::cards::catalog::{DOG, DUCK};
//! use duck_duel::cards::CardRegistry;
//! use duck_duel::core::PlayerId;
//! use duck_duel::game::{GameBuilder, GameResult};
//!
//! let mut game = GameBuilder::new()
//!     .build(CardRegistry::standard(), &[DUCK, DUCK, DUCK], &[DOG])
//!     .unwrap();
//!
//! let result = game.play_blocking(|winner| println!("{} wins", winner.name)).unwrap();
//! assert_eq!(result, GameResult::Winner(PlayerId::SHERIFF));
//! ```

mod builder;
mod game_loop;
mod result;

pub use builder::GameBuilder;
pub use game_loop::{Game, Phase, WinnerCallback};
pub use result::GameResult;
pub use crate::core::Player;
