//! Combat: attack resolution, targeting, and lifecycle hooks.
//!
//! - [`CombatResolver`]: runs an attack end to end
//! - [`targeting`]: picks targets according to a card's attack style
//! - [`lifecycle`]: entry and removal hooks
//! - [`pre_attack`]: ability theft and brewing
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use duck_duel::cards::catalog::{DOG, DUCK};
//! use duck_duel::cards::CardRegistry;
//! use duck_duel::combat::CombatResolver;
//! use duck_duel::core::{GameConfig, GameState, PlayerId};
//! use duck_duel::view::NullView;
//!
//! let mut state = GameState::new(GameConfig::default(), CardRegistry::standard(), Rc::new(NullView));
//! let duck = state.deploy(PlayerId::SHERIFF, DUCK).unwrap();
//! let dog = state.deploy(PlayerId::BANDIT, DOG).unwrap();
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let report = runtime.block_on(CombatResolver::attack(&mut state, duck));
//!
//! assert_eq!(report.hits.len(), 1);
//! assert_eq!(state.card(dog).map(|c| c.power), Some(1));
//! ```

pub mod lifecycle;
pub mod pre_attack;
pub mod targeting;
mod resolver;

pub use resolver::{AttackPhase, AttackReport, CombatResolver};
pub use targeting::Targets;
