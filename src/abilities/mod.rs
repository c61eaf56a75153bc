//! Ability system: damage modifiers, modifier chains, and shared state.
//!
//! ## Key Types
//!
//! - [`Ability`]: the three damage hooks (dealt to creature, dealt to
//!   player, taken)
//! - [`Modifier`]: one damage transformation
//! - [`AbilitySet`]: a card's ordered grants per ability
//! - [`ModifierChain`]: folds a damage value through a card's grants
//! - [`Population`]: live per-kind counters for collective bonuses
//! - [`SharedAbilityRegistry`]: population plus the ability theft ledger
//!
//! ## Example
//!
//! ```
//! use duck_duel::abilities::{Ability, AbilitySet, ChainScope, ModifierChain, Modifier, Population};
//! use duck_duel::core::EntityId;
//! use duck_duel::view::NullView;
//!
//! let abilities = AbilitySet::new().with(Ability::TakeDamage, Modifier::Shield(1));
//! let population = Population::new();
//! let scope = ChainScope { holder: EntityId(0), population: &population, view: &NullView };
//!
//! let chain = ModifierChain::new(abilities.grants(Ability::TakeDamage));
//! let taken = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .unwrap()
//!     .block_on(chain.resolve(Ability::TakeDamage, 3, &scope));
//!
//! assert_eq!(taken, 2);
//! ```

mod chain;
mod modifier;
mod population;
mod shared;

pub use chain::{clamp_damage, ChainScope, ModifierChain};
pub use modifier::{Ability, AbilitySet, Grant, Modifier, Origin};
pub use population::{triangular, Population};
pub use shared::SharedAbilityRegistry;
