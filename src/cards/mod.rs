//! Card system: capabilities, definitions, instances, registry, catalog.
//!
//! ## Key Types
//!
//! - `CardId`: identifier of a card kind
//! - `Capabilities`: tag set used for classification
//! - `CardDefinition`: static per-kind data
//! - `CardInstance`: a card in play
//! - `CardRegistry`: definition lookup
//!
//! The standard kinds live in [`catalog`].

pub mod capabilities;
pub mod catalog;
pub mod definition;
pub mod instance;
pub mod registry;

pub use capabilities::{Capabilities, Classification};
pub use definition::{AttackStyle, CardDefinition, CardId, PreAttack};
pub use instance::CardInstance;
pub use registry::CardRegistry;
