//! # duck-duel
//!
//! Combat and ability resolution for a two-table creature card game.
//!
//! Two sides (sheriff and bandit) each lay out a table of cards and take
//! turns attacking. Damage flows through per-card modifier chains, some
//! kinds steal abilities or grow stronger in packs, and multi-target
//! attacks resolve strictly one target at a time.
//!
//! ## Design Principles
//!
//! 1. **Explicit chains**: Each card holds an ordered list of modifiers per
//!    ability kind, folded onto an identity base. No overriding.
//!
//! 2. **Session-owned shared state**: Population counters and the theft
//!    ledger live in [`GameState`] and are passed into hooks explicitly.
//!
//! 3. **Futures, not callbacks**: Every asynchronous step is a future that
//!    resolves exactly once. [`TaskQueue`] runs steps one after another.
//!
//! ## Modules
//!
//! - `core`: Entity ids, sides, configuration, errors, session state
//! - `abilities`: Modifier chains, population counters, ability theft
//! - `cards`: Card definitions, instances, capabilities, the catalog
//! - `zones`: Tables
//! - `stack`: Sequential task scheduling
//! - `combat`: Targeting, lifecycle hooks, attack resolution
//! - `view`: Animation hooks
//! - `game`: Building and running a session

pub mod core;
pub mod abilities;
pub mod cards;
pub mod zones;
pub mod stack;
pub mod combat;
pub mod view;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap,
    GameConfig, GameError, SpeedRate,
    HitRecord, HitTarget,
    GameState, Player,
};

pub use crate::abilities::{
    Ability, AbilitySet, Grant, Modifier, Origin,
    ModifierChain, Population, SharedAbilityRegistry,
};

pub use crate::cards::{
    AttackStyle, Capabilities, CardDefinition, CardId, CardInstance,
    CardRegistry, Classification, PreAttack,
};

pub use crate::zones::Table;

pub use crate::stack::{StepFuture, TaskQueue};

pub use crate::combat::{AttackReport, CombatResolver};

pub use crate::view::{NullView, PacedView, RecordingView, View, ViewEvent};

pub use crate::game::{Game, GameBuilder, GameResult};
