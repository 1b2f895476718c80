//! Core types for Skirmish: combatants, archetypes, actions, and battles.
//!
//! This crate defines the data a battle carries between turns. It holds no
//! combat logic of its own; the turn-resolution engine lives in `sk-engine`
//! and persistence in `sk-store`. Every type here serializes with serde so a
//! [`Battle`] survives a save/load cycle unchanged.

/// Actions, sides, and turn priority.
pub mod action;
/// Enemy archetypes and their action distributions.
pub mod archetype;
/// The battle record, its status, and the event log.
pub mod battle;
/// Combatant stats and the enemy wrapper.
pub mod combatant;
/// Error types used throughout the crate.
pub mod error;
/// Named combatant templates.
pub mod preset;

/// Re-export action types.
pub use action::{Action, Priority, Side};
/// Re-export archetype types.
pub use archetype::{ActionWeights, Archetype};
/// Re-export battle types.
pub use battle::{Battle, BattleId, BattleLog, BattleStatus};
/// Re-export combatant types.
pub use combatant::{Combatant, Enemy};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
