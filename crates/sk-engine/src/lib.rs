//! Turn-resolution engine for Skirmish battles.
//!
//! One call to [`perform_turn`] resolves a single exchange between the
//! player and the first living enemy: the enemy's action is drawn from its
//! archetype, turn order comes from the priority carried over from the
//! previous turn, the pair of actions is looked up in the resolution table,
//! and deaths are turned into victory or defeat.
//!
//! Every random draw goes through the [`Decider`] trait so tests can script
//! enemy actions, dodge rolls, and the turn-order coin flip.

pub mod config;
pub mod decider;
pub mod error;
pub mod resolution;
pub mod turn;

pub use config::EngineConfig;
pub use decider::{Decider, RandomDecider, ScriptedDecider, attempt_dodge, choose_enemy_action};
pub use error::{EngineError, EngineResult};
pub use resolution::{Actor, Matchup, Resolution, resolve};
pub use turn::{TurnOutcome, TurnSession, perform_turn, perform_turn_with};
