//! Battle persistence for Skirmish.
//!
//! The engine mutates a [`Battle`](sk_core::Battle) in place and knows
//! nothing about storage. This crate keeps battles between turns behind
//! the [`BattleStore`] trait, with an in-memory implementation for tests
//! and a JSON-file implementation for the CLI.

/// Error types raised by store implementations.
pub mod error;
/// JSON-file store.
pub mod file;
/// In-memory store.
pub mod memory;
/// Stored battle documents.
pub mod record;
/// The store contract.
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileBattleStore;
pub use memory::MemoryBattleStore;
pub use record::BattleRecord;
pub use traits::BattleStore;
