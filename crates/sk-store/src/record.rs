use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sk_core::{Battle, BattleId};

/// A battle as it sits in a store, stamped with its last save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRecord {
    /// When the battle was last written.
    pub saved_at: DateTime<Utc>,
    /// The battle itself.
    pub battle: Battle,
}

impl BattleRecord {
    /// Wrap a battle, stamping it with the current time.
    pub fn new(battle: Battle) -> Self {
        Self {
            saved_at: Utc::now(),
            battle,
        }
    }

    /// The stored battle's id.
    pub fn id(&self) -> BattleId {
        self.battle.id
    }
}

/// Oldest first, ties broken by id.
pub(crate) fn sort_records(records: &mut [BattleRecord]) {
    records.sort_by(|a, b| {
        a.saved_at
            .cmp(&b.saved_at)
            .then_with(|| a.battle.id.cmp(&b.battle.id))
    });
}
