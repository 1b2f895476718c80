use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use sk_core::{Battle, BattleId};

use crate::error::{StoreError, StoreResult};
use crate::record::{BattleRecord, sort_records};
use crate::traits::BattleStore;

type Battles = BTreeMap<BattleId, BattleRecord>;

/// Battles held in a map for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryBattleStore {
    battles: Mutex<Battles>,
}

impl MemoryBattleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Battles>> {
        self.battles.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl BattleStore for MemoryBattleStore {
    fn create(&self, battle: Battle) -> StoreResult<BattleId> {
        let mut battles = self.lock()?;
        let id = battle.id;
        if battles.contains_key(&id) {
            return Err(StoreError::AlreadyExists(id));
        }
        battles.insert(id, BattleRecord::new(battle));
        tracing::debug!(battle = %id, "created battle in memory");
        Ok(id)
    }

    fn load(&self, id: &BattleId) -> StoreResult<Option<Battle>> {
        Ok(self.lock()?.get(id).map(|r| r.battle.clone()))
    }

    fn update(&self, battle: &Battle) -> StoreResult<()> {
        let mut battles = self.lock()?;
        match battles.get_mut(&battle.id) {
            Some(record) => {
                *record = BattleRecord::new(battle.clone());
                tracing::debug!(
                    battle = %battle.id,
                    status = %battle.status,
                    "updated battle in memory"
                );
                Ok(())
            }
            None => Err(StoreError::NotFound(battle.id)),
        }
    }

    fn delete(&self, id: &BattleId) -> StoreResult<bool> {
        let removed = self.lock()?.remove(id).is_some();
        if removed {
            tracing::debug!(battle = %id, "deleted battle from memory");
        }
        Ok(removed)
    }

    fn list(&self) -> StoreResult<Vec<BattleRecord>> {
        let mut records: Vec<BattleRecord> = self.lock()?.values().cloned().collect();
        sort_records(&mut records);
        Ok(records)
    }
}
