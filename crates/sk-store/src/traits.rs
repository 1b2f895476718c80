use sk_core::{Battle, BattleId};

use crate::error::StoreResult;
use crate::record::BattleRecord;

/// Keeps battles between turns.
///
/// Each call is atomic on its own. Serializing whole turns against one
/// battle (load, resolve, update) is up to the caller.
pub trait BattleStore: Send + Sync {
    /// Store a new battle and return its id.
    ///
    /// Fails with `AlreadyExists` if the id is taken.
    fn create(&self, battle: Battle) -> StoreResult<BattleId>;

    /// Load a battle, or `None` if the id is unknown.
    fn load(&self, id: &BattleId) -> StoreResult<Option<Battle>>;

    /// Overwrite a stored battle.
    ///
    /// Fails with `NotFound` if the battle was never created.
    fn update(&self, battle: &Battle) -> StoreResult<()>;

    /// Remove a battle. Returns whether anything was removed.
    fn delete(&self, id: &BattleId) -> StoreResult<bool>;

    /// Every stored battle, oldest save first.
    fn list(&self) -> StoreResult<Vec<BattleRecord>>;

    /// Stored battles still in progress.
    fn list_active(&self) -> StoreResult<Vec<BattleRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.battle.is_ongoing())
            .collect())
    }

    /// Whether a battle is stored under `id`.
    fn exists(&self, id: &BattleId) -> StoreResult<bool> {
        Ok(self.load(id)?.is_some())
    }
}
