use std::fs;
use std::path::{Path, PathBuf};

use sk_core::{Battle, BattleId};

use crate::error::{StoreError, StoreResult};
use crate::record::{BattleRecord, sort_records};
use crate::traits::BattleStore;

/// Battles stored as one JSON document per file.
///
/// Each battle lives at `<dir>/<id>.json`. Writes go to a temp file first
/// and are renamed into place, so a reader never sees half a document.
#[derive(Debug, Clone)]
pub struct FileBattleStore {
    dir: PathBuf,
}

impl FileBattleStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory battles are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn battle_path(&self, id: &BattleId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    fn write(&self, battle: &Battle) -> StoreResult<()> {
        let path = self.battle_path(&battle.id);
        let temp_path = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&BattleRecord::new(battle.clone()))?;
        fs::write(&temp_path, bytes)?;
        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        tracing::debug!(battle = %battle.id, path = %path.display(), "saved battle");
        Ok(())
    }

    fn read(&self, path: &Path) -> StoreResult<BattleRecord> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl BattleStore for FileBattleStore {
    fn create(&self, battle: Battle) -> StoreResult<BattleId> {
        if self.battle_path(&battle.id).exists() {
            return Err(StoreError::AlreadyExists(battle.id));
        }
        self.write(&battle)?;
        Ok(battle.id)
    }

    fn load(&self, id: &BattleId) -> StoreResult<Option<Battle>> {
        let path = self.battle_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let record = self.read(&path)?;
        tracing::debug!(battle = %id, path = %path.display(), "loaded battle");
        Ok(Some(record.battle))
    }

    fn update(&self, battle: &Battle) -> StoreResult<()> {
        if !self.battle_path(&battle.id).exists() {
            return Err(StoreError::NotFound(battle.id));
        }
        self.write(battle)
    }

    fn delete(&self, id: &BattleId) -> StoreResult<bool> {
        let path = self.battle_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        tracing::debug!(battle = %id, "deleted battle");
        Ok(true)
    }

    fn list(&self) -> StoreResult<Vec<BattleRecord>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(stem) = filename.strip_suffix(".json")
                && BattleId::parse(stem).is_some()
            {
                records.push(self.read(&path)?);
            }
        }
        sort_records(&mut records);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_core::{BattleStatus, Priority, preset};
    use tempfile::TempDir;

    fn battle() -> Battle {
        Battle::new(preset::player("Hero"), vec![preset::goblin()])
    }

    fn store() -> (TempDir, FileBattleStore) {
        let dir = TempDir::new().unwrap();
        let store = FileBattleStore::new(dir.path().join("battles")).unwrap();
        (dir, store)
    }

    #[test]
    fn creates_missing_directory() {
        let (dir, store) = store();
        assert!(dir.path().join("battles").is_dir());
        assert_eq!(store.dir(), dir.path().join("battles"));
    }

    #[test]
    fn round_trips_through_disk() {
        let (_dir, store) = store();
        let mut b = battle();
        b.priority = Priority::Player;
        b.log.push("Hero uses DODGE!");
        let id = store.create(b.clone()).unwrap();
        assert_eq!(store.load(&id).unwrap(), Some(b));
    }

    #[test]
    fn one_json_file_per_battle() {
        let (_dir, store) = store();
        let id = store.create(battle()).unwrap();
        let path = store.dir().join(format!("{id}.json"));
        let text = fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(doc["saved_at"].is_string());
        assert_eq!(doc["battle"]["status"], "ONGOING");
        assert!(!store.dir().join(format!("{id}.json.tmp")).exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let (_dir, store) = store();
        let b = battle();
        // A directory in the way makes the rename fail.
        fs::create_dir(store.dir().join(format!("{}.json", b.id))).unwrap();
        assert!(matches!(store.write(&b), Err(StoreError::Io(_))));
        assert!(!store.dir().join(format!("{}.json.tmp", b.id)).exists());
    }

    #[test]
    fn create_twice_fails() {
        let (_dir, store) = store();
        let b = battle();
        store.create(b.clone()).unwrap();
        assert!(matches!(store.create(b), Err(StoreError::AlreadyExists(_))));
    }

    #[test]
    fn update_unknown_fails() {
        let (_dir, store) = store();
        assert!(matches!(
            store.update(&battle()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn update_overwrites() {
        let (_dir, store) = store();
        let mut b = battle();
        store.create(b.clone()).unwrap();
        b.status = BattleStatus::Defeat;
        store.update(&b).unwrap();
        assert_eq!(
            store.load(&b.id).unwrap().unwrap().status,
            BattleStatus::Defeat
        );
    }

    #[test]
    fn delete_and_list() {
        let (_dir, store) = store();
        let a = store.create(battle()).unwrap();
        let mut finished = battle();
        finished.status = BattleStatus::Victory;
        let b = store.create(finished).unwrap();
        fs::write(store.dir().join("notes.txt"), "ignored").unwrap();
        fs::write(store.dir().join("not-an-id.json"), "{}").unwrap();

        assert_eq!(store.list().unwrap().len(), 2);
        let active: Vec<_> = store
            .list_active()
            .unwrap()
            .iter()
            .map(|r| r.id())
            .collect();
        assert_eq!(active, vec![a]);

        assert!(store.delete(&b).unwrap());
        assert!(!store.delete(&b).unwrap());
        assert_eq!(store.load(&b).unwrap(), None);
    }

    #[test]
    fn corrupt_document_is_a_json_error() {
        let (_dir, store) = store();
        let id = BattleId::new();
        fs::write(store.dir().join(format!("{id}.json")), "{ not json").unwrap();
        assert!(matches!(store.load(&id), Err(StoreError::Json(_))));
    }
}
