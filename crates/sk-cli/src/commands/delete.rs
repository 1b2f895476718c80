use std::path::Path;

use sk_store::BattleStore;

pub fn run(dir: &Path, id: &str) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let id = super::parse_id(id)?;
    if !store.delete(&id).map_err(|e| e.to_string())? {
        return Err(format!("battle not found: {id}"));
    }
    println!("  Deleted {id}");
    Ok(())
}
