use std::fs;
use std::path::Path;

use colored::Colorize;

use sk_core::{Battle, BattleStatus};
use sk_store::BattleStore;

pub fn run(dir: &Path, player: &str, enemies: &[String]) -> Result<(), String> {
    let battle = super::build_battle(player, enemies)?;
    save(dir, battle)
}

/// Create a battle from a caller-supplied JSON document.
///
/// The document needs at least `player` and `enemies`. A missing id is
/// generated, and a battle without a status is started.
pub fn run_from_file(dir: &Path, file: &Path) -> Result<(), String> {
    let path = file.display();
    let text = fs::read_to_string(file).map_err(|e| format!("cannot read {path}: {e}"))?;
    let mut battle: Battle =
        serde_json::from_str(&text).map_err(|e| format!("invalid battle document {path}: {e}"))?;

    if battle.enemies.is_empty() {
        return Err("a battle needs at least one enemy".into());
    }
    if battle.status == BattleStatus::NotStarted {
        battle.start().map_err(|e| e.to_string())?;
    }
    save(dir, battle)
}

fn save(dir: &Path, battle: Battle) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let names: Vec<&str> = battle.enemies.iter().map(|e| e.name()).collect();
    let summary = format!("{} vs {}", battle.player.name, names.join(", "));

    let id = store.create(battle).map_err(|e| e.to_string())?;

    println!("{id}");
    eprintln!("  {} {summary}", "Created".green().bold());
    Ok(())
}
