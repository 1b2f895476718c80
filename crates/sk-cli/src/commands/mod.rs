pub mod delete;
pub mod list;
pub mod new;
pub mod play;
pub mod show;
pub mod turn;

use std::path::Path;

use colored::{ColoredString, Colorize};

use sk_core::{Archetype, Battle, BattleId, BattleStatus, Enemy, preset};
use sk_engine::{EngineConfig, RandomDecider};
use sk_store::{BattleStore, FileBattleStore};

/// Open the battle store under `dir`.
fn open_store(dir: &Path) -> Result<FileBattleStore, String> {
    FileBattleStore::new(dir).map_err(|e| format!("cannot open {}: {e}", dir.display()))
}

fn parse_id(id: &str) -> Result<BattleId, String> {
    BattleId::parse(id).ok_or_else(|| format!("invalid battle id: \"{id}\""))
}

/// Load a battle by its textual id.
fn load_battle(store: &impl BattleStore, id: &str) -> Result<Battle, String> {
    let id = parse_id(id)?;
    store
        .load(&id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("battle not found: {id}"))
}

/// Build an ongoing battle from a hero name and enemy archetype names.
fn build_battle(player: &str, archetypes: &[String]) -> Result<Battle, String> {
    let enemies = if archetypes.is_empty() {
        vec![preset::enemy()]
    } else {
        archetypes
            .iter()
            .map(|name| preset::enemy_by_archetype(name))
            .collect::<Result<Vec<Enemy>, _>>()
            .map_err(|e| {
                format!(
                    "{e} (expected one of: {})",
                    Archetype::builtin_names().join(", ")
                )
            })?
    };
    Ok(Battle::new(preset::player(player), enemies))
}

fn decider(seed: Option<u64>) -> RandomDecider {
    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    RandomDecider::from_config(&config)
}

fn status_label(status: BattleStatus) -> ColoredString {
    let text = status.to_string();
    match status {
        BattleStatus::Ongoing => text.yellow(),
        BattleStatus::Victory => text.green().bold(),
        BattleStatus::Defeat => text.red().bold(),
        BattleStatus::NotStarted => text.dimmed(),
    }
}

fn print_log(lines: &[String]) {
    for line in lines {
        println!("  {line}");
    }
}

/// Print both sides' health, marking the enemy currently targeted.
fn print_combatants(battle: &Battle) {
    println!("  {} {}", "Player:".bold(), battle.player);
    if battle.enemies.is_empty() {
        println!("  {} none left", "Enemies:".bold());
    }
    let target = battle.target_index();
    for (i, enemy) in battle.enemies.iter().enumerate() {
        let marker = if Some(i) == target { " <" } else { "" };
        println!(
            "  {} {} [{}]{marker}",
            format!("Enemy {}:", i + 1).bold(),
            enemy.combatant,
            enemy.archetype.name.dimmed()
        );
    }
}
