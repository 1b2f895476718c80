use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use sk_store::BattleStore;

pub fn run(dir: &Path, active: bool) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let records = if active {
        store.list_active()
    } else {
        store.list()
    }
    .map_err(|e| e.to_string())?;

    if records.is_empty() {
        println!("  No battles found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Player", "Enemies", "Status", "Saved"]);

    for record in &records {
        let battle = &record.battle;
        let enemies = if battle.enemies.is_empty() {
            "-".to_string()
        } else {
            battle
                .enemies
                .iter()
                .map(|e| format!("{} ({})", e.name(), e.combatant.health))
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            battle.id.to_string(),
            format!("{} ({})", battle.player.name, battle.player.health),
            enemies,
            battle.status.to_string(),
            record.saved_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} battles", records.len());

    Ok(())
}
