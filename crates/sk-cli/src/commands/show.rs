use std::path::Path;

use colored::Colorize;

const LOG_TAIL: usize = 10;

pub fn run(dir: &Path, id: &str, full_log: bool) -> Result<(), String> {
    let store = super::open_store(dir)?;
    let battle = super::load_battle(&store, id)?;

    println!("  {} {}", "Battle".bold(), battle.id.to_string().dimmed());
    println!("  status:   {}", super::status_label(battle.status));
    println!("  priority: {}", battle.priority);
    if let Some(enemy) = battle.target() {
        println!("  target:   {}", enemy.name());
    }
    println!();
    super::print_combatants(&battle);

    if battle.log.is_empty() {
        return Ok(());
    }
    println!();
    let lines = if full_log {
        battle.log.lines()
    } else {
        battle.log.tail(LOG_TAIL)
    };
    if lines.len() < battle.log.len() {
        println!(
            "  {}",
            format!("... {} earlier lines", battle.log.len() - lines.len()).dimmed()
        );
    }
    super::print_log(lines);
    Ok(())
}
