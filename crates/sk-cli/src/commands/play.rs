use std::io::{self, BufRead, Write};

use colored::Colorize;

use sk_core::Action;
use sk_engine::TurnSession;

pub fn run(player: &str, enemies: &[String], seed: Option<u64>) -> Result<(), String> {
    let mut battle = super::build_battle(player, enemies)?;
    let mut session =
        TurnSession::new(&mut battle, super::decider(seed)).map_err(|e| e.to_string())?;

    println!("  {} a new battle", "Starting".bold());
    super::print_combatants(session.battle());
    println!("  Actions: attack, defend, dodge, spell. Type 'quit' to leave.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_finished() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let action = match Action::parse(input) {
            Ok(action) => action,
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
                continue;
            }
        };

        let seen = session.battle().log.len();
        session.perform_turn(action);
        super::print_log(&session.battle().log.lines()[seen..]);
        println!();
        super::print_combatants(session.battle());
        println!();
    }

    println!("  status: {}", super::status_label(battle.status));
    Ok(())
}
