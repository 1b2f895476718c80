use std::path::Path;

use sk_core::Action;
use sk_engine::TurnSession;
use sk_store::BattleStore;

pub fn run(dir: &Path, id: &str, action: &str, seed: Option<u64>) -> Result<(), String> {
    let action = Action::parse(action).map_err(|e| e.to_string())?;
    let store = super::open_store(dir)?;
    let mut battle = super::load_battle(&store, id)?;
    let seen = battle.log.len();

    let mut session =
        TurnSession::new(&mut battle, super::decider(seed)).map_err(|e| e.to_string())?;
    session.perform_turn(action);

    store.update(&battle).map_err(|e| e.to_string())?;

    super::print_log(&battle.log.lines()[seen..]);
    println!();
    println!("  status: {}", super::status_label(battle.status));
    Ok(())
}
