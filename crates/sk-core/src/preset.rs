//! Named combatant templates.
//!
//! The stats here are the defaults a new battle is populated with when the
//! caller does not supply its own combatants.

use crate::archetype::Archetype;
use crate::combatant::{Combatant, Enemy};
use crate::error::CoreResult;

/// A player with 100 health, 20 power and 10 defense.
pub fn player(name: impl Into<String>) -> Combatant {
    Combatant::new(name, 100, 20, 10)
}

/// The base enemy: 100 health, 20 power, 10 defense, uniform actions.
pub fn enemy() -> Enemy {
    Enemy::new(Combatant::new("Enemy", 100, 20, 10), Archetype::enemy())
}

/// A goblin: 80 health, 20 power, 5 defense.
pub fn goblin() -> Enemy {
    Enemy::new(Combatant::new("Goblin", 80, 20, 5), Archetype::goblin())
}

/// Build the preset enemy for a built-in archetype name.
pub fn enemy_by_archetype(name: &str) -> CoreResult<Enemy> {
    match Archetype::by_name(name)?.name.as_str() {
        "Goblin" => Ok(goblin()),
        _ => Ok(enemy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    #[test]
    fn player_defaults() {
        let p = player("Lucas");
        assert_eq!(p.name, "Lucas");
        assert_eq!((p.health, p.power, p.defense), (100, 20, 10));
        assert_eq!(p.dodge_chance, 0.5);
    }

    #[test]
    fn goblin_stats() {
        let g = goblin();
        assert_eq!(g.name(), "Goblin");
        assert_eq!(g.combatant.health, 80);
        assert_eq!(g.combatant.defense, 5);
        assert_eq!(g.archetype.weights.weight(Action::Spell), 0.0);
    }

    #[test]
    fn by_archetype() {
        assert_eq!(enemy_by_archetype("goblin").unwrap(), goblin());
        assert_eq!(enemy_by_archetype("Enemy").unwrap(), enemy());
        assert!(enemy_by_archetype("lich").is_err());
    }
}
