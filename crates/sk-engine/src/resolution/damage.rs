//! Attack damage arithmetic.

use sk_core::Combatant;

/// Attack power minus target defense. Not floored: a negative value heals.
pub fn raw_damage(attacker: &Combatant, target: &Combatant) -> i64 {
    i64::from(attacker.power) - i64::from(target.defense)
}

/// Scale raw damage and round half up (so 4.5 becomes 5 and -2.5 becomes -2).
pub fn modified_damage(raw: i64, modifier: f64) -> i64 {
    (raw as f64 * modifier + 0.5).floor() as i64
}

/// Apply `damage` from `attacker` to `target`, returning the log line.
///
/// Does nothing if either side is already dead.
pub fn strike(attacker: &Combatant, target: &mut Combatant, damage: i64) -> Option<String> {
    if attacker.is_dead() || target.is_dead() {
        return None;
    }
    target.take_damage(damage);
    Some(format!(
        "{} hits {} for {} damage!",
        attacker.name, target.name, damage
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_damage_can_be_negative() {
        let weak = Combatant::new("Weak", 10, 5, 0);
        let wall = Combatant::new("Wall", 10, 0, 12);
        assert_eq!(raw_damage(&weak, &wall), -7);
        assert_eq!(raw_damage(&wall, &weak), 0);
    }

    #[test]
    fn halved_damage_rounds_half_up() {
        assert_eq!(modified_damage(10, 0.5), 5);
        assert_eq!(modified_damage(15, 0.5), 8);
        assert_eq!(modified_damage(1, 0.5), 1);
        assert_eq!(modified_damage(-5, 0.5), -2);
        assert_eq!(modified_damage(0, 0.5), 0);
    }

    #[test]
    fn strike_applies_and_reports() {
        let attacker = Combatant::new("Hero", 100, 20, 10);
        let mut target = Combatant::new("Rat", 15, 1, 5);
        let line = strike(&attacker, &mut target, 15).unwrap();
        assert_eq!(line, "Hero hits Rat for 15 damage!");
        assert!(target.is_dead());
    }

    #[test]
    fn strike_skips_the_dead() {
        let dead = Combatant::new("Corpse", 0, 50, 0);
        let mut target = Combatant::new("Rat", 15, 1, 5);
        assert!(strike(&dead, &mut target, 45).is_none());
        assert_eq!(target.health, 15);

        let attacker = Combatant::new("Hero", 100, 20, 10);
        let mut corpse = Combatant::new("Corpse", 0, 0, 0);
        assert!(strike(&attacker, &mut corpse, 20).is_none());
    }
}
