//! The resolution table.
//!
//! Two actions form an unordered pair, which selects one of ten
//! [`Matchup`]s. Each handler works out which side did what, mutates
//! health, and reports any priority award along with its log lines.

pub mod damage;

use sk_core::{Action, Combatant, Side};

use crate::decider::Decider;
use damage::{modified_damage, raw_damage, strike};

/// The unordered pair of actions taken in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matchup {
    /// Both sides attack.
    AttackAttack,
    /// One attacks, the other defends.
    AttackDefend,
    /// One attacks, the other dodges.
    AttackDodge,
    /// One attacks, the other casts.
    AttackSpell,
    /// Both defend.
    DefendDefend,
    /// One defends, the other dodges.
    DefendDodge,
    /// One defends, the other casts.
    DefendSpell,
    /// Both dodge.
    DodgeDodge,
    /// One dodges, the other casts.
    DodgeSpell,
    /// Both cast.
    SpellSpell,
}

impl Matchup {
    /// Classify a pair of actions; argument order does not matter.
    pub fn of(a: Action, b: Action) -> Self {
        use Action::*;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match (lo, hi) {
            (Attack, Attack) => Self::AttackAttack,
            (Attack, Defend) => Self::AttackDefend,
            (Attack, Dodge) => Self::AttackDodge,
            (Attack, Spell) => Self::AttackSpell,
            (Defend, Defend) => Self::DefendDefend,
            (Defend, Dodge) => Self::DefendDodge,
            (Defend, Spell) => Self::DefendSpell,
            (Dodge, Dodge) => Self::DodgeDodge,
            (Dodge, Spell) => Self::DodgeSpell,
            (Spell, Spell) => Self::SpellSpell,
            _ => unreachable!("pair is ordered"),
        }
    }
}

/// One side of the exchange, in mover order.
#[derive(Debug)]
pub struct Actor<'a> {
    /// Which side this combatant fights for.
    pub side: Side,
    /// The combatant, borrowed mutably for the turn.
    pub combatant: &'a mut Combatant,
    /// What it does this turn.
    pub action: Action,
}

impl<'a> Actor<'a> {
    /// Bundle a side, combatant and action.
    pub fn new(side: Side, combatant: &'a mut Combatant, action: Action) -> Self {
        Self {
            side,
            combatant,
            action,
        }
    }

    fn name(&self) -> &str {
        &self.combatant.name
    }
}

/// What a resolved exchange produced besides health changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The side awarded priority for the next turn, if any.
    pub priority: Option<Side>,
    /// Effect lines, in the order they happened.
    pub lines: Vec<String>,
}

impl Resolution {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn award(&mut self, recipient: &Actor<'_>) {
        self.priority = Some(recipient.side);
        self.line(format!("{} is poised to act.", recipient.name()));
    }
}

/// Resolve one exchange. `first` moved first this turn.
///
/// Health is mutated in place; the returned [`Resolution`] carries the
/// priority award and log lines.
pub fn resolve<'a>(
    mut first: Actor<'a>,
    mut second: Actor<'a>,
    decider: &mut dyn Decider,
    defend_modifier: f64,
) -> Resolution {
    let mut out = Resolution::default();

    match Matchup::of(first.action, second.action) {
        Matchup::AttackAttack => {
            // The second strike is skipped if the first one killed.
            let damage = raw_damage(first.combatant, second.combatant);
            out.lines
                .extend(strike(first.combatant, second.combatant, damage));
            let damage = raw_damage(second.combatant, first.combatant);
            out.lines
                .extend(strike(second.combatant, first.combatant, damage));
        }
        Matchup::AttackDefend => {
            let (attacker, defender) = roles(&mut first, &mut second, Action::Attack);
            out.line(format!("{} readies their shield.", defender.name()));
            let damage = modified_damage(
                raw_damage(attacker.combatant, defender.combatant),
                defend_modifier,
            );
            out.lines
                .extend(strike(attacker.combatant, defender.combatant, damage));
        }
        Matchup::AttackDodge => {
            let (attacker, dodger) = roles(&mut first, &mut second, Action::Attack);
            if decider.attempt_dodge(dodger.combatant) {
                out.line(format!(
                    "{} dodges {}'s attack!",
                    dodger.name(),
                    attacker.name()
                ));
                out.award(dodger);
            } else {
                out.line(format!(
                    "{} fails to dodge {}'s attack.",
                    dodger.name(),
                    attacker.name()
                ));
                let damage = raw_damage(attacker.combatant, dodger.combatant);
                out.lines
                    .extend(strike(attacker.combatant, dodger.combatant, damage));
            }
        }
        Matchup::AttackSpell => {
            let (attacker, caster) = roles(&mut first, &mut second, Action::Attack);
            let damage = raw_damage(attacker.combatant, caster.combatant);
            out.lines
                .extend(strike(attacker.combatant, caster.combatant, damage));
            out.line(format!("{}'s spell fizzles.", caster.name()));
        }
        Matchup::DefendDefend => {
            out.line("Nothing happens...");
        }
        Matchup::DefendDodge => {
            let (defender, dodger) = roles(&mut first, &mut second, Action::Defend);
            out.line(format!(
                "{} is unfazed by {}'s movement.",
                defender.name(),
                dodger.name()
            ));
            out.award(defender);
        }
        Matchup::DefendSpell => {
            let (defender, _caster) = roles(&mut first, &mut second, Action::Defend);
            out.line(format!("{} prepares for a magic attack.", defender.name()));
        }
        Matchup::DodgeDodge => {
            out.line("Both combatants attempt to reposition.");
            let first_ok = decider.attempt_dodge(first.combatant);
            let second_ok = decider.attempt_dodge(second.combatant);
            if first_ok == second_ok {
                out.line("Neither manages to gain the advantage.");
            } else {
                let winner = if first_ok { &first } else { &second };
                out.line(format!("{} finds better footing!", winner.name()));
                out.award(winner);
            }
        }
        Matchup::DodgeSpell => {
            let (dodger, caster) = roles(&mut first, &mut second, Action::Dodge);
            out.line(format!(
                "{} watches {}'s movements closely.",
                caster.name(),
                dodger.name()
            ));
        }
        Matchup::SpellSpell => {
            out.line(format!(
                "{} and {} trade arcane gestures, but nothing happens.",
                first.name(),
                second.name()
            ));
        }
    }

    out
}

/// Split the pair into (the actor who took `action`, the other one).
fn roles<'r, 'a>(
    first: &'r mut Actor<'a>,
    second: &'r mut Actor<'a>,
    action: Action,
) -> (&'r mut Actor<'a>, &'r mut Actor<'a>) {
    if first.action == action {
        (first, second)
    } else {
        (second, first)
    }
}
