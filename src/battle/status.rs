//! Derived status flags.
//!
//! Status flags are a projection of the numeric fields of a combatant. They are
//! recomputed after every mutation instead of being toggled by effects.

use super::types::{BattleState, Character, Enemy, StatusEffects};

/// Turns of confusion applied when the charm threshold first hits 0.
pub const CONFUSION_TURNS: u32 = 2;

/// A combatant whose statuses can be derived from its numbers.
pub trait Combatant {
    /// `None` for units without an attack stat; those are never disarmed.
    fn attack(&self) -> Option<i32>;
    fn defense(&self) -> i32;
    fn charm_threshold(&self) -> i32;
    fn statuses_mut(&mut self) -> &mut StatusEffects;
}

impl Combatant for Character {
    fn attack(&self) -> Option<i32> {
        None
    }
    fn defense(&self) -> i32 {
        self.defense
    }
    fn charm_threshold(&self) -> i32 {
        self.charm_threshold
    }
    fn statuses_mut(&mut self) -> &mut StatusEffects {
        &mut self.statuses
    }
}

impl Combatant for Enemy {
    fn attack(&self) -> Option<i32> {
        Some(self.attack)
    }
    fn defense(&self) -> i32 {
        self.defense
    }
    fn charm_threshold(&self) -> i32 {
        self.charm_threshold
    }
    fn statuses_mut(&mut self) -> &mut StatusEffects {
        &mut self.statuses
    }
}

/// Recompute `entity`'s statuses in place.
pub fn derive_statuses<C: Combatant + ?Sized>(entity: &mut C) {
    let is_disarmed = entity.attack().is_some_and(|a| a <= 0);
    let is_broken = entity.defense() <= 0;
    let charmed_out = entity.charm_threshold() <= 0;

    let statuses = entity.statuses_mut();
    statuses.is_disarmed = is_disarmed;
    statuses.is_broken = is_broken;
    if charmed_out && statuses.confused_duration == 0 {
        statuses.confused_duration = CONFUSION_TURNS;
    }
}

/// One turn passes for `entity`'s confusion.
pub fn tick_confusion<C: Combatant + ?Sized>(entity: &mut C) {
    let statuses = entity.statuses_mut();
    statuses.confused_duration = statuses.confused_duration.saturating_sub(1);
}

/// Derive statuses for every combatant in the battle.
pub fn derive_all(state: &mut BattleState) {
    for character in state.characters.iter_mut() {
        derive_statuses(character);
    }
    for enemy in state.enemies.iter_mut() {
        derive_statuses(enemy);
    }
}

/// Tick confusion for every combatant in the battle.
pub fn tick_all(state: &mut BattleState) {
    for character in state.characters.iter_mut() {
        tick_confusion(character);
    }
    for enemy in state.enemies.iter_mut() {
        tick_confusion(enemy);
    }
}
