//! The enemy's side of a turn and the end-of-turn bookkeeping.

use rand::Rng;

use super::rules::absorb_damage;
use super::types::BattleState;
use crate::config::BattleRules;

/// Let the first enemy act. Returns the log line, or `None` when there is no
/// living enemy to act.
///
/// The enemy hits one uniformly chosen character for its `attack` value; that
/// character's defense soaks the hit first. `intent` is informational only.
pub fn resolve_enemy_action<R: Rng + ?Sized>(state: &mut BattleState, rng: &mut R) -> Option<String> {
    let enemy = state.enemies.first()?;
    if enemy.current_hp <= 0 {
        return None;
    }
    let enemy_name = enemy.name.clone();
    let intent = enemy.intent;
    let damage = u32::try_from(enemy.attack).unwrap_or(0);

    let target_idx = rng.gen_range(0..state.characters.len());
    let target = &mut state.characters[target_idx];
    let lost = absorb_damage(&mut target.defense, &mut target.current_hp, damage);
    log::debug!(
        "{} ({:?}) hit {} for {} ({} through defense)",
        enemy_name,
        intent,
        target.id,
        damage,
        lost
    );
    Some(format!("{} hits {} for {}!", enemy_name, target.name, damage))
}

/// Expire turn-scoped buffs, grow and refill mana, and advance the turn counter.
pub fn advance_turn(state: &mut BattleState, rules: &BattleRules) {
    state.buffs.temp_attack_buff = 0;
    state.max_mana = (state.max_mana + 1).min(rules.max_mana_cap);
    state.mana = state.max_mana;
    state.turn += 1;
}
