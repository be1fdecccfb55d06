//! Pure battle rules: formation synergy, card cost and damage scaling.
//!
//! None of these functions touch the battle state; the Turn Engine feeds them
//! the relevant fields and applies the results.

use super::types::{BattleBuffs, CardCategory, Formation, StatusEffects};

/// Multiplier bonus applied against a target whose defense is broken.
pub const BROKEN_TARGET_BONUS: f64 = 0.5;

/// Whether the active formation boosts cards of `category` owned by `hero_id`.
///
/// Neutral cards (no owning hero) never synergize.
pub fn is_synergy_active(formation: Formation, hero_id: Option<&str>, category: CardCategory) -> bool {
    match (hero_id, formation) {
        (Some("kayla"), Formation::FrontBack) => category == CardCategory::Destruction,
        (Some("lina"), Formation::Spread) => category == CardCategory::Destruction,
        (Some("ella"), Formation::Spread) => true,
        (Some("fiona"), Formation::FrontBack) => true,
        _ => false,
    }
}

/// Effective mana cost of a card. Lina's Destruction and Control cards cost one
/// less while the team is spread out.
pub fn resolve_cost(
    base_cost: u32,
    hero_id: Option<&str>,
    category: CardCategory,
    formation: Formation,
) -> u32 {
    let discounted = hero_id == Some("lina")
        && formation == Formation::Spread
        && matches!(category, CardCategory::Destruction | CardCategory::Control);
    if discounted {
        base_cost.saturating_sub(1)
    } else {
        base_cost
    }
}

/// Final damage for a card value.
///
/// Only Destruction cards scale with the battle buffs: `next_destruction_buff`
/// adds to the multiplier and `temp_attack_buff` is added to the base. Clearing
/// the one-shot destruction buff is left to the caller.
pub fn resolve_damage(
    base_value: u32,
    category: CardCategory,
    buffs: &BattleBuffs,
    target: Option<&StatusEffects>,
) -> u32 {
    let mut multiplier = 1.0_f64;
    let mut additive = 0_u32;

    if category == CardCategory::Destruction {
        if buffs.next_destruction_buff > 0 {
            multiplier += f64::from(buffs.next_destruction_buff) / 100.0;
        }
        additive = buffs.temp_attack_buff;
    }
    if target.is_some_and(|t| t.is_broken) {
        multiplier += BROKEN_TARGET_BONUS;
    }

    ((f64::from(base_value) + f64::from(additive)) * multiplier).floor() as u32
}

/// Kayla's formation bonus, layered on top of an already resolved damage value.
pub fn apply_kayla_bonus(damage: u32) -> u32 {
    (f64::from(damage) * 1.25).floor() as u32
}

/// Apply a hit to a unit: defense soaks first, the excess reduces health.
///
/// Defense and health floor at 0. Returns the health actually lost.
pub fn absorb_damage(defense: &mut i32, current_hp: &mut i32, damage: u32) -> i32 {
    let mut remaining = i32::try_from(damage).unwrap_or(i32::MAX);
    if *defense > 0 {
        let soaked = remaining.min(*defense);
        *defense -= soaked;
        remaining -= soaked;
    }
    let before = *current_hp;
    *current_hp = (*current_hp - remaining).max(0);
    before - *current_hp
}
