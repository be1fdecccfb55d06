//! Static game content: heroes, the card pool and encounter enemies.

use super::effects::VisualCue;
use super::types::{
    CardCategory, CardTemplate, Character, EffectKind, Enemy, EnemyIntent, HeroRole,
    StatusEffects,
};

/// Cards taken from the pool to build a hero's starter deck.
pub const STARTER_DECK_SIZE: usize = 6;

fn hero(
    id: &str,
    name: &str,
    role: HeroRole,
    max_hp: i32,
    intelligence: i32,
    skill: (&str, u32, &str),
) -> Character {
    let (skill_name, skill_cost, skill_description) = skill;
    Character {
        id: id.to_string(),
        name: name.to_string(),
        role,
        max_hp,
        current_hp: max_hp,
        defense: 0,
        intelligence,
        charm_threshold: 100,
        max_charm_threshold: 100,
        skill_name: skill_name.to_string(),
        skill_cost,
        skill_description: skill_description.to_string(),
        statuses: StatusEffects::default(),
    }
}

/// All playable heroes.
pub fn heroes() -> Vec<Character> {
    vec![
        hero(
            "kayla",
            "Kayla",
            HeroRole::Attacker,
            80,
            10,
            ("Fire at Will", 1, "Next Destruction card dmg +50% (Synergy: +75%)"),
        ),
        hero(
            "lina",
            "Lina",
            HeroRole::Charmer,
            70,
            15,
            ("Dream Tune", 2, "Boost next Charm card effect 150% + 25% Int"),
        ),
        hero(
            "ella",
            "Ella",
            HeroRole::Outsmart,
            65,
            25,
            ("Supercalc", 2, "Draw 2 cards. (Synergy: Draw 3)"),
        ),
        hero(
            "fiona",
            "Fiona",
            HeroRole::Defender,
            90,
            10,
            ("Barrier", 1, "Gain 10 Defense. (Synergy: +5)"),
        ),
    ]
}

pub fn find_hero(hero_id: &str) -> Option<Character> {
    heroes().into_iter().find(|h| h.id == hero_id)
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: &str,
    name: &str,
    cost: u32,
    category: CardCategory,
    description: &str,
    effect_id: &str,
    value: u32,
    owner_hero_id: Option<&str>,
) -> CardTemplate {
    CardTemplate {
        id: id.to_string(),
        name: name.to_string(),
        cost,
        category,
        description: description.to_string(),
        effect: EffectKind::from_effect_id(effect_id),
        value,
        owner_hero_id: owner_hero_id.map(str::to_string),
        visual: VisualCue::for_card(id, owner_hero_id, category),
    }
}

/// The full card pool, neutral cards first.
pub fn card_pool() -> Vec<CardTemplate> {
    use CardCategory::*;
    let k = Some("kayla");
    let l = Some("lina");
    let e = Some("ella");
    let f = Some("fiona");
    vec![
        card("n_shot", "Shoot", 1, Destruction, "Deal 5 damage.", "dmg", 5, None),
        card("n_heavy", "Heavy Hit", 2, Destruction, "Deal 12 damage.", "dmg", 12, None),
        card("n_def", "Defense", 1, Enhancement, "Gain 6 Defense.", "def", 6, None),
        card("n_focus", "Focus", 1, Enhancement, "Gain 3 Attack this turn.", "buff_atk", 3, None),
        card("n_plan", "Tactical Plan", 1, Resource, "Draw 2 cards.", "draw", 2, None),
        card("n_rush", "Rush", 0, Energy, "Gain 1 Energy next turn.", "energy", 1, None),
        card("n_cover", "Cover Fire", 1, Destruction, "Deal 3 dmg, Gain 3 Def.", "dmg_def", 3, None),
        card("k_beam", "Blast Beam", 2, Destruction, "Deal 16 Damage.", "dmg", 16, k),
        card("k_wep", "Overclock", 1, Enhancement, "Gain 5 Attack this turn.", "buff_atk", 5, k),
        card("k_disable", "Disable", 2, Destruction, "8 Dmg + Reduce Enemy Atk.", "dmg_debuff", 8, k),
        card("k_rage", "Battle Rage", 1, Resource, "Draw 1 per kill.", "draw_cond", 1, k),
        card("k_ult", "Full Auto", 3, Destruction, "Deal 4 damage 5 times.", "dmg_multi", 4, k),
        card("l_charm", "Phantom Proj", 2, Destruction, "Lower Charm Thresh by 20.", "charm_dmg", 20, l),
        card("l_whisper", "Whisper", 1, Destruction, "Lower Charm Thresh by 10.", "charm_dmg", 10, l),
        card("l_interrupt", "Mind Break", 2, Control, "Interrupt & Charm Dmg.", "interrupt", 10, l),
        card("l_dance", "Light Dance", 1, Resource, "Draw 1, Gain 4 Def.", "draw_def", 4, l),
        card("l_siren", "Siren Song", 3, Control, "Stun Enemy 1 turn.", "stun", 1, l),
        card("e_scan", "Scan", 1, Destruction, "Lower enemy Def by 5.", "shred", 5, e),
        card("e_calc", "Reverse Eng", 2, Control, "Remove Enemy Buffs.", "purge", 0, e),
        card("e_predict", "Prediction", 1, Resource, "See intent + Draw 1.", "peek_draw", 1, e),
        card("e_hack", "Sys Hack", 1, Control, "Enemy cards cost +1.", "cost_up", 1, e),
        card("e_opt", "Optimize", 0, Energy, "Gain 2 Energy.", "energy", 2, e),
        card("f_fort", "Fortress", 2, Enhancement, "Gain 15 Defense.", "def", 15, f),
        card("f_rep", "Nano Repair", 1, Enhancement, "Heal 5 HP.", "heal", 5, f),
        // Value is the percentage of defense converted to damage.
        card("f_bash", "Shield Bash", 2, Conversion, "Dmg = 50% of Def.", "slam", 50, f),
        card("f_reflect", "Pulse Reflect", 1, Enhancement, "Gain 6 Def. Reflect 8 dmg.", "reflect", 6, f),
        card("f_wall", "Bulwark", 3, Enhancement, "Double Defense.", "def_x2", 0, f),
    ]
}

pub fn find_card(card_id: &str) -> Option<CardTemplate> {
    card_pool().into_iter().find(|c| c.id == card_id)
}

/// Resolve a list of template ids to templates.
pub fn cards_by_ids(card_ids: &[String]) -> Result<Vec<CardTemplate>, String> {
    let pool = card_pool();
    card_ids
        .iter()
        .map(|id| {
            pool.iter()
                .find(|c| &c.id == id)
                .cloned()
                .ok_or_else(|| format!("Card {} does not exist in the card pool", id))
        })
        .collect()
}

/// First cards of the pool that are either neutral or owned by `hero_id`.
pub fn starter_deck(hero_id: &str) -> Vec<CardTemplate> {
    card_pool()
        .into_iter()
        .filter(|c| c.owner_hero_id.as_deref().map_or(true, |owner| owner == hero_id))
        .take(STARTER_DECK_SIZE)
        .collect()
}

/// Build the enemy for an encounter. Ids containing `boss` get the elite stats.
pub fn enemy_for_encounter(encounter_id: &str) -> Enemy {
    let is_boss = encounter_id.contains("boss");
    let (name, hp, attack, defense, intelligence) = if is_boss {
        ("Elite Guard", 300, 20, 30, 25)
    } else {
        ("Pirate Raider", 120, 10, 5, 15)
    };
    Enemy {
        id: encounter_id.to_string(),
        name: name.to_string(),
        max_hp: hp,
        current_hp: hp,
        attack,
        defense,
        intelligence,
        charm_threshold: 100,
        max_charm_threshold: 100,
        intent: EnemyIntent::Attack,
        next_move_value: attack,
        statuses: StatusEffects::default(),
    }
}
