//! Tunable battle constants.
//!
//! Read from Rocket's figment under the `battle` key, so `Rocket.toml`
//! (`[default.battle]`) or `ROCKET_BATTLE={...}` can override any field.

use rocket_okapi::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BattleRules {
    pub starting_mana: u32,
    pub max_mana_cap: u32,
    /// Cards dealt when the encounter starts.
    pub opening_hand: usize,
    /// Cards drawn at the end of every turn.
    pub turn_draw: usize,
    pub log_capacity: usize,
    pub max_deck_size: usize,
    /// End the battle as a defeat once every character is at 0 HP.
    pub auto_defeat: bool,
    /// Let card damage profit from the +50% bonus against defense-broken targets.
    pub broken_bonus_on_cards: bool,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            starting_mana: 3,
            max_mana_cap: 10,
            opening_hand: 4,
            turn_draw: 5,
            log_capacity: 8,
            max_deck_size: 30,
            auto_defeat: true,
            broken_bonus_on_cards: false,
        }
    }
}

impl BattleRules {
    /// Extract the rules from a Rocket figment, falling back to the defaults
    /// when the `battle` section is missing or malformed.
    pub fn from_figment(figment: &rocket::figment::Figment) -> Self {
        match figment.extract_inner::<BattleRules>("battle") {
            Ok(rules) => rules,
            Err(e) => {
                log::debug!("no usable [battle] config ({e}), using defaults");
                BattleRules::default()
            }
        }
    }
}
