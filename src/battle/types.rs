use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::effects::VisualCue;
use super::battle_log::BattleLog;

/// Card category; drives cost reduction, synergy and damage scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum CardCategory {
    Destruction,
    Enhancement,
    Energy,
    Resource,
    Conversion,
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum Formation {
    FrontBack,
    Spread,
}

impl Formation {
    pub fn toggled(self) -> Self {
        match self {
            Formation::FrontBack => Formation::Spread,
            Formation::Spread => Formation::FrontBack,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Formation::FrontBack => "Front-Back",
            Formation::Spread => "Spread",
        }
    }
}

/// Each role carries exactly one hero skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum HeroRole {
    Attacker,
    Charmer,
    Outsmart,
    Defender,
}

/// What a card does when played. Resolved once from the authored effect id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", tag = "effect_type")]
pub enum EffectKind {
    Damage,
    Defense,
    AttackBuff,
    Draw,
    /// Consumed and paid for, but changes nothing.
    Inert { effect_id: String },
}

impl EffectKind {
    pub fn from_effect_id(effect_id: &str) -> Self {
        if effect_id.contains("dmg") {
            EffectKind::Damage
        } else {
            match effect_id {
                "def" => EffectKind::Defense,
                "buff_atk" => EffectKind::AttackBuff,
                "draw" => EffectKind::Draw,
                other => EffectKind::Inert {
                    effect_id: other.to_string(),
                },
            }
        }
    }
}

/// Immutable card template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct CardTemplate {
    pub id: String,
    pub name: String,
    pub cost: u32,
    pub category: CardCategory,
    pub description: String,
    pub effect: EffectKind,
    pub value: u32,
    pub owner_hero_id: Option<String>,
    pub visual: VisualCue,
}

/// A copy of a template inside a battle; `instance_id` is unique per battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct CardInstance {
    pub instance_id: usize,
    pub card: CardTemplate,
}

/// Derived flags; always recomputed, never set by gameplay effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct StatusEffects {
    pub is_disarmed: bool,
    pub is_broken: bool,
    pub confused_duration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub role: HeroRole,
    pub max_hp: i32,
    pub current_hp: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub charm_threshold: i32,
    pub max_charm_threshold: i32,
    pub skill_name: String,
    pub skill_cost: u32,
    pub skill_description: String,
    pub statuses: StatusEffects,
}

impl Character {
    pub fn is_down(&self) -> bool {
        self.current_hp <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum EnemyIntent {
    Attack,
    Buff,
    Debuff,
    Charge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub max_hp: i32,
    pub current_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub charm_threshold: i32,
    pub max_charm_threshold: i32,
    pub intent: EnemyIntent,
    pub next_move_value: i32,
    pub statuses: StatusEffects,
}

/// Battle-wide buff accumulators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleBuffs {
    /// Percent; consumed by the next damage card.
    pub next_destruction_buff: u32,
    /// Percent.
    pub next_charm_buff: u32,
    /// Flat bonus; expires at end of turn.
    pub temp_attack_buff: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum BattleResult {
    Victory,
    Defeat,
    Surrender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", tag = "phase")]
pub enum BattlePhase {
    AwaitingAction,
    Terminal { result: BattleResult },
}

/// Damage dealt per hero over the whole battle, aligned with `BattleState::characters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct DamageStat {
    pub hero_id: String,
    pub damage: u32,
}

/// Aggregate root of one encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleState {
    pub turn: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub formation: Formation,
    /// Front, back.
    pub characters: [Character; 2],
    pub enemies: Vec<Enemy>,
    pub hand: Vec<CardInstance>,
    pub deck: Vec<CardInstance>,
    pub discard: Vec<CardInstance>,
    pub log: BattleLog,
    pub buffs: BattleBuffs,
    pub damage_stats: [DamageStat; 2],
}

impl BattleState {
    pub fn hero_index(&self, hero_id: &str) -> Option<usize> {
        self.characters.iter().position(|c| c.id == hero_id)
    }

    pub fn hand_position(&self, instance_id: usize) -> Option<usize> {
        self.hand.iter().position(|c| c.instance_id == instance_id)
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemies.first()
    }
}
