//! The player's session: RNG, the battle in progress and the results so far.

use rand_pcg::Lcg64Xsh32;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::content::{cards_by_ids, enemy_for_encounter, find_hero, starter_deck};
use super::engine::{ActionOutcome, BattleEngine, BattleView};
use super::types::{BattleResult, CardTemplate, DamageStat};
use crate::config::BattleRules;
use crate::player_seed::{restore_rng, rng_from_seed, snapshot_rng};

/// Summary of a finished battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleReport {
    pub encounter_id: String,
    pub result: BattleResult,
    pub turns: u32,
    pub damage_stats: Vec<DamageStat>,
}

/// Public view of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct SessionSummary {
    pub seed: u64,
    pub in_battle: bool,
    pub last_result: Option<BattleResult>,
    pub battle_results: Vec<BattleResult>,
    pub defeated_encounters: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    seed: u64,
    rng: Lcg64Xsh32,
    rules: BattleRules,
    current_battle: Option<BattleEngine>,
    last_report: Option<BattleReport>,
    battle_results: Vec<BattleResult>,
    defeated_encounters: Vec<String>,
}

impl GameSession {
    pub fn new(rules: BattleRules, seed: u64) -> Self {
        GameSession {
            seed,
            rng: rng_from_seed(seed),
            rules,
            current_battle: None,
            last_report: None,
            battle_results: Vec::new(),
            defeated_encounters: Vec::new(),
        }
    }

    /// Reseed the RNG. Affects every shuffle and enemy choice from now on.
    pub fn set_seed(&mut self, seed: u64) {
        log::info!("session reseeded with {}", seed);
        self.seed = seed;
        self.rng = rng_from_seed(seed);
    }

    pub fn rng_snapshot(&self) -> Result<String, String> {
        snapshot_rng(&self.rng)
    }

    pub fn restore_rng(&mut self, snapshot: &str) -> Result<(), String> {
        self.rng = restore_rng(snapshot)?;
        Ok(())
    }

    pub fn battle(&self) -> Option<&BattleEngine> {
        self.current_battle.as_ref()
    }

    pub fn last_report(&self) -> Option<&BattleReport> {
        self.last_report.as_ref()
    }

    pub fn defeated_encounters(&self) -> &[String] {
        &self.defeated_encounters
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            in_battle: self.current_battle.is_some(),
            last_result: self.last_report.as_ref().map(|r| r.result),
            battle_results: self.battle_results.clone(),
            defeated_encounters: self.defeated_encounters.clone(),
        }
    }

    fn resolve_deck(&self, hero_id: &str, card_ids: Option<&[String]>) -> Result<Vec<CardTemplate>, String> {
        match card_ids {
            None => Ok(starter_deck(hero_id)),
            Some(ids) => {
                if ids.len() > self.rules.max_deck_size {
                    return Err(format!(
                        "Deck for {} has {} cards, the limit is {}",
                        hero_id,
                        ids.len(),
                        self.rules.max_deck_size
                    ));
                }
                let cards = cards_by_ids(ids)?;
                if let Some(foreign) = cards
                    .iter()
                    .find(|c| c.owner_hero_id.as_deref().is_some_and(|owner| owner != hero_id))
                {
                    return Err(format!(
                        "Card {} belongs to another hero and cannot be in the deck of {}",
                        foreign.id, hero_id
                    ));
                }
                Ok(cards)
            }
        }
    }

    /// Start an encounter against `encounter_id` with `front_id` in front and
    /// `back_id` behind. Decks default to each hero's starter deck.
    pub fn start_battle(
        &mut self,
        front_id: &str,
        back_id: &str,
        front_deck: Option<&[String]>,
        back_deck: Option<&[String]>,
        encounter_id: &str,
    ) -> Result<BattleView, String> {
        if self.current_battle.is_some() {
            return Err("A battle is already in progress".to_string());
        }
        if front_id == back_id {
            return Err(format!("Hero {} cannot fight alongside itself", front_id));
        }
        let front = find_hero(front_id).ok_or_else(|| format!("Hero {} does not exist", front_id))?;
        let back = find_hero(back_id).ok_or_else(|| format!("Hero {} does not exist", back_id))?;
        let front_cards = self.resolve_deck(front_id, front_deck)?;
        let back_cards = self.resolve_deck(back_id, back_deck)?;

        let engine = BattleEngine::new(
            front,
            back,
            front_cards,
            back_cards,
            enemy_for_encounter(encounter_id),
            self.rules.clone(),
            &mut self.rng,
        );
        let view = engine.view();
        self.current_battle = Some(engine);
        Ok(view)
    }

    fn active_battle(&mut self) -> Result<&mut BattleEngine, String> {
        self.current_battle
            .as_mut()
            .ok_or_else(|| "No active battle".to_string())
    }

    pub fn play_card(&mut self, instance_id: usize) -> Result<ActionOutcome, String> {
        let engine = self
            .current_battle
            .as_mut()
            .ok_or_else(|| "No active battle".to_string())?;
        if engine.state().hand_position(instance_id).is_none() {
            return Err(format!("Card {} is not in hand", instance_id));
        }
        let outcome = engine.play_card(instance_id, &mut self.rng)?;
        self.settle();
        Ok(outcome)
    }

    pub fn use_hero_skill(&mut self, hero_id: &str) -> Result<ActionOutcome, String> {
        let engine = self
            .current_battle
            .as_mut()
            .ok_or_else(|| "No active battle".to_string())?;
        if engine.state().hero_index(hero_id).is_none() {
            return Err(format!("Hero {} is not in this battle", hero_id));
        }
        let outcome = engine.use_hero_skill(hero_id, &mut self.rng)?;
        self.settle();
        Ok(outcome)
    }

    pub fn end_turn(&mut self) -> Result<ActionOutcome, String> {
        let engine = self
            .current_battle
            .as_mut()
            .ok_or_else(|| "No active battle".to_string())?;
        let outcome = engine.end_turn(&mut self.rng)?;
        self.settle();
        Ok(outcome)
    }

    pub fn toggle_formation(&mut self) -> Result<ActionOutcome, String> {
        let outcome = self.active_battle()?.toggle_formation()?;
        Ok(outcome)
    }

    pub fn exit_battle(&mut self) -> Result<ActionOutcome, String> {
        let outcome = self.active_battle()?.exit_battle();
        self.settle();
        Ok(outcome)
    }

    /// Retire the current battle once it reached a terminal phase and record its result.
    fn settle(&mut self) {
        let Some(result) = self.current_battle.as_ref().and_then(BattleEngine::result) else {
            return;
        };
        let Some(engine) = self.current_battle.take() else {
            return;
        };
        let state = engine.state();
        let encounter_id = state
            .enemy()
            .map(|e| e.id.clone())
            .unwrap_or_default();

        match result {
            BattleResult::Victory => self.defeated_encounters.push(encounter_id.clone()),
            BattleResult::Defeat => self.defeated_encounters.clear(),
            BattleResult::Surrender => {}
        }
        log::info!(
            "encounter {} finished: {:?} ({} defeated so far)",
            encounter_id,
            result,
            self.defeated_encounters.len()
        );
        self.battle_results.push(result);
        self.last_report = Some(BattleReport {
            encounter_id,
            result,
            turns: state.turn,
            damage_stats: state.damage_stats.to_vec(),
        });
    }
}
