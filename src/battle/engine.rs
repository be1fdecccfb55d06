//! The Turn Engine: applies one player action at a time to an exclusively owned
//! `BattleState`.
//!
//! Every action is synchronous. Randomness (shuffles, enemy targeting) comes from
//! the caller-supplied RNG so that a seeded RNG replays a battle exactly.

use rand::seq::SliceRandom;
use rand::Rng;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use super::draw::draw;
use super::effects::{card_effect_requests, EffectRequest, SoundCue, VisualCue};
use super::enemy::{advance_turn, resolve_enemy_action};
use super::battle_log::BattleLog;
use super::rules::{absorb_damage, apply_kayla_bonus, is_synergy_active, resolve_cost, resolve_damage};
use super::status::{derive_all, tick_all};
use super::types::{
    BattleBuffs, BattlePhase, BattleResult, BattleState, CardInstance, CardTemplate, Character,
    DamageStat, EffectKind, Enemy, Formation, HeroRole,
};
use crate::config::BattleRules;

/// Flat defense added to `def` cards owned by fiona while her synergy is active.
const FIONA_DEF_BONUS: u32 = 5;

/// What a single action produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct ActionOutcome {
    /// False when the action was refused (not enough mana); nothing but the log changed.
    pub accepted: bool,
    pub effects: Vec<EffectRequest>,
    pub phase: BattlePhase,
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct BattleView {
    pub phase: BattlePhase,
    pub state: BattleState,
}

#[derive(Debug, Clone)]
pub struct BattleEngine {
    state: BattleState,
    phase: BattlePhase,
    rules: BattleRules,
}

impl BattleEngine {
    /// Start an encounter: merge and shuffle both decks, then deal the opening hand.
    pub fn new<R: Rng + ?Sized>(
        front: Character,
        back: Character,
        front_deck: Vec<CardTemplate>,
        back_deck: Vec<CardTemplate>,
        enemy: Enemy,
        rules: BattleRules,
        rng: &mut R,
    ) -> Self {
        let mut deck: Vec<CardInstance> = front_deck
            .into_iter()
            .chain(back_deck)
            .enumerate()
            .map(|(instance_id, card)| CardInstance { instance_id, card })
            .collect();
        deck.shuffle(rng);

        let mut log = BattleLog::new(rules.log_capacity);
        log.push(format!("Encounter started: {}", enemy.name));
        log::info!(
            "battle started: {} + {} vs {} ({} cards)",
            front.id,
            back.id,
            enemy.id,
            deck.len()
        );

        let damage_stats = [
            DamageStat {
                hero_id: front.id.clone(),
                damage: 0,
            },
            DamageStat {
                hero_id: back.id.clone(),
                damage: 0,
            },
        ];
        let state = BattleState {
            turn: 1,
            mana: rules.starting_mana,
            max_mana: rules.starting_mana,
            formation: Formation::FrontBack,
            characters: [front, back],
            enemies: vec![enemy],
            hand: Vec::new(),
            deck,
            discard: Vec::new(),
            log,
            buffs: BattleBuffs::default(),
            damage_stats,
        };

        let mut engine = Self::from_state(state, rules);
        let opening_hand = engine.rules.opening_hand;
        draw(&mut engine.state, opening_hand, rng);
        engine
    }

    /// Resume from an existing state, e.g. a hand-built test position.
    pub fn from_state(mut state: BattleState, rules: BattleRules) -> Self {
        derive_all(&mut state);
        BattleEngine {
            state,
            phase: BattlePhase::AwaitingAction,
            rules,
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn result(&self) -> Option<BattleResult> {
        match self.phase {
            BattlePhase::Terminal { result } => Some(result),
            BattlePhase::AwaitingAction => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.result().is_some()
    }

    pub fn view(&self) -> BattleView {
        BattleView {
            phase: self.phase,
            state: self.state.clone(),
        }
    }

    fn ensure_active(&self) -> Result<(), String> {
        if self.is_terminal() {
            return Err("Battle is already over".to_string());
        }
        Ok(())
    }

    fn outcome(&self, accepted: bool, effects: Vec<EffectRequest>) -> ActionOutcome {
        ActionOutcome {
            accepted,
            effects,
            phase: self.phase,
        }
    }

    fn finish(&mut self, result: BattleResult) {
        log::info!("battle ended on turn {}: {:?}", self.state.turn, result);
        self.phase = BattlePhase::Terminal { result };
    }

    /// Play a card from the hand.
    ///
    /// # Panics
    ///
    /// If `instance_id` is not in the hand; callers must only offer cards they can see.
    pub fn play_card<R: Rng + ?Sized>(
        &mut self,
        instance_id: usize,
        rng: &mut R,
    ) -> Result<ActionOutcome, String> {
        self.ensure_active()?;
        let Some(hand_pos) = self.state.hand_position(instance_id) else {
            panic!("card instance {instance_id} is not in the hand");
        };

        let card = self.state.hand[hand_pos].card.clone();
        let owner = card.owner_hero_id.as_deref();
        let formation = self.state.formation;
        let cost = resolve_cost(card.cost, owner, card.category, formation);
        if self.state.mana < cost {
            log::debug!("refused {}: costs {}, have {}", card.id, cost, self.state.mana);
            self.state.log.push("Not enough energy!");
            return Ok(self.outcome(false, Vec::new()));
        }

        let effects = card_effect_requests(card.visual, owner, card.category);
        self.state.mana -= cost;
        let instance = self.state.hand.remove(hand_pos);
        self.state.discard.push(instance);

        let synergy = is_synergy_active(formation, owner, card.category);
        let mut line = format!("Played {}.", card.name);
        match &card.effect {
            EffectKind::Damage => {
                let dealt = self.deal_card_damage(&card, synergy);
                line.push_str(&format!(" Dealt {} damage.", dealt));
            }
            EffectKind::Defense => {
                let mut amount = card.value;
                if synergy && owner == Some("fiona") {
                    amount += FIONA_DEF_BONUS;
                }
                let share = amount.div_ceil(self.state.characters.len() as u32) as i32;
                for character in self.state.characters.iter_mut() {
                    character.defense += share;
                }
                line.push_str(&format!(" Team gained {} Defense.", amount));
            }
            EffectKind::AttackBuff => {
                self.state.buffs.temp_attack_buff += card.value;
                line.push_str(&format!(" Attack boosted by {}.", card.value));
            }
            EffectKind::Draw => {
                let mut amount = card.value as usize;
                if synergy && owner == Some("ella") {
                    amount += 1;
                }
                let drawn = draw(&mut self.state, amount, rng);
                line.push_str(&format!(" Drew {} cards.", drawn));
            }
            EffectKind::Inert { effect_id } => {
                log::debug!("{} has no rule for effect {}", card.id, effect_id);
            }
        }
        self.state.log.push(line);
        derive_all(&mut self.state);

        if self.state.enemy().is_some_and(|e| e.current_hp <= 0) {
            self.finish(BattleResult::Victory);
        }
        Ok(self.outcome(true, effects))
    }

    /// Resolve a damage card against the first enemy and return the damage dealt
    /// before defense absorption.
    fn deal_card_damage(&mut self, card: &CardTemplate, synergy: bool) -> u32 {
        let owner = card.owner_hero_id.as_deref();
        let target_statuses = if self.rules.broken_bonus_on_cards {
            self.state.enemy().map(|e| e.statuses)
        } else {
            None
        };
        let mut damage = resolve_damage(
            card.value,
            card.category,
            &self.state.buffs,
            target_statuses.as_ref(),
        );
        if synergy && owner == Some("kayla") {
            damage = apply_kayla_bonus(damage);
        }

        if let Some(enemy) = self.state.enemies.first_mut() {
            absorb_damage(&mut enemy.defense, &mut enemy.current_hp, damage);
        }
        self.state.buffs.next_destruction_buff = 0;
        self.credit_damage(owner, damage);
        damage
    }

    fn credit_damage(&mut self, owner: Option<&str>, damage: u32) {
        let stats = &mut self.state.damage_stats;
        match owner {
            Some(hero_id) => {
                if let Some(stat) = stats.iter_mut().find(|s| s.hero_id == hero_id) {
                    stat.damage += damage;
                }
            }
            None => {
                stats[0].damage += damage / 2;
                stats[1].damage += damage.div_ceil(2);
            }
        }
    }

    /// Use the skill of one of the two heroes in the battle.
    ///
    /// # Panics
    ///
    /// If `hero_id` is not one of the battle's characters.
    pub fn use_hero_skill<R: Rng + ?Sized>(
        &mut self,
        hero_id: &str,
        rng: &mut R,
    ) -> Result<ActionOutcome, String> {
        self.ensure_active()?;
        let Some(idx) = self.state.hero_index(hero_id) else {
            panic!("hero {hero_id} is not part of this battle");
        };
        let hero = self.state.characters[idx].clone();

        if self.state.mana < hero.skill_cost {
            self.state.log.push("Not enough energy for skill!");
            return Ok(self.outcome(false, Vec::new()));
        }
        self.state.mana -= hero.skill_cost;

        let formation = self.state.formation;
        let mut line = format!("{} used {}!", hero.name, hero.skill_name);
        let effects = match hero.role {
            HeroRole::Attacker => {
                let buff = if formation == Formation::FrontBack { 75 } else { 50 };
                self.state.buffs.next_destruction_buff = buff;
                line.push_str(&format!(" Destruction +{}%.", buff));
                vec![
                    EffectRequest::Visual(VisualCue::Beam),
                    EffectRequest::Sound(SoundCue::KaylaShot),
                ]
            }
            HeroRole::Charmer => {
                let intelligence = u32::try_from(hero.intelligence).unwrap_or(0);
                self.state.buffs.next_charm_buff = 50 + intelligence * 5 / 2;
                line.push_str(" Charm boosted.");
                vec![EffectRequest::Sound(SoundCue::LinaCharm)]
            }
            HeroRole::Defender => {
                let shield = if formation == Formation::FrontBack { 15 } else { 10 };
                self.state.characters[idx].defense += shield;
                line.push_str(&format!(" Gained {} Def.", shield));
                vec![EffectRequest::Sound(SoundCue::Defense)]
            }
            HeroRole::Outsmart => {
                let count = if formation == Formation::Spread { 3 } else { 2 };
                let drawn = draw(&mut self.state, count, rng);
                line.push_str(&format!(" Drew {}.", drawn));
                vec![EffectRequest::Sound(SoundCue::Buff)]
            }
        };
        log::debug!("{}", line);
        self.state.log.push(line);
        derive_all(&mut self.state);
        Ok(self.outcome(true, effects))
    }

    /// Switch between FrontBack and Spread. Free of charge.
    pub fn toggle_formation(&mut self) -> Result<ActionOutcome, String> {
        self.ensure_active()?;
        self.state.formation = self.state.formation.toggled();
        self.state.log.push(format!(
            "Formation switched to {}.",
            self.state.formation.display_name()
        ));
        Ok(self.outcome(true, Vec::new()))
    }

    /// Hand the turn to the enemy, then start the next player turn.
    pub fn end_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ActionOutcome, String> {
        self.ensure_active()?;

        let mut line = resolve_enemy_action(&mut self.state, rng)
            .unwrap_or_else(|| "The enemy does nothing.".to_string());
        derive_all(&mut self.state);

        if self.rules.auto_defeat && self.state.characters.iter().all(Character::is_down) {
            line.push_str(" The team has fallen.");
            self.state.log.push(line);
            self.finish(BattleResult::Defeat);
            return Ok(self.outcome(true, Vec::new()));
        }
        self.state.log.push(line);

        advance_turn(&mut self.state, &self.rules);
        tick_all(&mut self.state);
        derive_all(&mut self.state);
        let turn_draw = self.rules.turn_draw;
        draw(&mut self.state, turn_draw, rng);
        log::debug!("turn {} begins with {} cards in hand", self.state.turn, self.state.hand.len());
        Ok(self.outcome(true, Vec::new()))
    }

    /// Leave the battle. Always legal; a battle that already ended keeps its result.
    pub fn exit_battle(&mut self) -> ActionOutcome {
        if !self.is_terminal() {
            self.state.log.push("The team retreats.");
            self.finish(BattleResult::Surrender);
        }
        self.outcome(true, Vec::new())
    }
}
