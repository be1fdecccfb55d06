//! Two-hero card battles against a single enemy.
//!
//! `engine` drives one encounter; `session` holds the player's run across
//! encounters and is what the HTTP layer shares.

pub mod battle_log;
pub mod content;
pub mod draw;
pub mod effects;
pub mod endpoints;
pub mod enemy;
pub mod engine;
pub mod rules;
pub mod session;
pub mod status;
pub mod types;

pub use endpoints::{
    get_battle, get_battle_result, get_session, list_cards, list_heroes,
    okapi_add_operation_for_get_battle_, okapi_add_operation_for_get_battle_result_,
    okapi_add_operation_for_get_session_, okapi_add_operation_for_list_cards_,
    okapi_add_operation_for_list_heroes_, SharedSession,
};
pub use engine::{ActionOutcome, BattleEngine, BattleView};
pub use session::GameSession;
