use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use super::content::{card_pool, heroes};
use super::engine::BattleView;
use super::session::{BattleReport, GameSession, SessionSummary};
use super::types::{CardTemplate, Character};

pub type SharedSession = std::sync::Arc<rocket::futures::lock::Mutex<GameSession>>;

/// Snapshot of the battle in progress, if any.
#[openapi]
#[get("/battle")]
pub async fn get_battle(session: &State<SharedSession>) -> Json<Option<BattleView>> {
    let session = session.lock().await;
    Json(session.battle().map(|b| b.view()))
}

/// Report of the most recently finished battle.
#[openapi]
#[get("/battle/result")]
pub async fn get_battle_result(session: &State<SharedSession>) -> Json<Option<BattleReport>> {
    let session = session.lock().await;
    Json(session.last_report().cloned())
}

#[openapi]
#[get("/session")]
pub async fn get_session(session: &State<SharedSession>) -> Json<SessionSummary> {
    let session = session.lock().await;
    Json(session.summary())
}

#[openapi]
#[get("/heroes")]
pub async fn list_heroes() -> Json<Vec<Character>> {
    Json(heroes())
}

/// The card pool. `?owner=<hero id>` narrows it to one hero's cards, `?owner=neutral`
/// to the shared ones.
#[openapi]
#[get("/cards?<owner>")]
pub async fn list_cards(owner: Option<String>) -> Json<Vec<CardTemplate>> {
    let cards = card_pool()
        .into_iter()
        .filter(|c| match owner.as_deref() {
            None => true,
            Some("neutral") => c.owner_hero_id.is_none(),
            Some(hero_id) => c.owner_hero_id.as_deref() == Some(hero_id),
        })
        .collect();
    Json(cards)
}
