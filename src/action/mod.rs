use either::{Either, Left, Right};
use rocket::response::status::{BadRequest, NotFound};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::State;
use rocket_okapi::{openapi, JsonSchema};

use crate::battle::{ActionOutcome, BattleView, SharedSession};
use crate::status_messages::{new_status, Status};

/// Player actions
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema, Hash)]
#[serde(crate = "rocket::serde", tag = "action_type")]
pub enum PlayerActions {
    SetSeed {
        seed: u64,
    },
    StartBattle {
        front_hero_id: String,
        back_hero_id: String,
        encounter_id: String,
        /// Card template ids; the hero's starter deck when omitted.
        #[serde(default)]
        front_deck: Option<Vec<String>>,
        #[serde(default)]
        back_deck: Option<Vec<String>>,
    },
    PlayCard {
        instance_id: usize,
    },
    UseHeroSkill {
        hero_id: String,
    },
    EndTurn,
    ToggleFormation,
    ExitBattle,
}

/// What the server did with an action.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    pub action: PlayerActions,
    /// Absent for actions outside of a battle turn (seeding, starting).
    pub outcome: Option<ActionOutcome>,
    /// The battle after the action; absent once it has ended.
    pub battle: Option<BattleView>,
}

type ActionError = Either<NotFound<Json<Status>>, BadRequest<Json<Status>>>;

fn not_found(msg: String) -> ActionError {
    Left(NotFound(new_status(msg)))
}

fn bad_request(msg: String) -> ActionError {
    Right(BadRequest(new_status(msg)))
}

#[openapi]
#[post("/action", format = "json", data = "<player_action>")]
pub async fn play(
    session: &State<SharedSession>,
    player_action: Json<PlayerActions>,
) -> Result<(rocket::http::Status, Json<ActionResponse>), ActionError> {
    let action = player_action.0;
    let mut session = session.lock().await;

    let outcome = match &action {
        PlayerActions::SetSeed { seed } => {
            session.set_seed(*seed);
            None
        }
        PlayerActions::StartBattle {
            front_hero_id,
            back_hero_id,
            encounter_id,
            front_deck,
            back_deck,
        } => {
            session
                .start_battle(
                    front_hero_id,
                    back_hero_id,
                    front_deck.as_deref(),
                    back_deck.as_deref(),
                    encounter_id,
                )
                .map_err(bad_request)?;
            None
        }
        PlayerActions::PlayCard { instance_id } => {
            let battle = session
                .battle()
                .ok_or_else(|| bad_request("Cannot play a card if there is no active battle!".to_string()))?;
            if battle.state().hand_position(*instance_id).is_none() {
                return Err(not_found(format!("Card {} is not on hand", instance_id)));
            }
            Some(session.play_card(*instance_id).map_err(bad_request)?)
        }
        PlayerActions::UseHeroSkill { hero_id } => {
            let battle = session
                .battle()
                .ok_or_else(|| bad_request("Cannot use a skill if there is no active battle!".to_string()))?;
            if battle.state().hero_index(hero_id).is_none() {
                return Err(not_found(format!("Hero {} is not in this battle", hero_id)));
            }
            Some(session.use_hero_skill(hero_id).map_err(bad_request)?)
        }
        PlayerActions::EndTurn => Some(session.end_turn().map_err(bad_request)?),
        PlayerActions::ToggleFormation => Some(session.toggle_formation().map_err(bad_request)?),
        PlayerActions::ExitBattle => Some(session.exit_battle().map_err(bad_request)?),
    };

    log::debug!("applied {:?}", action);
    let battle = session.battle().map(|b| b.view());
    Ok((
        rocket::http::Status::Created,
        Json(ActionResponse {
            action,
            outcome,
            battle,
        }),
    ))
}
