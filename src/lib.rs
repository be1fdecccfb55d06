//! # Enforcers Card Game
//!
//! A two-hero deck-building battle served over a JSON API.
//!
//! ## Overview
//!
//! The player picks two heroes and a formation, then fights one enemy per
//! encounter by spending mana on cards from the heroes' merged deck. Formation
//! decides which hero's cards get a synergy bonus.
//!
//! ## Architecture
//!
//! The API is built using the Rocket web framework with OpenAPI documentation
//! support. The single player session lives behind an `Arc<Mutex<GameSession>>`
//! so HTTP requests are applied one at a time; the battle engine underneath is
//! plain synchronous code.

// Rocket makes this a bit tricky to support
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate rocket;

use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub mod action;
pub mod battle;
pub mod config;
pub mod player_seed;
pub mod status_messages;

/// Initializes and configures the Rocket web server with all routes and OpenAPI documentation.
///
/// Battle rules come from the `battle` section of the Rocket configuration and
/// the session seed from `GAME_SEED`.
///
/// # Example
///
/// ```no_run
/// use enforcers_cardgame::rocket_initialize;
///
/// #[rocket::main]
/// async fn main() {
///     rocket_initialize().launch().await.expect("Failed to launch rocket");
/// }
/// ```
pub fn rocket_initialize() -> rocket::Rocket<rocket::Build> {
    use crate::action::okapi_add_operation_for_play_;
    use crate::action::play;
    use crate::battle::{
        get_battle, get_battle_result, get_session, list_cards, list_heroes,
        okapi_add_operation_for_get_battle_, okapi_add_operation_for_get_battle_result_,
        okapi_add_operation_for_get_session_, okapi_add_operation_for_list_cards_,
        okapi_add_operation_for_list_heroes_,
    };

    #[allow(clippy::no_effect_underscore_binding)]
    let _ = env_logger::try_init();

    let rocket = rocket::build();
    let rules = config::BattleRules::from_figment(rocket.figment());
    let seed = player_seed::initial_seed();
    log::info!("starting session with seed {} and rules {:?}", seed, rules);

    let session: battle::SharedSession = std::sync::Arc::new(rocket::futures::lock::Mutex::new(
        battle::GameSession::new(rules, seed),
    ));

    rocket
        .mount(
            "/",
            openapi_get_routes![
                play,
                get_battle,
                get_battle_result,
                get_session,
                list_heroes,
                list_cards
            ],
        )
        .mount("/swagger", make_swagger_ui(&get_docs()))
        .manage(session)
}

fn get_docs() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/openapi.json".to_string(),
        ..Default::default()
    }
}
