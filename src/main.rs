#[macro_use]
extern crate rocket;

use enforcers_cardgame::rocket_initialize;

#[launch]
fn rocket() -> _ {
    rocket_initialize()
}
