// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's methods. Handlers are responsible for:
// - Deserializing incoming JSON requests, whatever their content type
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Mapping decision failures to a 500

use log::error;
use rocket::fairing::AdHoc;
use rocket::fs::{relative, FileServer};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Rocket, State};
use serde_json::Value;

use crate::bot::Bot;
use crate::types::MoveRequest;

/// GET / endpoint
/// Returns bot appearance configuration
#[get("/")]
pub fn index(bot: &State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// Best-effort `game_id` from a body that may be missing or not JSON at all
fn game_id(body: &Option<Json<Value>>) -> Option<&str> {
    body.as_ref()
        .and_then(|body| body.get("game_id"))
        .and_then(Value::as_str)
}

/// POST /start endpoint
/// Always answers with the start taunt, even for an empty or malformed body
#[post("/start", data = "<start_req>")]
pub fn start(bot: &State<Bot>, start_req: Option<Json<Value>>) -> Json<Value> {
    Json(bot.start(game_id(&start_req)))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move
#[post("/move", data = "<move_req>")]
pub fn get_move(bot: &State<Bot>, move_req: Json<MoveRequest>) -> Result<Json<Value>, Status> {
    bot.get_move(&move_req).map(Json).map_err(|e| {
        error!("Turn {}: cannot decide a move: {}", move_req.turn, e);
        Status::InternalServerError
    })
}

/// POST /end endpoint
#[post("/end", data = "<end_req>")]
pub fn end(bot: &State<Bot>, end_req: Option<Json<Value>>) -> Json<Value> {
    Json(bot.end(game_id(&end_req)))
}

/// Rocket instance serving `bot` on all four endpoints, plus the head image under /static
pub fn build(bot: Bot) -> Rocket<Build> {
    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/chick-snake");
            })
        }))
        .mount("/", routes![index, start, get_move, end])
        .mount("/static", FileServer::from(relative!("static")))
}
