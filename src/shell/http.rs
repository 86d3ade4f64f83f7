use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::registration::use_cases::register_user::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/form", get(register_http::view))
        .route("/form/fields/{field}", put(register_http::set_field))
        .route("/form/techs", post(register_http::append_tech))
        .route("/form/techs/{index}", delete(register_http::remove_tech))
        .route("/form/submit", post(register_http::submit))
        .route("/form/reset", post(register_http::reset))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
