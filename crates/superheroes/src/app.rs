use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        hero_powers::create_hero_power,
        heroes::{get_hero, list_heroes},
        pages::index,
        powers::{get_power, list_powers, update_power},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route("/heroes", get(list_heroes))
        .route("/heroes/{id}", get(get_hero))
        .route("/powers", get(list_powers))
        .route("/powers/{id}", get(get_power).patch(update_power))
        .route("/hero_powers", post(create_hero_power))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
