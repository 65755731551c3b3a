use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;

use crate::features::standings::routes::{competition_routes, tour_routes};

pub fn router(db: Database) -> Router {
    Router::new()
        .nest("/api/tours", tour_routes())
        .nest("/api/competitions", competition_routes())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
