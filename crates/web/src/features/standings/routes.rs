use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_competition_leaderboard, get_full_standings, get_standings_summary};

pub fn tour_routes() -> Router<Database> {
    Router::new()
        .route("/:tour_id/standings", get(get_full_standings))
        .route("/:tour_id/standings/summary", get(get_standings_summary))
}

pub fn competition_routes() -> Router<Database> {
    Router::new().route("/:competition_id/leaderboard", get(get_competition_leaderboard))
}
