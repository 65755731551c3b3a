use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::standings::{CompetitionLeaderboard, FullStandings, PlayerStandingSummary},
};

use crate::error::{WebError, WebResult};

use super::services;

fn validate_id(name: &str, id: i64) -> WebResult<()> {
    if id < 1 {
        return Err(WebError::BadRequest(format!("{name} must be a positive integer")));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/tours/{tour_id}/standings",
    params(
        ("tour_id" = i64, Path, description = "Tour ID")
    ),
    responses(
        (status = 200, description = "Tour standings with per-competition breakdown", body = FullStandings),
        (status = 400, description = "Invalid tour id"),
        (status = 404, description = "Tour or point template not found")
    ),
    tag = "standings"
)]
pub async fn get_full_standings(
    State(db): State<Database>,
    Path(tour_id): Path<i64>,
) -> WebResult<Response> {
    validate_id("tour_id", tour_id)?;

    let standings = services::get_full_standings(db.pool(), tour_id).await?;

    Ok(Json(standings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tours/{tour_id}/standings/summary",
    params(
        ("tour_id" = i64, Path, description = "Tour ID")
    ),
    responses(
        (status = 200, description = "Tour standings totals", body = Vec<PlayerStandingSummary>),
        (status = 400, description = "Invalid tour id"),
        (status = 404, description = "Tour or point template not found")
    ),
    tag = "standings"
)]
pub async fn get_standings_summary(
    State(db): State<Database>,
    Path(tour_id): Path<i64>,
) -> WebResult<Response> {
    validate_id("tour_id", tour_id)?;

    let standings = services::get_standings(db.pool(), tour_id).await?;

    Ok(Json(standings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/competitions/{competition_id}/leaderboard",
    params(
        ("competition_id" = i64, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Ranked competition results", body = CompetitionLeaderboard),
        (status = 400, description = "Invalid competition id"),
        (status = 404, description = "Competition not found")
    ),
    tag = "standings"
)]
pub async fn get_competition_leaderboard(
    State(db): State<Database>,
    Path(competition_id): Path<i64>,
) -> WebResult<Response> {
    validate_id("competition_id", competition_id)?;

    let leaderboard = services::get_competition_leaderboard(db.pool(), competition_id).await?;

    Ok(Json(leaderboard).into_response())
}
