use sqlx::PgPool;
use storage::{
    dto::standings::{CompetitionLeaderboard, FullStandings, PlayerStandingSummary},
    error::Result,
    repository::PgStandingsRepository,
    services::standings,
};

/// Get full tour standings with per-competition breakdown
pub async fn get_full_standings(pool: &PgPool, tour_id: i64) -> Result<FullStandings> {
    let repo = PgStandingsRepository::new(pool);
    standings::get_full_standings(&repo, tour_id).await
}

/// Get tour standings totals only
pub async fn get_standings(pool: &PgPool, tour_id: i64) -> Result<Vec<PlayerStandingSummary>> {
    let repo = PgStandingsRepository::new(pool);
    standings::get_standings(&repo, tour_id).await
}

/// Get the ranked results of one competition
pub async fn get_competition_leaderboard(
    pool: &PgPool,
    competition_id: i64,
) -> Result<CompetitionLeaderboard> {
    let repo = PgStandingsRepository::new(pool);
    standings::get_competition_leaderboard(&repo, competition_id).await
}
