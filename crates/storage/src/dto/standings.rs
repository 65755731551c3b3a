use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{PointTemplate, Tour};

/// Complete tour standings with a per-competition breakdown for every player.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FullStandings {
    pub tour: Tour,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_template: Option<PointTemplateInfo>,
    pub total_competitions: usize,
    pub player_standings: Vec<PlayerStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointTemplateInfo {
    pub point_template_id: i64,
    pub name: String,
}

impl From<&PointTemplate> for PointTemplateInfo {
    fn from(template: &PointTemplate) -> Self {
        Self {
            point_template_id: template.point_template_id,
            name: template.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerStanding {
    pub player_id: i64,
    pub player_name: String,
    pub position: u32,
    pub total_points: i32,
    pub competitions_played: usize,
    pub competitions: Vec<CompetitionResult>,
}

/// One counted round inside a player's standing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResult {
    pub competition_id: i64,
    pub competition_name: String,
    pub competition_date: NaiveDate,
    pub score_relative_to_par: i32,
    pub points: i32,
}

/// Standings projection without positions or breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerStandingSummary {
    pub player_id: i64,
    pub player_name: String,
    pub total_points: i32,
    pub competitions_played: usize,
}

impl From<PlayerStanding> for PlayerStandingSummary {
    fn from(standing: PlayerStanding) -> Self {
        Self {
            player_id: standing.player_id,
            player_name: standing.player_name,
            total_points: standing.total_points,
            competitions_played: standing.competitions_played,
        }
    }
}

/// Ranked results of a single competition.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionLeaderboard {
    pub competition_id: i64,
    pub competition_name: String,
    pub competition_date: NaiveDate,
    pub tour_id: Option<i64>,
    pub field_size: usize,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub position: u32,
    pub player_id: i64,
    pub player_name: String,
    pub score_relative_to_par: i32,
    pub points: i32,
}
