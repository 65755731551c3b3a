use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use super::StandingsRepository;
use crate::error::{Result, StorageError};
use crate::models::{Competition, Participant, PointTemplate, Tour};

#[derive(FromRow)]
struct CompetitionRow {
    competition_id: i64,
    tour_id: Option<i64>,
    name: String,
    date: NaiveDate,
    pars: String,
}

impl TryFrom<CompetitionRow> for Competition {
    type Error = StorageError;

    fn try_from(row: CompetitionRow) -> Result<Self> {
        let pars = serde_json::from_str::<Vec<i32>>(&row.pars).map_err(|e| {
            StorageError::InvalidData(format!(
                "course pars for competition {}: {}",
                row.competition_id, e
            ))
        })?;

        Ok(Self {
            competition_id: row.competition_id,
            tour_id: row.tour_id,
            name: row.name,
            date: row.date,
            pars,
        })
    }
}

#[derive(FromRow)]
struct ParticipantRow {
    participant_id: i64,
    competition_id: i64,
    player_id: i64,
    player_name: String,
    score: Option<String>,
    is_locked: bool,
    manual_score_total: Option<i32>,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        let score = decode_score(row.participant_id, row.score.as_deref());

        Self {
            participant_id: row.participant_id,
            competition_id: row.competition_id,
            player_id: row.player_id,
            player_name: row.player_name,
            score,
            is_locked: row.is_locked,
            manual_score_total: row.manual_score_total,
        }
    }
}

#[derive(FromRow)]
struct PointTemplateRow {
    point_template_id: i64,
    name: String,
    points_structure: String,
}

impl TryFrom<PointTemplateRow> for PointTemplate {
    type Error = StorageError;

    fn try_from(row: PointTemplateRow) -> Result<Self> {
        let points_structure = serde_json::from_str::<BTreeMap<String, i32>>(&row.points_structure)
            .map_err(|e| {
                StorageError::InvalidData(format!(
                    "points structure for template {}: {}",
                    row.point_template_id, e
                ))
            })?;

        Ok(Self {
            point_template_id: row.point_template_id,
            name: row.name,
            points_structure,
        })
    }
}

/// Decodes a stored hole-by-hole score. Missing or malformed text yields
/// `None`, which keeps the round out of the standings instead of failing them.
fn decode_score(participant_id: i64, raw: Option<&str>) -> Option<Vec<i32>> {
    let raw = raw?;

    match serde_json::from_str::<Vec<i32>>(raw) {
        Ok(holes) => Some(holes),
        Err(e) => {
            tracing::warn!(participant_id, error = %e, "Ignoring malformed score sequence");
            None
        }
    }
}

/// Postgres-backed standings reads
pub struct PgStandingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PgStandingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<'a> StandingsRepository for PgStandingsRepository<'a> {
    async fn get_tour(&self, tour_id: i64) -> Result<Option<Tour>> {
        let tour = sqlx::query_as::<_, Tour>(
            r#"
            SELECT tour_id, name, point_template_id
            FROM tours
            WHERE tour_id = $1
            "#,
        )
        .bind(tour_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(tour)
    }

    async fn list_competitions(&self, tour_id: i64) -> Result<Vec<Competition>> {
        let rows = sqlx::query_as::<_, CompetitionRow>(
            r#"
            SELECT c.competition_id, c.tour_id, c.name, c.date, co.pars
            FROM competitions c
            INNER JOIN courses co ON co.course_id = c.course_id
            WHERE c.tour_id = $1
            ORDER BY c.date ASC, c.competition_id ASC
            "#,
        )
        .bind(tour_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Competition::try_from).collect()
    }

    async fn get_competition(&self, competition_id: i64) -> Result<Option<Competition>> {
        let row = sqlx::query_as::<_, CompetitionRow>(
            r#"
            SELECT c.competition_id, c.tour_id, c.name, c.date, co.pars
            FROM competitions c
            INNER JOIN courses co ON co.course_id = c.course_id
            WHERE c.competition_id = $1
            "#,
        )
        .bind(competition_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Competition::try_from).transpose()
    }

    async fn list_participants(&self, competition_id: i64) -> Result<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT p.participant_id, p.competition_id, p.player_id, pl.name AS player_name,
                   p.score, p.is_locked, p.manual_score_total
            FROM participants p
            INNER JOIN players pl ON pl.player_id = p.player_id
            WHERE p.competition_id = $1
            ORDER BY p.participant_id
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn get_point_template(&self, template_id: i64) -> Result<Option<PointTemplate>> {
        let row = sqlx::query_as::<_, PointTemplateRow>(
            r#"
            SELECT point_template_id, name, points_structure
            FROM point_templates
            WHERE point_template_id = $1
            "#,
        )
        .bind(template_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(PointTemplate::try_from).transpose()
    }
}
