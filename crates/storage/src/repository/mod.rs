use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Competition, Participant, PointTemplate, Tour};

#[cfg(test)]
pub(crate) mod memory;
pub mod standings;

pub use standings::PgStandingsRepository;

/// Read-only view of the data a standings computation needs.
///
/// Implementations decode stored JSON (score arrays, course pars, template
/// structures) before handing records out.
#[async_trait]
pub trait StandingsRepository: Send + Sync {
    async fn get_tour(&self, tour_id: i64) -> Result<Option<Tour>>;

    /// Competitions belonging to the tour, earliest first.
    async fn list_competitions(&self, tour_id: i64) -> Result<Vec<Competition>>;

    async fn get_competition(&self, competition_id: i64) -> Result<Option<Competition>>;

    async fn list_participants(&self, competition_id: i64) -> Result<Vec<Participant>>;

    async fn get_point_template(&self, template_id: i64) -> Result<Option<PointTemplate>>;
}
