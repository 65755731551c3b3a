//! In-memory standings data for unit tests.

use std::collections::HashMap;

use async_trait::async_trait;

use super::StandingsRepository;
use crate::error::Result;
use crate::models::{Competition, Participant, PointTemplate, Tour};

#[derive(Debug, Default)]
pub struct InMemoryStandingsRepository {
    tours: HashMap<i64, Tour>,
    competitions: Vec<Competition>,
    participants: Vec<Participant>,
    templates: HashMap<i64, PointTemplate>,
}

impl InMemoryStandingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tour(mut self, tour: Tour) -> Self {
        self.tours.insert(tour.tour_id, tour);
        self
    }

    pub fn with_competition(mut self, competition: Competition) -> Self {
        self.competitions.push(competition);
        self
    }

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn with_template(mut self, template: PointTemplate) -> Self {
        self.templates.insert(template.point_template_id, template);
        self
    }
}

#[async_trait]
impl StandingsRepository for InMemoryStandingsRepository {
    async fn get_tour(&self, tour_id: i64) -> Result<Option<Tour>> {
        Ok(self.tours.get(&tour_id).cloned())
    }

    async fn list_competitions(&self, tour_id: i64) -> Result<Vec<Competition>> {
        let mut competitions: Vec<Competition> = self
            .competitions
            .iter()
            .filter(|c| c.tour_id == Some(tour_id))
            .cloned()
            .collect();
        competitions.sort_by_key(|c| (c.date, c.competition_id));
        Ok(competitions)
    }

    async fn get_competition(&self, competition_id: i64) -> Result<Option<Competition>> {
        Ok(self
            .competitions
            .iter()
            .find(|c| c.competition_id == competition_id)
            .cloned())
    }

    async fn list_participants(&self, competition_id: i64) -> Result<Vec<Participant>> {
        Ok(self
            .participants
            .iter()
            .filter(|p| p.competition_id == competition_id)
            .cloned()
            .collect())
    }

    async fn get_point_template(&self, template_id: i64) -> Result<Option<PointTemplate>> {
        Ok(self.templates.get(&template_id).cloned())
    }
}
