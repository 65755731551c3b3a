use std::collections::HashMap;

use crate::dto::standings::{
    CompetitionLeaderboard, CompetitionResult, FullStandings, LeaderboardEntry, PlayerStanding,
    PlayerStandingSummary, PointTemplateInfo,
};
use crate::error::{Result, StorageError};
use crate::models::{Competition, Participant};
use crate::repository::StandingsRepository;
use crate::services::eligibility::is_eligible;
use crate::services::points::PointsCalculator;
use crate::services::ranking::competition_positions;
use crate::services::scoring::relative_to_par;

/// An eligible round with its position inside the competition.
#[derive(Debug, Clone)]
pub struct RankedRound<'a> {
    pub participant: &'a Participant,
    pub relative_to_par: i32,
    pub position: u32,
}

/// Ranks the eligible rounds of one competition, best (lowest) score first.
///
/// Equal scores share a position. Rounds whose score cannot be resolved are
/// left out. The length of the result is the field size.
pub fn rank_competition<'a>(
    competition: &Competition,
    participants: &'a [Participant],
) -> Vec<RankedRound<'a>> {
    let mut rounds: Vec<(&Participant, i32)> = participants
        .iter()
        .filter(|p| is_eligible(p))
        .filter_map(|p| relative_to_par(p, &competition.pars).map(|score| (p, score)))
        .collect();

    rounds.sort_by(|(a, a_score), (b, b_score)| {
        a_score
            .cmp(b_score)
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    let positions = competition_positions(&rounds, |(_, score)| *score);

    rounds
        .into_iter()
        .zip(positions)
        .map(|((participant, relative_to_par), position)| RankedRound {
            participant,
            relative_to_par,
            position,
        })
        .collect()
}

#[derive(Debug)]
struct PlayerTotals {
    player_name: String,
    total_points: i32,
    competitions: Vec<CompetitionResult>,
}

/// Tour standings with every player's per-competition breakdown.
pub async fn get_full_standings<R>(repo: &R, tour_id: i64) -> Result<FullStandings>
where
    R: StandingsRepository + ?Sized,
{
    let tour = repo
        .get_tour(tour_id)
        .await?
        .ok_or(StorageError::TourNotFound(tour_id))?;

    let mut competitions = repo.list_competitions(tour_id).await?;
    competitions.sort_by_key(|c| (c.date, c.competition_id));

    let calculator = PointsCalculator::load(repo, tour.point_template_id).await?;

    let mut totals: HashMap<i64, PlayerTotals> = HashMap::new();

    for competition in &competitions {
        let participants = repo.list_participants(competition.competition_id).await?;
        let ranked = rank_competition(competition, &participants);
        let field_size = ranked.len();

        tracing::debug!(
            competition_id = competition.competition_id,
            field_size,
            "Ranked competition"
        );

        for round in &ranked {
            let points = calculator.points(round.position, field_size)?;
            let player = totals
                .entry(round.participant.player_id)
                .or_insert_with(|| PlayerTotals {
                    player_name: round.participant.player_name.clone(),
                    total_points: 0,
                    competitions: Vec::new(),
                });

            player.total_points = player.total_points.saturating_add(points);
            player.competitions.push(CompetitionResult {
                competition_id: competition.competition_id,
                competition_name: competition.name.clone(),
                competition_date: competition.date,
                score_relative_to_par: round.relative_to_par,
                points,
            });
        }
    }

    let mut ordered: Vec<(i64, PlayerTotals)> = totals.into_iter().collect();
    ordered.sort_by(|(a_id, a), (b_id, b)| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then_with(|| a_id.cmp(b_id))
    });

    let positions = competition_positions(&ordered, |(_, player)| player.total_points);

    let player_standings: Vec<PlayerStanding> = ordered
        .into_iter()
        .zip(positions)
        .map(|((player_id, player), position)| PlayerStanding {
            player_id,
            player_name: player.player_name,
            position,
            total_points: player.total_points,
            competitions_played: player.competitions.len(),
            competitions: player.competitions,
        })
        .collect();

    tracing::info!(
        tour_id,
        players = player_standings.len(),
        competitions = competitions.len(),
        "Computed tour standings"
    );

    Ok(FullStandings {
        point_template: calculator.template().map(PointTemplateInfo::from),
        total_competitions: competitions.len(),
        player_standings,
        tour,
    })
}

/// Standings reduced to totals, without positions or breakdown.
pub async fn get_standings<R>(repo: &R, tour_id: i64) -> Result<Vec<PlayerStandingSummary>>
where
    R: StandingsRepository + ?Sized,
{
    let standings = get_full_standings(repo, tour_id).await?;

    Ok(standings
        .player_standings
        .into_iter()
        .map(PlayerStandingSummary::from)
        .collect())
}

/// Ranked results for one competition, with the points each position earns
/// under its tour's scheme. Competitions outside a tour use the default formula.
pub async fn get_competition_leaderboard<R>(
    repo: &R,
    competition_id: i64,
) -> Result<CompetitionLeaderboard>
where
    R: StandingsRepository + ?Sized,
{
    let competition = repo
        .get_competition(competition_id)
        .await?
        .ok_or(StorageError::CompetitionNotFound(competition_id))?;

    let calculator = match competition.tour_id {
        Some(tour_id) => {
            let tour = repo
                .get_tour(tour_id)
                .await?
                .ok_or(StorageError::TourNotFound(tour_id))?;
            PointsCalculator::load(repo, tour.point_template_id).await?
        }
        None => PointsCalculator::default_formula(),
    };

    let participants = repo.list_participants(competition_id).await?;
    let ranked = rank_competition(&competition, &participants);
    let field_size = ranked.len();

    let entries = ranked
        .iter()
        .map(|round| {
            Ok(LeaderboardEntry {
                position: round.position,
                player_id: round.participant.player_id,
                player_name: round.participant.player_name.clone(),
                score_relative_to_par: round.relative_to_par,
                points: calculator.points(round.position, field_size)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CompetitionLeaderboard {
        competition_id: competition.competition_id,
        competition_name: competition.name,
        competition_date: competition.date,
        tour_id: competition.tour_id,
        field_size,
        entries,
    })
}
