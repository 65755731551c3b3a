use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hole value recorded when a player concedes the hole (and with it the round).
pub const CONCEDED_HOLE: i32 = -1;

/// One player's round in one competition.
///
/// Each `score` entry is `0` for an unreported hole, a positive stroke count,
/// or [`CONCEDED_HOLE`]. `score` is `None` when the stored sequence is missing
/// or could not be decoded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    pub participant_id: i64,
    pub competition_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub score: Option<Vec<i32>>,
    pub is_locked: bool,
    pub manual_score_total: Option<i32>,
}

impl Participant {
    pub fn has_conceded_hole(&self) -> bool {
        self.score
            .as_ref()
            .is_some_and(|holes| holes.contains(&CONCEDED_HOLE))
    }
}
