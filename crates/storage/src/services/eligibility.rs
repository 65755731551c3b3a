use crate::models::Participant;

/// Whether a round counts toward standings.
///
/// The round must be locked. A manual total is always eligible once locked;
/// otherwise the hole-by-hole score must be present and contain no conceded
/// hole. An all-zero locked score still passes.
pub fn is_eligible(participant: &Participant) -> bool {
    if !participant.is_locked {
        return false;
    }

    if participant.manual_score_total.is_some() {
        return true;
    }

    participant.score.is_some() && !participant.has_conceded_hole()
}
