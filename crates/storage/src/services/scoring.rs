use crate::models::Participant;

/// Score relative to par for a round: strokes (or the manual total) minus the
/// course's total par. Lower is better.
///
/// Returns `None` when the round has neither a manual total nor a decoded
/// score, or when its totals do not fit in an `i32`.
pub fn relative_to_par(participant: &Participant, pars: &[i32]) -> Option<i32> {
    let total_par = checked_total(pars)?;

    let strokes = match participant.manual_score_total {
        Some(manual) => manual,
        None => checked_total(participant.score.as_ref()?)?,
    };

    strokes.checked_sub(total_par)
}

fn checked_total(values: &[i32]) -> Option<i32> {
    values.iter().try_fold(0i32, |acc, v| acc.checked_add(*v))
}
