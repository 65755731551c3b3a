pub mod eligibility;
pub mod points;
pub mod ranking;
pub mod scoring;
pub mod standings;

pub use eligibility::is_eligible;
pub use points::{PointsCalculator, calculate_points, default_points};
pub use ranking::competition_positions;
pub use scoring::relative_to_par;
pub use standings::{
    RankedRound, get_competition_leaderboard, get_full_standings, get_standings,
    rank_competition,
};
