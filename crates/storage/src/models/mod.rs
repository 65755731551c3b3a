pub mod competition;
pub mod participant;
pub mod point_template;
pub mod tour;

pub use competition::Competition;
pub use participant::{CONCEDED_HOLE, Participant};
pub use point_template::{DEFAULT_RANK_KEY, PointTemplate};
pub use tour::Tour;
