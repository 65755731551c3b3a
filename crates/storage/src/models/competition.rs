use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single round played on one course, optionally part of a tour.
///
/// `pars` is the course's par sequence, one entry per hole, already decoded
/// from its stored JSON form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Competition {
    pub competition_id: i64,
    pub tour_id: Option<i64>,
    pub name: String,
    pub date: NaiveDate,
    pub pars: Vec<i32>,
}
