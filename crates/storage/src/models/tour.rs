use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tour {
    pub tour_id: i64,
    pub name: String,
    pub point_template_id: Option<i64>,
}
