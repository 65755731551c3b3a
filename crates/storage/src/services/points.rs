use crate::error::{Result, StorageError};
use crate::models::PointTemplate;
use crate::repository::StandingsRepository;

/// Built-in payout used when a tour has no point template.
///
/// First place earns `field_size + 2`, second `field_size`, and every later
/// rank `field_size - (rank - 1)`, never below zero.
pub fn default_points(rank: u32, field_size: usize) -> i32 {
    let field = field_size as i64;

    let points = match rank {
        1 => field + 2,
        2 => field,
        _ => (field - (i64::from(rank) - 1)).max(0),
    };

    i32::try_from(points).unwrap_or(i32::MAX)
}

/// Turns a within-competition rank into points for one tour.
///
/// The template is fetched once; a referenced template that no longer exists
/// only fails when points are actually requested.
#[derive(Debug, Clone)]
pub struct PointsCalculator {
    template_id: Option<i64>,
    template: Option<PointTemplate>,
}

impl PointsCalculator {
    pub fn default_formula() -> Self {
        Self {
            template_id: None,
            template: None,
        }
    }

    pub async fn load<R>(repo: &R, template_id: Option<i64>) -> Result<Self>
    where
        R: StandingsRepository + ?Sized,
    {
        let template = match template_id {
            Some(id) => {
                let template = repo.get_point_template(id).await?;
                if template.is_none() {
                    tracing::warn!(point_template_id = id, "Referenced point template is missing");
                }
                template
            }
            None => None,
        };

        Ok(Self {
            template_id,
            template,
        })
    }

    pub fn template(&self) -> Option<&PointTemplate> {
        self.template.as_ref()
    }

    pub fn points(&self, rank: u32, field_size: usize) -> Result<i32> {
        match (self.template_id, &self.template) {
            (None, _) => Ok(default_points(rank, field_size)),
            (Some(_), Some(template)) => Ok(template.points_for_rank(rank)),
            (Some(id), None) => Err(StorageError::PointTemplateNotFound(id)),
        }
    }
}

/// Points for a single rank, looking the template up on every call.
pub async fn calculate_points<R>(
    repo: &R,
    template_id: Option<i64>,
    rank: u32,
    field_size: usize,
) -> Result<i32>
where
    R: StandingsRepository + ?Sized,
{
    PointsCalculator::load(repo, template_id)
        .await?
        .points(rank, field_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryStandingsRepository;

    fn major() -> PointTemplate {
        PointTemplate {
            point_template_id: 1,
            name: "Major".to_string(),
            points_structure: [("1", 100), ("2", 75), ("3", 50), ("default", 10)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    #[test]
    fn test_default_formula_five_player_field() {
        let points: Vec<i32> = (1..=5).map(|rank| default_points(rank, 5)).collect();
        assert_eq!(points, vec![7, 5, 3, 2, 1]);
    }

    #[test]
    fn test_default_formula_floors_at_zero() {
        assert_eq!(default_points(9, 5), 0);
        assert_eq!(default_points(40, 3), 0);
    }

    #[test]
    fn test_default_formula_single_player() {
        assert_eq!(default_points(1, 1), 3);
    }

    #[tokio::test]
    async fn test_custom_template_four_player_field() {
        let repo = InMemoryStandingsRepository::new().with_template(major());

        let mut points = Vec::new();
        for rank in 1..=4 {
            points.push(calculate_points(&repo, Some(1), rank, 4).await.unwrap());
        }

        assert_eq!(points, vec![100, 75, 50, 10]);
    }

    #[tokio::test]
    async fn test_no_template_uses_default_formula() {
        let repo = InMemoryStandingsRepository::new();
        assert_eq!(calculate_points(&repo, None, 2, 6).await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_missing_template_is_an_error() {
        let repo = InMemoryStandingsRepository::new();
        let err = calculate_points(&repo, Some(42), 1, 4).await.unwrap_err();

        assert!(matches!(err, StorageError::PointTemplateNotFound(42)));
        assert!(err.to_string().contains("Point template not found"));
    }

    #[tokio::test]
    async fn test_loaded_calculator_exposes_template() {
        let repo = InMemoryStandingsRepository::new().with_template(major());
        let calculator = PointsCalculator::load(&repo, Some(1)).await.unwrap();

        assert_eq!(calculator.template().map(|t| t.name.as_str()), Some("Major"));
        assert!(PointsCalculator::default_formula().template().is_none());
    }
}
