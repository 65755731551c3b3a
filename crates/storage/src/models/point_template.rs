use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Key holding the fallback payout for ranks without their own entry.
pub const DEFAULT_RANK_KEY: &str = "default";

/// Custom rank to points mapping attached to a tour.
///
/// Keys are stringified 1-based ranks (`"1"`, `"2"`, ...) plus the optional
/// [`DEFAULT_RANK_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointTemplate {
    pub point_template_id: i64,
    pub name: String,
    pub points_structure: BTreeMap<String, i32>,
}

impl PointTemplate {
    /// Points for `rank`, falling back to the `"default"` entry and then to zero.
    pub fn points_for_rank(&self, rank: u32) -> i32 {
        self.points_structure
            .get(&rank.to_string())
            .or_else(|| self.points_structure.get(DEFAULT_RANK_KEY))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(entries: &[(&str, i32)]) -> PointTemplate {
        PointTemplate {
            point_template_id: 1,
            name: "Major".to_string(),
            points_structure: entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn test_explicit_rank_entry() {
        let t = template(&[("1", 100), ("2", 75), ("default", 10)]);
        assert_eq!(t.points_for_rank(1), 100);
        assert_eq!(t.points_for_rank(2), 75);
    }

    #[test]
    fn test_falls_back_to_default_entry() {
        let t = template(&[("1", 100), ("default", 10)]);
        assert_eq!(t.points_for_rank(9), 10);
    }

    #[test]
    fn test_zero_without_default_entry() {
        let t = template(&[("1", 100)]);
        assert_eq!(t.points_for_rank(2), 0);
    }
}
