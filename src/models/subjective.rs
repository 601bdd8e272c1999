//! Rating-scale (subjective) attributes.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Rating;

/// Ratings every player carries regardless of position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRatings {
    pub leadership: Rating,
    pub clutch_factor: Rating,
    pub durability: Rating,
    pub consistency: Rating,
    pub work_ethic: Rating,
}

/// Base ratings plus position-specific ones (e.g. `pocketPresence` for a
/// quarterback), flattened into a single object on output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectiveStats {
    #[serde(flatten)]
    pub base: BaseRatings,

    #[serde(flatten)]
    pub position: BTreeMap<&'static str, Rating>,
}

impl SubjectiveStats {
    pub fn new(base: BaseRatings) -> Self {
        Self {
            base,
            position: BTreeMap::new(),
        }
    }

    /// Builder method to add a position-specific rating.
    pub fn with(mut self, name: &'static str, rating: Rating) -> Self {
        self.position.insert(name, rating);
        self
    }

    /// Look up any rating by its output name.
    pub fn get(&self, name: &str) -> Option<Rating> {
        match name {
            "leadership" => Some(self.base.leadership),
            "clutchFactor" => Some(self.base.clutch_factor),
            "durability" => Some(self.base.durability),
            "consistency" => Some(self.base.consistency),
            "workEthic" => Some(self.base.work_ethic),
            other => self.position.get(other).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> BaseRatings {
        BaseRatings {
            leadership: Rating::new(8),
            clutch_factor: Rating::new(7),
            durability: Rating::new(9),
            consistency: Rating::new(6),
            work_ethic: Rating::new(10),
        }
    }

    #[test]
    fn test_subjective_flattens_position_ratings() {
        let stats = SubjectiveStats::new(base()).with("pocketPresence", Rating::new(9));
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(
            value,
            json!({
                "leadership": 8,
                "clutchFactor": 7,
                "durability": 9,
                "consistency": 6,
                "workEthic": 10,
                "pocketPresence": 9
            })
        );
    }

    #[test]
    fn test_subjective_get() {
        let stats = SubjectiveStats::new(base()).with("routeRunning", Rating::new(4));
        assert_eq!(stats.get("clutchFactor"), Some(Rating::new(7)));
        assert_eq!(stats.get("routeRunning"), Some(Rating::new(4)));
        assert_eq!(stats.get("pocketPresence"), None);
    }
}
