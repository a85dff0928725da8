pub mod cache;
pub mod error;
pub mod logging;
pub mod matching;
pub mod normalize;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use error::MatchError;
pub use matching::explain::{explain, FactorBreakdown, MatchExplanation};
pub use matching::ranker::{
    MatchEngine, RankedCandidate, RankedOpportunity, RankerConfig,
};
pub use matching::scoring::{calculate_match_score, score, MatchScore, ScoringResult};
pub use matching::weights::{MatchWeights, DEFAULT_WEIGHTS};

/// Proficiency ladder for a possessed skill. The multiplier scales a matched
/// skill's weight in the composite score (a beginner counts half of an expert).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn multiplier(self) -> f64 {
        match self {
            Proficiency::Beginner => 0.5,
            Proficiency::Intermediate => 0.7,
            Proficiency::Advanced => 0.85,
            Proficiency::Expert => 1.0,
        }
    }
}

/// Self-reported strength of an interest. Reported in explanations; carries
/// no numeric effect on the sub-score.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InterestLevel {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub proficiency: Proficiency,
    #[serde(default)]
    pub years: f64,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestEntry {
    pub category: String,
    #[serde(default)]
    pub level: InterestLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<i64>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub interests: Vec<InterestEntry>,
    pub location: Option<Location>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Option<i64>,
    pub title: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub category: Option<String>,
    pub location: Option<Location>,
    #[serde(default)]
    pub remote: bool,
    pub min_experience_years: Option<f64>,
    pub deadline: Option<NaiveDate>,
    pub capacity: Option<u32>,
    #[serde(default)]
    pub filled: u32,
    #[serde(default)]
    pub active: bool,
}

impl Opportunity {
    /// Whether the opportunity still accepts applications on `as_of`: active,
    /// deadline (if any) not passed, capacity (if any) not filled. Callers use
    /// this to build the candidate list before ranking.
    pub fn is_accepting(&self, as_of: NaiveDate) -> bool {
        if !self.active {
            return false;
        }
        if let Some(deadline) = self.deadline {
            if deadline < as_of {
                return false;
            }
        }
        match self.capacity {
            Some(capacity) => self.filled < capacity,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_parses_lowercase_labels() {
        assert_eq!("expert".parse::<Proficiency>().unwrap(), Proficiency::Expert);
        assert_eq!(
            "intermediate".parse::<Proficiency>().unwrap(),
            Proficiency::Intermediate
        );
        assert!("guru".parse::<Proficiency>().is_err());
    }

    #[test]
    fn interest_level_round_trips_through_display() {
        let level: InterestLevel = "high".parse().unwrap();
        assert_eq!(level.to_string(), "high");
    }

    #[test]
    fn accepting_requires_active_open_and_unfilled() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let open = Opportunity {
            id: Some(1),
            active: true,
            deadline: NaiveDate::from_ymd_opt(2025, 6, 30),
            capacity: Some(5),
            filled: 4,
            ..Opportunity::default()
        };
        assert!(open.is_accepting(as_of));

        let mut expired = open.clone();
        expired.deadline = NaiveDate::from_ymd_opt(2025, 5, 1);
        assert!(!expired.is_accepting(as_of));

        let mut full = open.clone();
        full.filled = 5;
        assert!(!full.is_accepting(as_of));

        let mut retired = open;
        retired.active = false;
        assert!(!retired.is_accepting(as_of));
    }

    #[test]
    fn no_deadline_or_capacity_means_no_limit() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let open_ended = Opportunity {
            id: Some(2),
            active: true,
            ..Opportunity::default()
        };
        assert!(open_ended.is_accepting(as_of));
    }
}
