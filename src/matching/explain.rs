use serde::Serialize;

use crate::error::MatchError;
use crate::matching::scoring::{score, MatchScore, ScoringResult};
use crate::matching::weights::MatchWeights;
use crate::{Opportunity, Profile};

/// One row of the explanation breakdown.
/// `contribution = weight / 100 * raw_score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorBreakdown {
    pub factor: &'static str,
    pub weight: u32,
    pub raw_score: f64,
    pub contribution: f64,
    pub detail: String,
}

/// Structured breakdown of how a composite score was derived, for a view
/// layer to render. Deterministic: no timestamps, no locale formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchExplanation {
    pub overall_score: u32,
    pub breakdown: Vec<FactorBreakdown>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Explain a (profile, opportunity) pair. Derived from the same computation
/// as `score`, so the overall figure never diverges from it. Missing optional
/// fields score as vacuous constraints rather than failing.
pub fn explain(
    profile: &Profile,
    opportunity: &Opportunity,
    weights: &MatchWeights,
) -> Result<MatchExplanation, MatchError> {
    let match_score = score(profile, opportunity, weights)?;
    Ok(explanation_from_score(match_score, weights))
}

pub(crate) fn explanation_from_score(
    score: MatchScore,
    weights: &MatchWeights,
) -> MatchExplanation {
    let breakdown = vec![
        factor("skills", weights.skills, &score.skills),
        factor("interests", weights.interests, &score.interests),
        factor("location", weights.location, &score.location),
        factor("experience", weights.experience, &score.experience),
    ];

    MatchExplanation {
        overall_score: score.total,
        breakdown,
        matched_skills: score.matched_skills,
        missing_skills: score.missing_skills,
    }
}

fn factor(name: &'static str, weight: u32, result: &ScoringResult) -> FactorBreakdown {
    FactorBreakdown {
        factor: name,
        weight,
        raw_score: result.score,
        contribution: weight as f64 * result.score / 100.0,
        detail: result.detail.clone(),
    }
}
