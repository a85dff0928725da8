use crate::error::MatchError;
use crate::matching::{
    experience::evaluate_experience, interests::evaluate_interests,
    location::evaluate_location, skills::evaluate_skills, weights::MatchWeights,
};
use crate::{Opportunity, Profile};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResult {
    /// Sub-score in [0,100].
    pub score: f64,
    pub status: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Weighted composite, rounded and clamped to [0,100].
    pub total: u32,
    pub skills: ScoringResult,
    pub interests: ScoringResult,
    pub location: ScoringResult,
    pub experience: ScoringResult,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Composite score with the default weights.
pub fn calculate_match_score(
    profile: &Profile,
    opportunity: &Opportunity,
) -> Result<MatchScore, MatchError> {
    score(profile, opportunity, &MatchWeights::default())
}

/// Composite score for a (profile, opportunity) pair: the weighted sum of the
/// skill, interest, location, and experience sub-scores. Pure; everything it
/// needs arrives in its arguments, so concurrent callers need no coordination.
pub fn score(
    profile: &Profile,
    opportunity: &Opportunity,
    weights: &MatchWeights,
) -> Result<MatchScore, MatchError> {
    weights.validate()?;
    require_ids(profile, opportunity)?;

    let skills = evaluate_skills(&opportunity.required_skills, &profile.skills);
    let interests = evaluate_interests(opportunity.category.as_deref(), &profile.interests);
    let location = evaluate_location(
        opportunity.remote,
        opportunity.location.as_ref(),
        profile.location.as_ref(),
    );
    let experience = evaluate_experience(
        opportunity.min_experience_years,
        profile,
        &opportunity.required_skills,
    );

    let total = weighted_total(
        weights,
        skills.weighted_score,
        interests.score,
        location.score,
        experience.score,
    );

    Ok(MatchScore {
        total,
        skills: sub_score(skills.weighted_score, skills.detail),
        interests: sub_score(interests.score, interests.detail),
        location: sub_score(location.score, location.detail),
        experience: sub_score(experience.score, experience.detail),
        matched_skills: skills.matched,
        missing_skills: skills.missing,
    })
}

pub(crate) fn require_ids(
    profile: &Profile,
    opportunity: &Opportunity,
) -> Result<(i64, i64), MatchError> {
    let profile_id = profile
        .id
        .ok_or_else(|| MatchError::MalformedInput("profile has no identifier".into()))?;
    let opportunity_id = opportunity
        .id
        .ok_or_else(|| MatchError::MalformedInput("opportunity has no identifier".into()))?;
    Ok((profile_id, opportunity_id))
}

fn sub_score(score: f64, detail: String) -> ScoringResult {
    ScoringResult {
        score,
        status: status_from_score(score),
        detail,
    }
}

fn weighted_total(
    weights: &MatchWeights,
    skills: f64,
    interests: f64,
    location: f64,
    experience: f64,
) -> u32 {
    let total = (weights.skills as f64 * skills
        + weights.interests as f64 * interests
        + weights.location as f64 * location
        + weights.experience as f64 * experience)
        / 100.0;
    total.round().clamp(0.0, 100.0) as u32
}

fn status_from_score(score: f64) -> &'static str {
    if score >= 90.0 {
        "PERFECT_MATCH"
    } else if score >= 70.0 {
        "MATCH"
    } else if score >= 40.0 {
        "PARTIAL_MATCH"
    } else {
        "MISS"
    }
}
