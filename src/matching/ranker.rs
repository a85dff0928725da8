use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::MatchError;
use crate::matching::explain::{explain, MatchExplanation};
use crate::matching::scoring::{require_ids, score, MatchScore};
use crate::matching::weights::MatchWeights;
use crate::{Opportunity, Profile};

#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Minimum composite score a result must reach (0-100).
    pub min_score: u32,
    /// Maximum number of results to return; `None` keeps them all.
    pub limit: Option<usize>,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            min_score: 0,
            limit: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankedOpportunity {
    pub opportunity: Opportunity,
    pub score: MatchScore,
}

#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub profile: Profile,
    pub score: MatchScore,
}

/// Scoring engine bound to one validated weight configuration. Stateless
/// beyond the weights; safe to share across threads.
#[derive(Debug)]
pub struct MatchEngine {
    weights: MatchWeights,
}

impl MatchEngine {
    /// Weights are validated here, once; ranking never re-checks them
    /// mid-computation.
    pub fn new(weights: MatchWeights) -> Result<Self, MatchError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    pub fn score(
        &self,
        profile: &Profile,
        opportunity: &Opportunity,
    ) -> Result<MatchScore, MatchError> {
        score(profile, opportunity, &self.weights)
    }

    pub fn explain(
        &self,
        profile: &Profile,
        opportunity: &Opportunity,
    ) -> Result<MatchExplanation, MatchError> {
        explain(profile, opportunity, &self.weights)
    }

    /// Rank opportunities for a profile, best first. The candidate list is
    /// expected to be pre-filtered for accepting-applications status. Every
    /// record is validated before any scoring happens, so a malformed entry
    /// fails the whole call with no partial output.
    pub fn rank_opportunities(
        &self,
        profile: &Profile,
        opportunities: &[Opportunity],
        config: &RankerConfig,
    ) -> Result<Vec<RankedOpportunity>, MatchError> {
        for opportunity in opportunities {
            require_ids(profile, opportunity)?;
        }

        let mut ranked = Vec::with_capacity(opportunities.len());
        for opportunity in opportunities {
            let score = self.score(profile, opportunity)?;
            if score.total < config.min_score {
                continue;
            }
            ranked.push(RankedOpportunity {
                opportunity: opportunity.clone(),
                score,
            });
        }

        ranked.sort_by(|a, b| {
            b.score
                .total
                .cmp(&a.score.total)
                .then_with(|| compare_deadlines(a.opportunity.deadline, b.opportunity.deadline))
                .then_with(|| a.opportunity.id.cmp(&b.opportunity.id))
        });
        if let Some(limit) = config.limit {
            ranked.truncate(limit);
        }

        debug!(
            candidates = opportunities.len(),
            ranked = ranked.len(),
            min_score = config.min_score,
            "ranked opportunities for profile"
        );
        Ok(ranked)
    }

    /// Reverse matching: rank candidate profiles for an opportunity with the
    /// same scorer and the roles swapped. Profiles carry no deadline, so
    /// equal scores fall through to ascending profile id.
    pub fn rank_candidates(
        &self,
        opportunity: &Opportunity,
        profiles: &[Profile],
        config: &RankerConfig,
    ) -> Result<Vec<RankedCandidate>, MatchError> {
        for profile in profiles {
            require_ids(profile, opportunity)?;
        }

        let mut ranked = Vec::with_capacity(profiles.len());
        for profile in profiles {
            let score = self.score(profile, opportunity)?;
            if score.total < config.min_score {
                continue;
            }
            ranked.push(RankedCandidate {
                profile: profile.clone(),
                score,
            });
        }

        ranked.sort_by(|a, b| {
            b.score
                .total
                .cmp(&a.score.total)
                .then_with(|| a.profile.id.cmp(&b.profile.id))
        });
        if let Some(limit) = config.limit {
            ranked.truncate(limit);
        }

        debug!(
            candidates = profiles.len(),
            ranked = ranked.len(),
            min_score = config.min_score,
            "ranked candidates for opportunity"
        );
        Ok(ranked)
    }
}

/// Earlier deadlines sort first; an absent deadline sorts after any dated one.
fn compare_deadlines(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
