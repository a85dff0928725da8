use crate::normalize::{normalize_tag, normalize_tag_set};
use crate::Profile;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceFit {
    pub score: f64,
    pub detail: String,
}

/// Years of experience relevant to the opportunity: the strongest entry among
/// skills the opportunity asks for, or the profile-wide maximum when it asks
/// for none. A profile with nothing recorded counts as zero years.
pub fn relevant_years(profile: &Profile, required_skills: &[String]) -> f64 {
    let required = normalize_tag_set(required_skills);
    profile
        .skills
        .iter()
        .filter(|entry| required.is_empty() || required.contains(&normalize_tag(&entry.name)))
        .map(|entry| entry.years)
        .fold(0.0, f64::max)
}

/// Experience fit with linear partial credit below the requirement.
pub fn evaluate_experience(
    required_years: Option<f64>,
    profile: &Profile,
    required_skills: &[String],
) -> ExperienceFit {
    let Some(required) = required_years.filter(|years| *years > 0.0) else {
        return ExperienceFit {
            score: 100.0,
            detail: "no experience requirement".into(),
        };
    };

    let years = relevant_years(profile, required_skills);
    if years >= required {
        ExperienceFit {
            score: 100.0,
            detail: format!("{years:.1} years meets the {required:.1}-year requirement"),
        }
    } else {
        let score = 100.0 * (years / required).min(1.0);
        ExperienceFit {
            score,
            detail: format!("{years:.1} of {required:.1} required years ({score:.0}% credit)"),
        }
    }
}
