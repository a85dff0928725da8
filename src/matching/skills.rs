use std::collections::HashMap;

use crate::normalize::{normalize_tag, normalize_tags_vec};
use crate::SkillEntry;

/// Weight applied to a matched skill nobody has verified.
const UNVERIFIED_MULTIPLIER: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillOverlap {
    /// Plain overlap fraction scaled to [0,100]; what explanations report.
    pub overlap_score: f64,
    /// Proficiency/verification-weighted variant; what the composite uses.
    pub weighted_score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub detail: String,
}

/// Overlap between an opportunity's required tags and a profile's possessed
/// skills. Empty requirements are vacuously satisfied with full credit.
pub fn evaluate_skills(required: &[String], possessed: &[SkillEntry]) -> SkillOverlap {
    let required_tags = normalize_tags_vec(required);
    if required_tags.is_empty() {
        return SkillOverlap {
            overlap_score: 100.0,
            weighted_score: 100.0,
            matched: vec![],
            missing: vec![],
            detail: "no skill requirements".into(),
        };
    }

    // Best multiplier per normalized possessed tag; duplicate entries keep
    // the strongest one.
    let mut possessed_weight: HashMap<String, f64> = HashMap::new();
    for entry in possessed {
        let tag = normalize_tag(&entry.name);
        if tag.is_empty() {
            continue;
        }
        let multiplier = entry.proficiency.multiplier()
            * if entry.verified {
                1.0
            } else {
                UNVERIFIED_MULTIPLIER
            };
        let slot = possessed_weight.entry(tag).or_insert(0.0);
        if multiplier > *slot {
            *slot = multiplier;
        }
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut weight_sum = 0.0;
    for tag in &required_tags {
        match possessed_weight.get(tag) {
            Some(multiplier) => {
                weight_sum += multiplier;
                matched.push(tag.clone());
            }
            None => missing.push(tag.clone()),
        }
    }

    let total = required_tags.len() as f64;
    let overlap_score = 100.0 * matched.len() as f64 / total;
    let weighted_score = 100.0 * weight_sum / total;

    let detail = format!(
        "matched {} of {} required skills ({:.0}%) (matched: {} / missing: {})",
        matched.len(),
        required_tags.len(),
        overlap_score,
        if matched.is_empty() {
            "none".to_string()
        } else {
            matched.join(", ")
        },
        if missing.is_empty() {
            "none".to_string()
        } else {
            missing.join(", ")
        },
    );

    SkillOverlap {
        overlap_score,
        weighted_score,
        matched,
        missing,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Proficiency;

    fn skill(name: &str, proficiency: Proficiency, verified: bool) -> SkillEntry {
        SkillEntry {
            name: name.into(),
            proficiency,
            verified,
            ..SkillEntry::default()
        }
    }

    #[test]
    fn empty_requirements_pass_vacuously() {
        let result = evaluate_skills(&[], &[]);
        assert_eq!(result.overlap_score, 100.0);
        assert_eq!(result.weighted_score, 100.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_and_trimmed() {
        let result = evaluate_skills(
            &["Python".into(), " SQL ".into()],
            &[skill("python", Proficiency::Expert, true)],
        );
        assert_eq!(result.overlap_score, 50.0);
        assert_eq!(result.matched, vec!["python".to_string()]);
        assert_eq!(result.missing, vec!["sql".to_string()]);
    }

    #[test]
    fn verified_expert_earns_full_weight() {
        let result = evaluate_skills(
            &["python".into()],
            &[skill("python", Proficiency::Expert, true)],
        );
        assert_eq!(result.weighted_score, 100.0);
        assert_eq!(result.overlap_score, 100.0);
    }

    #[test]
    fn unverified_match_is_discounted_to_seventy_percent() {
        let result = evaluate_skills(
            &["python".into()],
            &[skill("python", Proficiency::Expert, false)],
        );
        assert!((result.weighted_score - 70.0).abs() < 1e-9);
        // The plain overlap stays at 100; only the weighted variant discounts.
        assert_eq!(result.overlap_score, 100.0);
    }

    #[test]
    fn beginner_counts_half_of_expert() {
        let result = evaluate_skills(
            &["python".into()],
            &[skill("python", Proficiency::Beginner, true)],
        );
        assert!((result.weighted_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_entries_keep_the_strongest() {
        let result = evaluate_skills(
            &["python".into()],
            &[
                skill("python", Proficiency::Beginner, false),
                skill("Python", Proficiency::Advanced, true),
            ],
        );
        assert!((result.weighted_score - 85.0).abs() < 1e-9);
    }

    #[test]
    fn detail_lists_matched_and_missing() {
        let result = evaluate_skills(
            &["sql".into(), "python".into()],
            &[skill("python", Proficiency::Expert, true)],
        );
        assert!(result.detail.contains("matched: python"));
        assert!(result.detail.contains("missing: sql"));
    }

    #[test]
    fn output_order_is_stable_regardless_of_input_order() {
        let a = evaluate_skills(&["sql".into(), "python".into()], &[]);
        let b = evaluate_skills(&["python".into(), "sql".into()], &[]);
        assert_eq!(a.missing, b.missing);
        assert_eq!(a.missing, vec!["python".to_string(), "sql".to_string()]);
    }
}
