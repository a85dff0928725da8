use crate::normalize::normalize_tag;
use crate::InterestEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct InterestOverlap {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub detail: String,
}

/// Interest fit between the opportunity's category and the profile's interest
/// categories. An opportunity without a category carries no constraint.
pub fn evaluate_interests(category: Option<&str>, interests: &[InterestEntry]) -> InterestOverlap {
    let Some(required) = category.map(normalize_tag).filter(|c| !c.is_empty()) else {
        return InterestOverlap {
            score: 100.0,
            matched: vec![],
            missing: vec![],
            detail: "no category on the opportunity".into(),
        };
    };

    match interests
        .iter()
        .find(|entry| normalize_tag(&entry.category) == required)
    {
        Some(entry) => InterestOverlap {
            score: 100.0,
            matched: vec![required.clone()],
            missing: vec![],
            detail: format!("interested in {required} ({} interest)", entry.level),
        },
        None => InterestOverlap {
            score: 0.0,
            matched: vec![],
            missing: vec![required.clone()],
            detail: format!("no recorded interest in {required}"),
        },
    }
}
