use crate::normalize::normalize_tag;
use crate::Location;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationFit {
    pub score: f64,
    pub detail: String,
}

/// Tiered location fit. Remote opportunities and unrecorded locations carry
/// no constraint; otherwise an exact city match beats same-country beats
/// mismatch.
pub fn evaluate_location(
    remote: bool,
    opportunity: Option<&Location>,
    profile: Option<&Location>,
) -> LocationFit {
    if remote {
        return LocationFit {
            score: 100.0,
            detail: "remote opportunity, no location constraint".into(),
        };
    }

    let (Some(opp), Some(prof)) = (opportunity, profile) else {
        return LocationFit {
            score: 100.0,
            detail: "location not recorded on one side, treated as unconstrained".into(),
        };
    };

    let same_country = normalize_tag(&opp.country) == normalize_tag(&prof.country);
    let same_city = same_country && normalize_tag(&opp.city) == normalize_tag(&prof.city);

    if same_city {
        LocationFit {
            score: 100.0,
            detail: format!("same city: {}, {}", opp.city, opp.country),
        }
    } else if same_country {
        LocationFit {
            score: 50.0,
            detail: format!("same country, different city: {} vs {}", prof.city, opp.city),
        }
    } else {
        LocationFit {
            score: 0.0,
            detail: format!("different country: {} vs {}", prof.country, opp.country),
        }
    }
}
