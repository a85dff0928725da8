use crate::error::MatchError;

/// Default split across the four factors, in percent. A product default, not
/// a confirmed business rule; override per-factor via `VOLMATCH_WEIGHT_*`.
pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    skills: 40,
    interests: 25,
    location: 20,
    experience: 15,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    pub skills: u32,
    pub interests: u32,
    pub location: u32,
    pub experience: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl MatchWeights {
    pub fn sum(&self) -> u32 {
        self.skills + self.interests + self.location + self.experience
    }

    /// Fails fast at configuration time; the scorer itself never re-checks.
    pub fn validate(&self) -> Result<(), MatchError> {
        let sum = self.sum();
        if sum != 100 {
            return Err(MatchError::InvalidWeights { sum });
        }
        Ok(())
    }

    /// Reads `VOLMATCH_WEIGHT_{SKILLS,INTERESTS,LOCATION,EXPERIENCE}`. Unset
    /// or unparsable variables keep the default for that factor; the combined
    /// result must still sum to 100.
    pub fn from_env() -> Result<Self, MatchError> {
        let weights = Self {
            skills: env_weight("VOLMATCH_WEIGHT_SKILLS", DEFAULT_WEIGHTS.skills),
            interests: env_weight("VOLMATCH_WEIGHT_INTERESTS", DEFAULT_WEIGHTS.interests),
            location: env_weight("VOLMATCH_WEIGHT_LOCATION", DEFAULT_WEIGHTS.location),
            experience: env_weight("VOLMATCH_WEIGHT_EXPERIENCE", DEFAULT_WEIGHTS.experience),
        };
        weights.validate()?;
        Ok(weights)
    }
}

fn env_weight(var: &str, default: u32) -> u32 {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
