use crate::error::ConfigError;
use crate::freelancer::{NAMES, NUM_FREELANCERS, OCCUPATIONS, RATE_RANGE};
use serde::{Deserialize, Serialize};

/// Closed, inclusive range of hourly rates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateRange {
    pub min: u32,
    pub max: u32,
}

impl RateRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, rate: u32) -> bool {
        (self.min..=self.max).contains(&rate)
    }

    /// Number of distinct rates in the range. Only meaningful once validated.
    pub fn span(&self) -> u64 {
        u64::from(self.max) - u64::from(self.min) + 1
    }
}

impl Default for RateRange {
    fn default() -> Self {
        Self::new(*RATE_RANGE.start(), *RATE_RANGE.end())
    }
}

/// Inputs to freelancer generation.
///
/// The defaults are the forum's compile-time constants; nothing reads this
/// from the environment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForumConfig {
    pub names: Vec<String>,
    pub occupations: Vec<String>,
    pub rates: RateRange,
    pub count: usize,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            names: NAMES.iter().map(|name| name.to_string()).collect(),
            occupations: OCCUPATIONS.iter().map(|occ| occ.to_string()).collect(),
            rates: RateRange::default(),
            count: NUM_FREELANCERS,
        }
    }
}

impl ForumConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.names.is_empty() {
            return Err(ConfigError::EmptyNames);
        }
        if self.occupations.is_empty() {
            return Err(ConfigError::EmptyOccupations);
        }
        if self.rates.min > self.rates.max {
            return Err(ConfigError::InvertedRange {
                min: self.rates.min,
                max: self.rates.max,
            });
        }
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        Ok(())
    }
}
