use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const NAMES: [&str; 5] = ["Alice", "Bob", "Carol", "Dave", "Eve"];
pub const OCCUPATIONS: [&str; 5] = ["Writer", "Teacher", "Programmer", "Designer", "Engineer"];
pub const RATE_RANGE: RangeInclusive<u32> = 20..=200;
pub const NUM_FREELANCERS: usize = 100;

/// One freelancer listing. Plain value, no identity beyond its fields.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Freelancer {
    pub name: String,
    pub occupation: String,
    /// Hourly rate in whole dollars
    pub rate: u32,
}

impl Freelancer {
    pub fn new(name: impl Into<String>, occupation: impl Into<String>, rate: u32) -> Self {
        Self {
            name: name.into(),
            occupation: occupation.into(),
            rate,
        }
    }
}

impl fmt::Display for Freelancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, ${}", self.name, self.occupation, self.rate)
    }
}
