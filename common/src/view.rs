//! Declarative view of the forum page.
//!
//! [`ForumView`] is a plain value built from the freelancer list and its
//! average. The web front-end renders it; nothing here touches a document.

use crate::freelancer::Freelancer;

pub const HEADING: &str = "Freelancer Forum";
pub const COLUMN_LABELS: [&str; 3] = ["NAME", "OCCUPATION", "RATE"];
pub const NO_AVERAGE_SUMMARY: &str =
    "No freelancers are available, so there is no average starting price.";

#[derive(Clone, Debug, PartialEq)]
pub struct ForumView {
    pub heading: String,
    pub summary: String,
    pub table: RateTable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RateTable {
    pub header: [&'static str; 3],
    pub rows: Vec<RateRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RateRow {
    pub name: String,
    pub occupation: String,
    pub rate: String,
}

impl From<&Freelancer> for RateRow {
    fn from(freelancer: &Freelancer) -> Self {
        Self {
            name: freelancer.name.clone(),
            occupation: freelancer.occupation.clone(),
            rate: format!("${}", freelancer.rate),
        }
    }
}

impl ForumView {
    /// `average` is `None` when there is nothing to average.
    pub fn build(freelancers: &[Freelancer], average: Option<f64>) -> Self {
        let summary = match average {
            Some(average) => format!("The average starting price is ${:.2}.", average),
            None => NO_AVERAGE_SUMMARY.to_string(),
        };
        Self {
            heading: HEADING.to_string(),
            summary,
            table: RateTable {
                header: COLUMN_LABELS,
                rows: freelancers.iter().map(RateRow::from).collect(),
            },
        }
    }
}
