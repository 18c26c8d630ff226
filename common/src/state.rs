use crate::average::average_rate;
use crate::config::ForumConfig;
use crate::error::ConfigError;
use crate::freelancer::Freelancer;
use crate::generator::FreelancerGenerator;
use crate::view::ForumView;
use rand::Rng;
use std::sync::Arc;
use tracing::info;

/// Everything the page renders, computed once and then only read.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    freelancers: Arc<[Freelancer]>,
    average: Option<f64>,
}

impl AppState {
    pub fn init<R: Rng + ?Sized>(config: ForumConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let generator = FreelancerGenerator::new(config)?;
        Ok(Self::from_freelancers(generator.generate_all(rng)))
    }

    pub fn from_freelancers(freelancers: Vec<Freelancer>) -> Self {
        let average = average_rate(&freelancers).ok();
        match average {
            Some(average) => info!(
                "Loaded {} freelancers, average rate ${:.2}",
                freelancers.len(),
                average
            ),
            None => info!("Loaded an empty freelancer list"),
        }
        Self {
            freelancers: freelancers.into(),
            average,
        }
    }

    pub fn freelancers(&self) -> &[Freelancer] {
        &self.freelancers
    }

    pub fn average(&self) -> Option<f64> {
        self.average
    }

    pub fn view(&self) -> ForumView {
        ForumView::build(&self.freelancers, self.average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_init_with_defaults() {
        let state = AppState::init(ForumConfig::default(), &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(state.freelancers().len(), 100);
        let average = state.average().expect("non-empty list has an average");
        assert!((20.0..=200.0).contains(&average));
        assert_eq!(state.view().table.rows.len(), 100);
    }

    #[test]
    fn test_average_matches_aggregator() {
        let state = AppState::from_freelancers(vec![
            Freelancer::new("Dave", "Engineer", 33),
            Freelancer::new("Eve", "Programmer", 34),
            Freelancer::new("Alice", "Writer", 35),
        ]);
        assert_eq!(state.average(), Some(34.0));
    }

    #[test]
    fn test_empty_state_has_no_average() {
        let state = AppState::from_freelancers(Vec::new());
        assert_eq!(state.average(), None);
        assert!(state.freelancers().is_empty());
    }

    #[test]
    fn test_init_propagates_config_error() {
        let config = ForumConfig {
            occupations: Vec::new(),
            ..ForumConfig::default()
        };
        assert_eq!(
            AppState::init(config, &mut StdRng::seed_from_u64(0)),
            Err(ConfigError::EmptyOccupations)
        );
    }
}
