use crate::config::{ForumConfig, RateRange};
use crate::error::ConfigError;
use crate::freelancer::Freelancer;
use rand::Rng;
use tracing::debug;

/// Produces batches of random freelancers from a validated [`ForumConfig`].
#[derive(Clone, Debug)]
pub struct FreelancerGenerator {
    config: ForumConfig,
}

impl FreelancerGenerator {
    pub fn new(config: ForumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generates the configured number of freelancers.
    pub fn generate_all<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Freelancer> {
        self.generate(self.config.count, rng)
    }

    /// Generates exactly `count` freelancers. Names and occupations are drawn
    /// independently and with replacement.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Freelancer> {
        let freelancers: Vec<Freelancer> = (0..count).map(|_| self.freelancer(rng)).collect();
        debug!("Generated {} freelancers", freelancers.len());
        freelancers
    }

    fn freelancer<R: Rng + ?Sized>(&self, rng: &mut R) -> Freelancer {
        let names = &self.config.names;
        let occupations = &self.config.occupations;
        Freelancer {
            name: names[rng.gen_range(0..names.len())].clone(),
            occupation: occupations[rng.gen_range(0..occupations.len())].clone(),
            rate: random_rate(&self.config.rates, rng),
        }
    }
}

/// `floor(unit * (max - min + 1)) + min` with `unit` in `[0, 1)`.
pub fn random_rate<R: Rng + ?Sized>(range: &RateRange, rng: &mut R) -> u32 {
    let unit: f64 = rng.gen();
    let span = range.span();
    let offset = ((unit * span as f64).floor() as u64).min(span - 1);
    // offset < span <= u32::MAX - min + 1, so this cannot overflow
    range.min + offset as u32
}
