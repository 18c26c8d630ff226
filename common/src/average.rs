use crate::error::AggregateError;
use crate::freelancer::Freelancer;

/// Mean hourly rate rounded to two decimals, half away from zero.
///
/// An empty list has no mean and yields [`AggregateError::InvalidInput`].
pub fn average_rate(freelancers: &[Freelancer]) -> Result<f64, AggregateError> {
    if freelancers.is_empty() {
        return Err(AggregateError::InvalidInput);
    }
    let total: u64 = freelancers.iter().map(|f| u64::from(f.rate)).sum();
    let mean = total as f64 / freelancers.len() as f64;
    Ok(round_cents(mean))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
