//! Combined report printed by the runner.

use coinflip_core::bound::Bound;
use coinflip_core::rng::EntropySource;
use coinflip_core::sampler::BoundedRandomSampler;
use coinflip_core::stats::{DistributionReport, RangeReport, run_distribution_test, run_range_test};
use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;

/// Output of one runner invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Inclusive upper bound that was sampled.
    pub bound: Bound,
    /// Draws per report.
    pub iterations: u32,
    /// Histogram and moments; `None` when the bound is too large to tally.
    pub distribution: Option<DistributionReport>,
    /// Observed extremes.
    pub range: RangeReport,
}

/// Runs both reports for `config` against `source`.
///
/// # Errors
///
/// Returns `AppError::Sampling` if a report fails, including
/// `EntropyExhausted` under a configured attempt limit.
pub fn run(config: &Config, source: &mut dyn EntropySource) -> Result<RunReport, AppError> {
    let sampler = BoundedRandomSampler::with_attempt_limit(config.attempt_limit);
    let iterations = config.iterations.get();

    let distribution = if config.bound.get() <= DistributionReport::MAX_BOUND {
        Some(run_distribution_test(
            &sampler,
            source,
            config.bound,
            iterations,
        )?)
    } else {
        tracing::warn!(
            bound = config.bound.get(),
            limit = DistributionReport::MAX_BOUND,
            "bound too large for a histogram, skipping distribution test"
        );
        None
    };

    let range = run_range_test(&sampler, source, config.bound, iterations)?;

    Ok(RunReport {
        bound: config.bound,
        iterations,
        distribution,
        range,
    })
}
