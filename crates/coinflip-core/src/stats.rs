//! Empirical checks of the sampler's output.
//!
//! Both reports draw a fixed number of samples from a caller-supplied source
//! and summarize them; neither asserts anything on its own.

use serde::Serialize;

use crate::bound::Bound;
use crate::error::SamplerError;
use crate::rng::EntropySource;
use crate::sampler::BoundedRandomSampler;

/// Histogram and moments of repeated draws for one bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionReport {
    /// Inclusive upper bound that was sampled.
    pub bound: Bound,
    /// Number of draws.
    pub iterations: u32,
    /// `counts[v]` is how many draws returned `v`.
    pub counts: Vec<u32>,
    /// Empirical mean of the draws.
    pub mean: f64,
    /// Mean of the uniform distribution over `[0, bound]`.
    pub expected_mean: f64,
    /// Mean squared distance of the draws from `expected_mean`.
    pub variance: f64,
}

impl DistributionReport {
    /// Largest bound a histogram is kept for.
    pub const MAX_BOUND: u64 = 1 << 20;

    /// `|mean - expected_mean| / expected_mean`, or `0` for a zero bound.
    #[must_use]
    pub fn relative_mean_error(&self) -> f64 {
        if self.bound.get() == 0 {
            return 0.0;
        }
        (self.mean - self.expected_mean).abs() / self.expected_mean
    }

    /// Fraction of draws that returned `value`.
    #[must_use]
    pub fn frequency(&self, value: u64) -> f64 {
        usize::try_from(value)
            .ok()
            .and_then(|index| self.counts.get(index))
            .map_or(0.0, |&count| f64::from(count) / f64::from(self.iterations))
    }
}

/// Extremes observed over repeated draws for one bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    /// Inclusive upper bound that was sampled.
    pub bound: Bound,
    /// Number of draws.
    pub iterations: u32,
    /// Smallest value drawn.
    pub min: u64,
    /// Largest value drawn.
    pub max: u64,
    /// Smallest value the sampler may return.
    pub expected_min: u64,
    /// Largest value the sampler may return.
    pub expected_max: u64,
}

impl RangeReport {
    /// Returns `true` when both ends of `[0, bound]` were drawn.
    #[must_use]
    pub fn covers_extremes(&self) -> bool {
        self.min == self.expected_min && self.max == self.expected_max
    }
}

fn require_iterations(iterations: u32) -> Result<(), SamplerError> {
    if iterations == 0 {
        return Err(SamplerError::InvalidArgument(
            "iterations must be positive".to_owned(),
        ));
    }
    Ok(())
}

/// Draws `iterations` samples in `[0, bound]` and tallies them.
///
/// # Errors
///
/// Returns `SamplerError::InvalidArgument` if `iterations` is zero or `bound`
/// exceeds [`DistributionReport::MAX_BOUND`], and propagates any sampling
/// error.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn run_distribution_test(
    sampler: &BoundedRandomSampler,
    source: &mut dyn EntropySource,
    bound: Bound,
    iterations: u32,
) -> Result<DistributionReport, SamplerError> {
    require_iterations(iterations)?;
    let n = bound.get();
    if n > DistributionReport::MAX_BOUND {
        return Err(SamplerError::InvalidArgument(format!(
            "bound {n} exceeds the histogram limit of {}",
            DistributionReport::MAX_BOUND
        )));
    }

    tracing::info!(bound = n, iterations, "running distribution test");

    // n <= MAX_BOUND, so every index fits in usize.
    let mut counts = vec![0_u32; n as usize + 1];
    for _ in 0..iterations {
        let value = sampler.sample_bound(source, bound)?;
        counts[value as usize] += 1;
    }

    let total = f64::from(iterations);
    let expected_mean = n as f64 / 2.0;
    let weighted = |f: &dyn Fn(f64) -> f64| {
        counts
            .iter()
            .enumerate()
            .map(|(value, &count)| f(value as f64) * f64::from(count))
            .sum::<f64>()
            / total
    };
    let mean = weighted(&|v| v);
    let variance = weighted(&|v| (v - expected_mean).powi(2));

    Ok(DistributionReport {
        bound,
        iterations,
        counts,
        mean,
        expected_mean,
        variance,
    })
}

/// Draws `iterations` samples in `[0, bound]` and records the extremes.
///
/// # Errors
///
/// Returns `SamplerError::InvalidArgument` if `iterations` is zero, and
/// propagates any sampling error.
pub fn run_range_test(
    sampler: &BoundedRandomSampler,
    source: &mut dyn EntropySource,
    bound: Bound,
    iterations: u32,
) -> Result<RangeReport, SamplerError> {
    require_iterations(iterations)?;
    let n = bound.get();

    tracing::info!(bound = n, iterations, "running range test");

    let mut min = n;
    let mut max = 0;
    for _ in 0..iterations {
        let value = sampler.sample_bound(source, bound)?;
        min = min.min(value);
        max = max.max(value);
    }

    Ok(RangeReport {
        bound,
        iterations,
        min,
        max,
        expected_min: 0,
        expected_max: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::UniformBitSource;

    #[test]
    fn test_distribution_counts_sum_to_iterations() {
        let mut source = UniformBitSource::seeded(11);
        let report = run_distribution_test(
            &BoundedRandomSampler::new(),
            &mut source,
            Bound::from(10_u32),
            2_000,
        )
        .unwrap();
        assert_eq!(report.counts.len(), 11);
        assert_eq!(report.counts.iter().sum::<u32>(), 2_000);
        assert!((report.expected_mean - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distribution_of_zero_bound() {
        let mut source = UniformBitSource::seeded(3);
        let report = run_distribution_test(
            &BoundedRandomSampler::new(),
            &mut source,
            Bound::from(0_u32),
            50,
        )
        .unwrap();
        assert_eq!(report.counts, vec![50]);
        assert!(report.mean.abs() < f64::EPSILON);
        assert!(report.relative_mean_error().abs() < f64::EPSILON);
        assert!((report.frequency(0) - 1.0).abs() < f64::EPSILON);
        assert!(report.frequency(1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distribution_rejects_zero_iterations() {
        let mut source = UniformBitSource::seeded(1);
        let err = run_distribution_test(
            &BoundedRandomSampler::new(),
            &mut source,
            Bound::from(4_u32),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, SamplerError::InvalidArgument(_)));
    }

    #[test]
    fn test_distribution_rejects_oversized_bound() {
        let mut source = UniformBitSource::seeded(1);
        let bound = Bound::new(1 << 21).unwrap();
        let err =
            run_distribution_test(&BoundedRandomSampler::new(), &mut source, bound, 10)
                .unwrap_err();
        assert!(matches!(err, SamplerError::InvalidArgument(_)));
    }

    #[test]
    fn test_range_report_stays_within_bound() {
        let mut source = UniformBitSource::seeded(5);
        let report = run_range_test(
            &BoundedRandomSampler::new(),
            &mut source,
            Bound::from(100_u32),
            1_000,
        )
        .unwrap();
        assert!(report.min <= report.max);
        assert!(report.max <= 100);
        assert_eq!(report.expected_max, 100);
    }

    #[test]
    fn test_range_rejects_zero_iterations() {
        let mut source = UniformBitSource::seeded(1);
        let err = run_range_test(
            &BoundedRandomSampler::new(),
            &mut source,
            Bound::from(4_u32),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, SamplerError::InvalidArgument(_)));
    }

    #[test]
    fn test_reports_serialize_to_json() {
        let mut source = UniformBitSource::seeded(9);
        let report = run_range_test(
            &BoundedRandomSampler::new(),
            &mut source,
            Bound::from(3_u32),
            100,
        )
        .unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["bound"], 3);
        assert_eq!(json["expected_min"], 0);
        assert_eq!(json["iterations"], 100);
    }
}
