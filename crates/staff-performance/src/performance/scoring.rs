use super::domain::Metric;

/// Weighted average of metric scores: `Σ(score·weight) / Σ(weight)`.
///
/// Returns `0.0` for an empty slice or when the weights sum to zero. No rounding is applied.
pub fn calculate_performance(metrics: &[Metric]) -> f64 {
    let total_weight: f64 = metrics.iter().map(|metric| metric.weight).sum();
    if metrics.is_empty() || total_weight == 0.0 {
        return 0.0;
    }

    let weighted: f64 = metrics
        .iter()
        .map(|metric| metric.score * metric.weight)
        .sum();

    weighted / total_weight
}
