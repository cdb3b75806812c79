//! Category 4: historical tail risk from the daily-return distribution.

use crate::engine::SeriesContext;
use crate::format;
use crate::models::Metric;
use crate::sentiment::{self, classify, classify_inverted};
use crate::shared_math;

const LABELS: [&str; 5] = [
    "VaR 95 (daily)",
    "VaR 99 (daily)",
    "CVaR 95 (daily)",
    "Skewness",
    "Excess Kurtosis",
];

pub fn compute(ctx: &SeriesContext) -> Vec<Metric> {
    let returns = match ctx.returns.as_deref() {
        Some(r) if !r.is_empty() => r,
        _ => {
            return LABELS
                .into_iter()
                .map(|label| Metric::unavailable(label, None))
                .collect()
        }
    };

    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();

    let mut metrics = Vec::with_capacity(5);

    // Historical (non-parametric) VaR: the return at the percentile index.
    let var_95 = sorted[(n as f64 * 0.05).floor() as usize];
    metrics.push(Metric::computed(
        "VaR 95 (daily)",
        Some("Historical 5th-percentile daily return."),
        format::pct(var_95),
        Some(classify(var_95, &sentiment::VAR_95)),
    ));

    let var_99 = sorted[(n as f64 * 0.01).floor() as usize];
    metrics.push(Metric::computed(
        "VaR 99 (daily)",
        None,
        format::pct(var_99),
        Some(classify(var_99, &sentiment::VAR_99)),
    ));

    // Expected shortfall: mean of the worst 5% of observations.
    let cutoff = ((n as f64 * 0.05).ceil() as usize).max(1);
    let cvar = sorted[..cutoff].iter().sum::<f64>() / cutoff as f64;
    metrics.push(Metric::computed(
        "CVaR 95 (daily)",
        Some("Mean of the worst 5% of daily returns."),
        format::pct(cvar),
        Some(classify(cvar, &sentiment::CVAR_95)),
    ));

    let (_, m2, m3, m4) = shared_math::central_moments(returns);

    metrics.push(if m2 != 0.0 {
        let skew = m3 / m2.powf(1.5);
        Metric::computed(
            "Skewness",
            None,
            format::ratio(skew),
            Some(classify(skew, &sentiment::SKEWNESS)),
        )
    } else {
        Metric::unavailable("Skewness", None)
    });

    metrics.push(if m2 != 0.0 {
        let kurt = m4 / (m2 * m2) - 3.0;
        Metric::computed(
            "Excess Kurtosis",
            None,
            format::ratio(kurt),
            Some(classify_inverted(kurt, &sentiment::KURTOSIS)),
        )
    } else {
        Metric::unavailable("Excess Kurtosis", None)
    });

    metrics
}
