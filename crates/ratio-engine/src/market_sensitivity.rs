//! Category 3: sensitivity to the S&P 500 benchmark.
//!
//! Portfolio and benchmark series are inner-joined on exact date strings;
//! dates without a benchmark counterpart are dropped, never interpolated.
//! The joined sample is therefore smaller than the portfolio-only sample
//! used by the volatility sections, a known asymmetry.

use std::collections::HashMap;

use portfolio_core::PricePoint;

use crate::format;
use crate::models::Metric;
use crate::sentiment::{self, classify, classify_inverted};
use crate::shared_math::{self, RISK_FREE_RATE, TRADING_DAYS};

const LABELS: [&str; 5] = [
    "Beta (vs S&P 500)",
    "Alpha (ann.)",
    "Tracking Error",
    "Information Ratio",
    "R²",
];

pub fn compute(portfolio: &[PricePoint], benchmark: Option<&[PricePoint]>) -> Vec<Metric> {
    let aligned = benchmark.map(|b| align_by_date(portfolio, b));

    let stats = aligned.as_ref().and_then(|(port, bench)| {
        if port.len() < 2 {
            return None;
        }
        let port_returns = shared_math::daily_returns(port)?;
        let bench_returns = shared_math::daily_returns(bench)?;
        Some(SensitivityStats::from_returns(&port_returns, &bench_returns))
    });

    match stats {
        Some(s) => s.into_metrics(),
        None => LABELS
            .into_iter()
            .map(|label| Metric::unavailable(label, None))
            .collect(),
    }
}

/// Inner join of two date-keyed series, preserving portfolio date order.
fn align_by_date(portfolio: &[PricePoint], benchmark: &[PricePoint]) -> (Vec<f64>, Vec<f64>) {
    let by_date: HashMap<&str, f64> = benchmark
        .iter()
        .map(|p| (p.date.as_str(), p.value_usd))
        .collect();

    let mut port = Vec::new();
    let mut bench = Vec::new();
    for p in portfolio {
        if let Some(&b) = by_date.get(p.date.as_str()) {
            port.push(p.value_usd);
            bench.push(b);
        }
    }
    (port, bench)
}

struct SensitivityStats {
    beta: Option<f64>,
    alpha: Option<f64>,
    tracking_error: f64,
    information_ratio: Option<f64>,
    r_squared: Option<f64>,
}

impl SensitivityStats {
    fn from_returns(port: &[f64], bench: &[f64]) -> Self {
        let (port_mean, bench_mean, cov, var_port, var_bench) =
            shared_math::covariance_stats(port, bench);

        let beta = if var_bench != 0.0 {
            Some(cov / var_bench)
        } else {
            None
        };

        let rf_daily = RISK_FREE_RATE / TRADING_DAYS;
        let alpha = beta
            .map(|b| ((port_mean - rf_daily) - b * (bench_mean - rf_daily)) * TRADING_DAYS);

        let n = port.len() as f64;
        let mean_sq_diff = port
            .iter()
            .zip(bench.iter())
            .map(|(p, b)| (p - b) * (p - b))
            .sum::<f64>()
            / n;
        let tracking_error = mean_sq_diff.sqrt() * TRADING_DAYS.sqrt();

        let information_ratio = if tracking_error != 0.0 {
            Some((port_mean - bench_mean) * TRADING_DAYS / tracking_error)
        } else {
            None
        };

        let r_squared = if var_port != 0.0 && var_bench != 0.0 {
            Some(cov * cov / (var_port * var_bench))
        } else {
            None
        };

        SensitivityStats {
            beta,
            alpha,
            tracking_error,
            information_ratio,
            r_squared,
        }
    }

    fn into_metrics(self) -> Vec<Metric> {
        let mut metrics = Vec::with_capacity(5);

        metrics.push(match self.beta {
            Some(b) => Metric::computed(
                "Beta (vs S&P 500)",
                Some("Covariance with the benchmark per unit of benchmark variance."),
                format::ratio(b),
                Some(classify_inverted(b, &sentiment::BETA)),
            ),
            None => Metric::unavailable("Beta (vs S&P 500)", None),
        });

        metrics.push(match self.alpha {
            Some(a) => Metric::computed(
                "Alpha (ann.)",
                Some("Annualized excess return after adjusting for beta."),
                format::pct(a),
                Some(classify(a, &sentiment::ALPHA)),
            ),
            None => Metric::unavailable("Alpha (ann.)", None),
        });

        metrics.push(Metric::computed(
            "Tracking Error",
            None,
            format::pct(self.tracking_error),
            None,
        ));

        metrics.push(match self.information_ratio {
            Some(ir) => Metric::computed(
                "Information Ratio",
                None,
                format::ratio(ir),
                Some(classify(ir, &sentiment::INFO_RATIO)),
            ),
            None => Metric::unavailable("Information Ratio", None),
        });

        metrics.push(match self.r_squared {
            Some(r2) => Metric::computed("R²", None, format::pct1(r2), None),
            None => Metric::unavailable("R²", None),
        });

        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricValue;

    fn points(values: &[(&str, f64)]) -> Vec<PricePoint> {
        values
            .iter()
            .map(|(d, v)| PricePoint {
                date: d.to_string(),
                value_usd: *v,
            })
            .collect()
    }

    #[test]
    fn all_unavailable_without_benchmark() {
        let port = points(&[("2025-01-01", 100.0), ("2025-01-02", 101.0)]);
        let metrics = compute(&port, None);
        assert_eq!(metrics.len(), 5);
        assert!(metrics.iter().all(|m| !m.value.is_available()));
    }

    #[test]
    fn all_unavailable_with_empty_benchmark() {
        let port = points(&[("2025-01-01", 100.0), ("2025-01-02", 101.0)]);
        let metrics = compute(&port, Some(&[]));
        assert!(metrics.iter().all(|m| !m.value.is_available()));
    }

    #[test]
    fn beta_one_for_identical_series() {
        let port = points(&[
            ("2025-01-01", 100.0),
            ("2025-01-02", 102.0),
            ("2025-01-03", 99.0),
            ("2025-01-06", 103.0),
        ]);
        let metrics = compute(&port, Some(&port.clone()));
        let beta = metrics.iter().find(|m| m.label == "Beta (vs S&P 500)").unwrap();
        match &beta.value {
            MetricValue::Computed { text, .. } => assert_eq!(text, "1.00"),
            _ => panic!("beta should be computed"),
        }
        // Identical series: tracking error 0, so IR has no defined value.
        let te = metrics.iter().find(|m| m.label == "Tracking Error").unwrap();
        match &te.value {
            MetricValue::Computed { text, .. } => assert_eq!(text, "0.00%"),
            _ => panic!("tracking error should be computed"),
        }
        let ir = metrics
            .iter()
            .find(|m| m.label == "Information Ratio")
            .unwrap();
        assert!(!ir.value.is_available());
        let r2 = metrics.iter().find(|m| m.label == "R²").unwrap();
        match &r2.value {
            MetricValue::Computed { text, .. } => assert_eq!(text, "100.0%"),
            _ => panic!("r2 should be computed"),
        }
    }

    #[test]
    fn join_drops_dates_missing_from_benchmark() {
        let port = points(&[
            ("2025-01-01", 100.0),
            ("2025-01-02", 105.0),
            ("2025-01-03", 99.0),
            ("2025-01-06", 108.0),
        ]);
        // Benchmark has a gap on 01-02 and 01-03; only two aligned points
        // remain, which is exactly the minimum for one joined return.
        let bench = points(&[("2025-01-01", 400.0), ("2025-01-06", 404.0)]);
        let metrics = compute(&port, Some(&bench));
        // One return pair: zero benchmark variance, so beta is unavailable
        // while tracking error still computes from the shrunk sample.
        let beta = metrics.iter().find(|m| m.label == "Beta (vs S&P 500)").unwrap();
        assert!(!beta.value.is_available());
        let te = metrics.iter().find(|m| m.label == "Tracking Error").unwrap();
        assert!(te.value.is_available());
    }

    #[test]
    fn single_overlapping_date_is_insufficient() {
        let port = points(&[("2025-01-01", 100.0), ("2025-01-02", 105.0)]);
        let bench = points(&[("2025-01-01", 400.0)]);
        let metrics = compute(&port, Some(&bench));
        assert!(metrics.iter().all(|m| !m.value.is_available()));
    }
}
