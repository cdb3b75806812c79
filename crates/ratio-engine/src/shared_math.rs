//! Pure mathematical utilities shared by the section calculators.
//! Stateless functions with no I/O and no external state.

use statrs::statistics::Statistics;

/// Trading days per year, used uniformly for annualization.
pub const TRADING_DAYS: f64 = 252.0;

/// Annual risk-free rate constant.
pub const RISK_FREE_RATE: f64 = 0.04;

/// Daily simple returns from a value series: `(v[i+1] - v[i]) / v[i]`.
/// Returns `None` when fewer than 2 points exist or any denominator is
/// zero; metrics that depend on the return series degrade to the sentinel
/// in that case rather than halting the pipeline.
pub fn daily_returns(values: &[f64]) -> Option<Vec<f64>> {
    if values.len() < 2 {
        return None;
    }
    if values[..values.len() - 1].iter().any(|&v| v == 0.0) {
        return None;
    }
    Some(
        values
            .windows(2)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect(),
    )
}

/// CAGR implied by the first and last values: `(last/first)^(252/n) - 1`
/// where n is the number of price points.
pub fn cagr(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let first = values[0];
    let last = values[values.len() - 1];
    if first <= 0.0 {
        return None;
    }
    Some((last / first).powf(TRADING_DAYS / values.len() as f64) - 1.0)
}

/// Annualized return over the window ending at the last point and starting
/// exactly `k` trading days earlier, annualized by `1/years`.
pub fn rolling_annualized_return(values: &[f64], k: usize, years: f64) -> Option<f64> {
    if values.len() <= k {
        return None;
    }
    let start = values[values.len() - 1 - k];
    let end = values[values.len() - 1];
    if start <= 0.0 {
        return None;
    }
    Some((end / start).powf(1.0 / years) - 1.0)
}

/// Annualized volatility: sample standard deviation (Bessel-corrected) of
/// daily returns, scaled by sqrt(252).
pub fn annualized_volatility(returns: &[f64]) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }
    Some(returns.std_dev() * TRADING_DAYS.sqrt())
}

/// Annualized downside deviation: RMS of only the negative daily returns
/// (population form, divided by the count of negative returns). Zero when no
/// negative returns exist.
pub fn downside_deviation(returns: &[f64]) -> f64 {
    let negatives: Vec<f64> = returns.iter().copied().filter(|&r| r < 0.0).collect();
    if negatives.is_empty() {
        return 0.0;
    }
    let ms = negatives.iter().map(|r| r * r).sum::<f64>() / negatives.len() as f64;
    ms.sqrt() * TRADING_DAYS.sqrt()
}

/// Most negative drawdown from the running peak, as a fraction ≤ 0.
pub fn max_drawdown(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mut peak = values[0];
    let mut max_dd = 0.0_f64;
    for &v in values {
        if v > peak {
            peak = v;
        }
        if peak > 0.0 {
            let dd = v / peak - 1.0;
            if dd < max_dd {
                max_dd = dd;
            }
        }
    }
    Some(max_dd)
}

/// Ulcer index: RMS of percentage drawdowns across the whole series.
/// Penalizes depth and duration of drawdowns jointly.
pub fn ulcer_index(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mut peak = values[0];
    let mut sum_sq = 0.0;
    for &v in values {
        if v > peak {
            peak = v;
        }
        let dd_pct = if peak > 0.0 { (v / peak - 1.0) * 100.0 } else { 0.0 };
        sum_sq += dd_pct * dd_pct;
    }
    Some((sum_sq / values.len() as f64).sqrt())
}

/// Longest contiguous run of points strictly below the running peak, in
/// sample count (treated as days). Resets when a new peak is reached.
pub fn max_drawdown_duration(values: &[f64]) -> Option<usize> {
    if values.len() < 2 {
        return None;
    }
    let mut peak = values[0];
    let mut run = 0usize;
    let mut longest = 0usize;
    for &v in values {
        if v >= peak {
            peak = v;
            run = 0;
        } else {
            run += 1;
            if run > longest {
                longest = run;
            }
        }
    }
    Some(longest)
}

/// Population central moments (m2, m3, m4) about the mean.
pub fn central_moments(returns: &[f64]) -> (f64, f64, f64, f64) {
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &r in returns {
        let d = r - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    (mean, m2 / n, m3 / n, m4 / n)
}

/// Population covariance and the two population variances over paired
/// series. Caller guarantees equal lengths.
pub fn covariance_stats(xs: &[f64], ys: &[f64]) -> (f64, f64, f64, f64, f64) {
    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    (x_mean, y_mean, cov / n, var_x / n, var_y / n)
}
