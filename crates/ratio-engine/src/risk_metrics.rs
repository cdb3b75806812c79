//! Category 2 (risk beyond Sharpe) and the legacy-compatible category 7
//! volatility/Sharpe section computed from the same inputs.

use crate::engine::SeriesContext;
use crate::format;
use crate::models::Metric;
use crate::sentiment::{self, classify, classify_inverted};
use crate::shared_math::{self, RISK_FREE_RATE};

pub fn compute(ctx: &SeriesContext) -> Vec<Metric> {
    let mut metrics = Vec::with_capacity(6);

    let downside_dev = ctx.returns.as_deref().map(shared_math::downside_deviation);

    // Sortino reuses the section-1 CAGR; the two figures are mathematically
    // required to agree.
    let sortino = match (ctx.cagr, downside_dev) {
        (Some(c), Some(dd)) if dd != 0.0 => Some((c - RISK_FREE_RATE) / dd),
        _ => None,
    };
    metrics.push(match sortino {
        Some(s) => Metric::computed(
            "Sortino Ratio",
            Some("Excess return per unit of downside deviation."),
            format::ratio(s),
            Some(classify(s, &sentiment::SORTINO)),
        ),
        None => Metric::unavailable("Sortino Ratio", None),
    });

    metrics.push(match downside_dev {
        Some(dd) => Metric::computed(
            "Downside Deviation",
            Some("Annualized RMS of the negative daily returns only."),
            format::pct(dd),
            Some(classify_inverted(dd, &sentiment::DOWNSIDE_DEV)),
        ),
        None => Metric::unavailable("Downside Deviation", None),
    });

    let max_dd = shared_math::max_drawdown(&ctx.values);
    metrics.push(match max_dd {
        Some(dd) => Metric::computed(
            "Max Drawdown",
            Some("Deepest decline from a running peak."),
            format::pct(dd),
            Some(classify(dd, &sentiment::MAX_DRAWDOWN)),
        ),
        None => Metric::unavailable("Max Drawdown", None),
    });

    let calmar = match (ctx.cagr, max_dd) {
        (Some(c), Some(dd)) if dd != 0.0 => Some(c / dd.abs()),
        _ => None,
    };
    metrics.push(match calmar {
        Some(c) => Metric::computed(
            "Calmar Ratio",
            None,
            format::ratio(c),
            Some(classify(c, &sentiment::CALMAR)),
        ),
        None => Metric::unavailable("Calmar Ratio", None),
    });

    metrics.push(match shared_math::ulcer_index(&ctx.values) {
        Some(u) => Metric::computed(
            "Ulcer Index",
            Some("RMS of percentage drawdowns; penalizes depth and duration jointly."),
            format::ratio(u),
            Some(classify_inverted(u, &sentiment::ULCER)),
        ),
        None => Metric::unavailable("Ulcer Index", None),
    });

    metrics.push(match shared_math::max_drawdown_duration(&ctx.values) {
        Some(d) => Metric::computed(
            "Max Drawdown Duration",
            None,
            format::days(d),
            Some(classify_inverted(d as f64, &sentiment::DD_DURATION)),
        ),
        None => Metric::unavailable("Max Drawdown Duration", None),
    });

    metrics
}

/// Category 7: annualized volatility and Sharpe, duplicated from the risk
/// inputs as its own section.
pub fn compute_volatility_section(ctx: &SeriesContext) -> Vec<Metric> {
    let mut metrics = Vec::with_capacity(2);

    let ann_vol = ctx
        .returns
        .as_deref()
        .and_then(shared_math::annualized_volatility);
    metrics.push(match ann_vol {
        Some(v) => Metric::computed(
            "Volatility (ann.)",
            None,
            format::pct(v),
            Some(classify_inverted(v, &sentiment::VOLATILITY)),
        ),
        None => Metric::unavailable("Volatility (ann.)", None),
    });

    let sharpe = match (ctx.cagr, ann_vol) {
        (Some(c), Some(v)) if v != 0.0 => Some((c - RISK_FREE_RATE) / v),
        _ => None,
    };
    metrics.push(match sharpe {
        Some(s) => Metric::computed(
            "Sharpe Ratio",
            Some("Excess return per unit of total volatility."),
            format::ratio(s),
            Some(classify(s, &sentiment::SHARPE)),
        ),
        None => Metric::unavailable("Sharpe Ratio", None),
    });

    metrics
}
