//! Category 1: return quality.

use crate::engine::SeriesContext;
use crate::format;
use crate::models::Metric;
use crate::sentiment::{self, classify};
use crate::shared_math;

pub fn compute(ctx: &SeriesContext) -> Vec<Metric> {
    let mut metrics = Vec::with_capacity(5);

    metrics.push(match ctx.cagr {
        Some(c) => Metric::computed(
            "CAGR",
            Some("Compound annual growth rate implied by the first and last portfolio values."),
            format::pct(c),
            Some(classify(c, &sentiment::CAGR)),
        ),
        None => Metric::unavailable("CAGR", None),
    });

    // No deposit/withdrawal ledger exists, so a money-weighted return can
    // never be computed. Permanently unavailable, not a bug.
    metrics.push(Metric::unavailable(
        "TWR vs IRR",
        Some("Money-weighted return requires a deposit and withdrawal ledger."),
    ));

    for (label, k, years) in [
        ("Rolling 1Y Return", 252usize, 1.0),
        ("Rolling 3Y Return", 756, 3.0),
        ("Rolling 5Y Return", 1260, 5.0),
    ] {
        let metric = match shared_math::rolling_annualized_return(&ctx.values, k, years) {
            Some(r) => Metric::computed(
                label,
                None,
                format::pct(r),
                Some(classify(r, &sentiment::CAGR)),
            ),
            None => Metric::unavailable(label, None),
        };
        metrics.push(metric);
    }

    metrics
}
