//! Categories 5, 6 and 8: concentration, allocation and practical metrics,
//! all computed from the holdings list alone.

use portfolio_core::{AssetClass, Holding};

use crate::format;
use crate::models::Metric;
use crate::sentiment::{self, classify, classify_inverted};

/// Category 5: concentration and diversification from holding weights.
pub fn compute_concentration(holdings: &[Holding]) -> Vec<Metric> {
    let total: f64 = holdings.iter().map(|h| h.value_f64()).sum();
    let mut metrics = Vec::with_capacity(7);

    if total > 0.0 && !holdings.is_empty() {
        let mut values: Vec<f64> = holdings.iter().map(|h| h.value_f64()).collect();
        values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        let weights: Vec<f64> = values.iter().map(|v| v / total).collect();
        let hhi: f64 = weights.iter().map(|w| w * w).sum();

        metrics.push(Metric::computed(
            "HHI",
            Some("Herfindahl-Hirschman index: sum of squared portfolio weights."),
            format::index3(hhi),
            Some(classify_inverted(hhi, &sentiment::HHI)),
        ));

        let effective_n = 1.0 / hhi;
        metrics.push(Metric::computed(
            "Effective Number of Holdings",
            None,
            format::count1(effective_n),
            Some(classify(effective_n, &sentiment::EFFECTIVE_N)),
        ));

        for (label, k, scale) in [
            ("Top Holding Weight", 1usize, &sentiment::TOP_HOLDING),
            ("Top 5 Weight", 5, &sentiment::TOP_5),
            ("Top 10 Weight", 10, &sentiment::TOP_10),
        ] {
            let top: f64 = weights.iter().take(k).sum();
            metrics.push(Metric::computed(
                label,
                None,
                format::pct(top),
                Some(classify_inverted(top, scale)),
            ));
        }
    } else {
        for label in [
            "HHI",
            "Effective Number of Holdings",
            "Top Holding Weight",
            "Top 5 Weight",
            "Top 10 Weight",
        ] {
            metrics.push(Metric::unavailable(label, None));
        }
    }

    // These need asset sector classification and per-asset return series,
    // neither of which this system ingests.
    metrics.push(Metric::unavailable(
        "Sector Concentration",
        Some("Requires sector classification per asset."),
    ));
    metrics.push(Metric::unavailable(
        "Avg Pairwise Correlation",
        Some("Requires per-asset return series."),
    ));

    metrics
}

/// Category 6: value-weighted allocation share per asset class. Cash,
/// stocks and bonds always report; crypto only when nonzero.
pub fn compute_allocation(holdings: &[Holding]) -> Vec<Metric> {
    let total: f64 = holdings.iter().map(|h| h.value_f64()).sum();
    let mut metrics = Vec::with_capacity(4);

    if total <= 0.0 {
        for label in ["Cash %", "Stocks %", "Bonds %", "Crypto %"] {
            metrics.push(Metric::unavailable(label, None));
        }
        return metrics;
    }

    let class_value = |class: AssetClass| -> f64 {
        holdings
            .iter()
            .filter(|h| h.asset_class == class)
            .map(|h| h.value_f64())
            .sum()
    };

    for (label, class) in [
        ("Cash %", AssetClass::Cash),
        ("Stocks %", AssetClass::Stocks),
        ("Bonds %", AssetClass::Bonds),
    ] {
        metrics.push(Metric::computed(
            label,
            None,
            format::pct(class_value(class) / total),
            None,
        ));
    }

    let crypto = class_value(AssetClass::Crypto);
    metrics.push(if crypto > 0.0 {
        Metric::computed("Crypto %", None, format::pct(crypto / total), None)
    } else {
        Metric::unavailable("Crypto %", None)
    });

    metrics
}

/// Category 8: practical metrics. Only the liquidity heuristic is
/// computable from a holdings snapshot.
pub fn compute_practical(holdings: &[Holding]) -> Vec<Metric> {
    let total: f64 = holdings.iter().map(|h| h.value_f64()).sum();
    let mut metrics = Vec::with_capacity(4);

    // Same-day-liquidity estimate: cash at full weight, bonds at 80%.
    metrics.push(if total > 0.0 {
        let cash: f64 = holdings
            .iter()
            .filter(|h| h.asset_class == AssetClass::Cash)
            .map(|h| h.value_f64())
            .sum();
        let bonds: f64 = holdings
            .iter()
            .filter(|h| h.asset_class == AssetClass::Bonds)
            .map(|h| h.value_f64())
            .sum();
        let score = (cash + 0.8 * bonds) / total;
        Metric::computed(
            "Liquidity Score (est.)",
            Some("Share of the portfolio convertible to cash same-day."),
            format::pct(score),
            Some(classify(score, &sentiment::LIQUIDITY)),
        )
    } else {
        Metric::unavailable("Liquidity Score (est.)", None)
    });

    metrics.push(Metric::unavailable(
        "Turnover",
        Some("Requires trade history."),
    ));
    metrics.push(Metric::unavailable(
        "Fee Drag",
        Some("Requires expense-ratio data."),
    ));
    metrics.push(Metric::unavailable(
        "Tax Drag",
        Some("Requires lot-level tax tracking."),
    ));

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricValue;
    use rust_decimal::prelude::*;

    fn holding(id: &str, class: AssetClass, value: f64) -> Holding {
        Holding {
            asset_id: id.to_string(),
            name: id.to_string(),
            asset_class: class,
            ticker: None,
            value_usd: Decimal::from_f64(value).unwrap_or_default(),
        }
    }

    fn text_of<'a>(metrics: &'a [Metric], label: &str) -> &'a str {
        match &metrics.iter().find(|m| m.label == label).unwrap().value {
            MetricValue::Computed { text, .. } => text,
            MetricValue::Unavailable => panic!("{label} should be computed"),
        }
    }

    #[test]
    fn two_holding_concentration() {
        // {cash 500, stocks 1500}: HHI = 0.75² + 0.25² = 0.625,
        // effective N = 1.6, top holding 75%.
        let holdings = vec![
            holding("CASH_USD", AssetClass::Cash, 500.0),
            holding("VTI", AssetClass::Stocks, 1500.0),
        ];
        let conc = compute_concentration(&holdings);
        assert_eq!(text_of(&conc, "HHI"), "0.625");
        assert_eq!(text_of(&conc, "Effective Number of Holdings"), "1.6");
        assert_eq!(text_of(&conc, "Top Holding Weight"), "75.00%");
        assert_eq!(text_of(&conc, "Top 5 Weight"), "100.00%");

        let alloc = compute_allocation(&holdings);
        assert_eq!(text_of(&alloc, "Cash %"), "25.00%");
        assert_eq!(text_of(&alloc, "Stocks %"), "75.00%");
        assert_eq!(text_of(&alloc, "Bonds %"), "0.00%");
        // No crypto holdings: the slot stays unavailable.
        let crypto = alloc.iter().find(|m| m.label == "Crypto %").unwrap();
        assert!(!crypto.value.is_available());
    }

    #[test]
    fn zero_total_makes_everything_unavailable() {
        let holdings = vec![holding("VTI", AssetClass::Stocks, 0.0)];
        assert!(compute_concentration(&holdings)
            .iter()
            .all(|m| !m.value.is_available()));
        assert!(compute_allocation(&holdings)
            .iter()
            .all(|m| !m.value.is_available()));
        assert!(compute_practical(&holdings)
            .iter()
            .all(|m| !m.value.is_available()));
    }

    #[test]
    fn zero_value_holding_participates_without_special_casing() {
        let holdings = vec![
            holding("VTI", AssetClass::Stocks, 1000.0),
            holding("BND", AssetClass::Bonds, 0.0),
        ];
        let conc = compute_concentration(&holdings);
        // The zero holding contributes weight 0: HHI = 1.0, effective N = 1.
        assert_eq!(text_of(&conc, "HHI"), "1.000");
        assert_eq!(text_of(&conc, "Effective Number of Holdings"), "1.0");
    }

    #[test]
    fn weight_sum_invariants() {
        let holdings = vec![
            holding("A", AssetClass::Stocks, 300.0),
            holding("B", AssetClass::Stocks, 300.0),
            holding("C", AssetClass::Bonds, 200.0),
            holding("D", AssetClass::Cash, 200.0),
        ];
        let total = 1000.0;
        let weights: Vec<f64> = holdings.iter().map(|h| h.value_f64() / total).collect();
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        let hhi: f64 = weights.iter().map(|w| w * w).sum();
        assert!(hhi > 0.0 && hhi <= 1.0);
        let eff_n = 1.0 / hhi;
        assert!(eff_n >= 1.0 && eff_n <= holdings.len() as f64);
    }

    #[test]
    fn liquidity_weights_bonds_at_80_percent() {
        let holdings = vec![
            holding("CASH_USD", AssetClass::Cash, 200.0),
            holding("BND", AssetClass::Bonds, 500.0),
            holding("VTI", AssetClass::Stocks, 300.0),
        ];
        let practical = compute_practical(&holdings);
        // (200 + 0.8 * 500) / 1000 = 60%.
        assert_eq!(text_of(&practical, "Liquidity Score (est.)"), "60.00%");
        // Ledger-dependent metrics are permanently unavailable.
        for label in ["Turnover", "Fee Drag", "Tax Drag"] {
            let m = practical.iter().find(|m| m.label == label).unwrap();
            assert!(!m.value.is_available());
        }
    }
}
