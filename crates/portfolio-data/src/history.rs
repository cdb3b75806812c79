//! Simulated value histories: the portfolio series is rebuilt from
//! value-weighted asset returns and anchored so the last point equals the
//! current portfolio total; benchmark series simulate investing the same
//! initial value in the benchmark alone.

use portfolio_core::{PortfolioPriceHistory, PricePoint, UserProfile};

use crate::returns_store::ReturnStore;

pub fn simulate_history(profile: &UserProfile, store: &ReturnStore) -> PortfolioPriceHistory {
    let total = profile.portfolio.total_f64();
    let dates = store.dates();
    if total <= 0.0 || dates.is_empty() {
        tracing::debug!(total, "no simulatable history");
        return PortfolioPriceHistory::default();
    }

    // Weight map over holdings that have a return column. Cash has none, so
    // its weight is implicitly zero and dampens the simulated moves.
    let weighted: Vec<(f64, &[Option<f64>])> = profile
        .portfolio
        .holdings
        .iter()
        .filter_map(|h| {
            store
                .returns(&h.asset_id)
                .ok()
                .map(|r| (h.value_f64() / total, r))
        })
        .collect();

    // Weighted daily portfolio return; missing cells count as 0.
    let daily: Vec<f64> = (0..dates.len())
        .map(|i| {
            weighted
                .iter()
                .map(|(w, r)| w * r[i].unwrap_or(0.0))
                .sum()
        })
        .collect();

    // Cumulative growth factors, scaled so the last value equals the
    // current portfolio total.
    let mut growth = Vec::with_capacity(daily.len());
    let mut acc = 1.0;
    for r in &daily {
        acc *= 1.0 + r;
        growth.push(acc);
    }
    let last = match growth.last() {
        Some(&g) if g != 0.0 => g,
        _ => return PortfolioPriceHistory::default(),
    };

    let data: Vec<PricePoint> = dates
        .iter()
        .zip(growth.iter())
        .map(|(date, g)| PricePoint {
            date: date.clone(),
            value_usd: round2(total / last * g),
        })
        .collect();

    let initial = data[0].value_usd;
    let sp500 = store
        .sp500_returns()
        .map(|r| benchmark_series(dates, r, initial));
    let bitcoin = store
        .btc_returns()
        .map(|r| benchmark_series(dates, r, initial));

    PortfolioPriceHistory {
        data,
        sp500,
        bitcoin,
    }
}

/// A simulated investment of `initial` in the benchmark alone: grown by the
/// benchmark's return on each date it has one, dates without an observation
/// left out (gaps preserved for the date-keyed join downstream).
fn benchmark_series(dates: &[String], returns: &[Option<f64>], initial: f64) -> Vec<PricePoint> {
    let mut value = initial;
    let mut points = Vec::new();
    for (date, r) in dates.iter().zip(returns.iter()) {
        if let Some(r) = r {
            value *= 1.0 + r;
            points.push(PricePoint {
                date: date.clone(),
                value_usd: round2(value),
            });
        }
    }
    points
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_custom_profile, CustomHolding, CustomPortfolioRequest};
    use crate::catalog::FileCatalog;
    use rust_decimal_macros::dec;

    const CSV: &str = "\
Date,VTI_Close,VTI_return,BND_Close,BND_return,GSPC_return
2025-01-02,240.0,0.01,72.0,0.002,0.005
2025-01-03,242.4,0.02,72.36,0.001,
2025-01-06,244.8,-0.01,72.29,-0.001,0.003
";

    fn store() -> ReturnStore {
        ReturnStore::from_reader(CSV.as_bytes()).unwrap()
    }

    fn profile(cash: rust_decimal::Decimal, vti: rust_decimal::Decimal) -> UserProfile {
        let catalog = FileCatalog::from_json(
            r#"[
                {"assetId": "CASH_USD", "name": "Cash", "assetClass": "cash"},
                {"assetId": "VTI", "name": "Total Stock Market", "assetClass": "stocks", "ticker": "VTI"}
            ]"#,
        )
        .unwrap();
        let request = CustomPortfolioRequest {
            holdings: vec![
                CustomHolding {
                    asset_id: "CASH_USD".to_string(),
                    value_usd: cash,
                },
                CustomHolding {
                    asset_id: "VTI".to_string(),
                    value_usd: vti,
                },
            ],
        };
        build_custom_profile(&catalog, &request).unwrap()
    }

    #[test]
    fn last_value_equals_portfolio_total() {
        let history = simulate_history(&profile(dec!(500), dec!(1500)), &store());
        assert_eq!(history.data.len(), 3);
        assert!((history.data.last().unwrap().value_usd - 2000.0).abs() < 0.01);
    }

    #[test]
    fn cash_only_portfolio_is_flat() {
        let history = simulate_history(&profile(dec!(2000), dec!(0)), &store());
        // VTI weight 0, cash has no return column: every point is the total.
        for p in &history.data {
            assert!((p.value_usd - 2000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn benchmark_starts_from_portfolio_initial_value() {
        let history = simulate_history(&profile(dec!(0), dec!(2000)), &store());
        let sp500 = history.sp500.unwrap();
        let initial = history.data[0].value_usd;
        // First benchmark point is the initial stake grown by the first
        // observed benchmark return.
        assert!((sp500[0].value_usd - round2(initial * 1.005)).abs() < 0.01);
        // The gap on 2025-01-03 is preserved: only two benchmark points.
        assert_eq!(sp500.len(), 2);
        assert_eq!(sp500[1].date, "2025-01-06");
    }

    #[test]
    fn empty_portfolio_yields_empty_history() {
        let history = simulate_history(&profile(dec!(0), dec!(0)), &store());
        assert!(history.data.is_empty());
        assert!(history.sp500.is_none());
    }

    #[test]
    fn weighted_returns_use_value_weights() {
        let history = simulate_history(&profile(dec!(1000), dec!(1000)), &store());
        // Day-1 weighted return: 0.5 * 0.01; growth anchored at the end.
        let g: Vec<f64> = vec![1.005, 1.005 * 1.01, 1.005 * 1.01 * 0.995];
        let expected_first = 2000.0 / g[2] * g[0];
        assert!((history.data[0].value_usd - round2(expected_first)).abs() < 0.01);
    }
}
