//! Assembly of the full ratio sheet: run every calculator, then filter.

use portfolio_core::{PortfolioPriceHistory, UserProfile};

use crate::models::{Metric, MetricValue, Ratio, RatioSection};
use crate::{holdings_metrics, market_sensitivity, return_quality, risk_metrics, shared_math, tail_risk};

/// Derived inputs shared by the series-based calculators, computed once per
/// invocation so every consumer of CAGR sees the same figure.
pub struct SeriesContext {
    pub values: Vec<f64>,
    pub returns: Option<Vec<f64>>,
    pub cagr: Option<f64>,
}

impl SeriesContext {
    pub fn from_values(values: Vec<f64>) -> Self {
        let returns = shared_math::daily_returns(&values);
        let cagr = shared_math::cagr(&values);
        SeriesContext {
            values,
            returns,
            cagr,
        }
    }
}

/// The ratio computation engine: a stateless pure function from one user
/// profile plus a price history to an ordered list of ratio sections.
/// Insufficient data never fails the call; affected metrics degrade to the
/// sentinel and are filtered out of the result.
pub struct RatioEngine;

impl RatioEngine {
    pub fn analyze(profile: &UserProfile, history: &PortfolioPriceHistory) -> Vec<RatioSection> {
        let values: Vec<f64> = history.data.iter().map(|p| p.value_usd).collect();
        let ctx = SeriesContext::from_values(values);
        let holdings = &profile.portfolio.holdings;

        // Every calculator always runs to completion for the data it is
        // given; filtering is a final pass, not an early exit.
        let sections = vec![
            section(
                "return-quality",
                "Return Quality",
                Some("How the portfolio value has compounded over time."),
                return_quality::compute(&ctx),
            ),
            section(
                "risk-beyond-sharpe",
                "Risk Beyond Sharpe",
                Some("Downside- and drawdown-focused risk measures."),
                risk_metrics::compute(&ctx),
            ),
            section(
                "market-sensitivity",
                "Market Sensitivity",
                Some("Behavior relative to the S&P 500."),
                market_sensitivity::compute(&history.data, history.sp500.as_deref()),
            ),
            section(
                "tail-risk",
                "Tail Risk",
                Some("What the worst days look like."),
                tail_risk::compute(&ctx),
            ),
            section(
                "concentration",
                "Concentration & Diversification",
                None,
                holdings_metrics::compute_concentration(holdings),
            ),
            section(
                "allocation",
                "Allocation",
                Some("Value-weighted share per asset class."),
                holdings_metrics::compute_allocation(holdings),
            ),
            section(
                "volatility",
                "Volatility & Sharpe",
                None,
                risk_metrics::compute_volatility_section(&ctx),
            ),
            section(
                "practical",
                "Practical Metrics",
                None,
                holdings_metrics::compute_practical(holdings),
            ),
        ];

        sections
            .into_iter()
            .filter(|s| !s.ratios.is_empty())
            .collect()
    }
}

/// Convert a calculator's metric slots into a public section, dropping
/// every unavailable slot.
fn section(
    id: &str,
    title: &str,
    description: Option<&str>,
    metrics: Vec<Metric>,
) -> RatioSection {
    let ratios = metrics
        .into_iter()
        .filter_map(|m| match m.value {
            MetricValue::Computed { text, sentiment } => Some(Ratio {
                label: m.label.to_string(),
                value: text,
                description: m.description.map(str::to_string),
                sentiment,
            }),
            MetricValue::Unavailable => None,
        })
        .collect();

    RatioSection {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        ratios,
    }
}
