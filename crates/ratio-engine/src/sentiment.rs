//! Per-metric sentiment threshold tables.
//!
//! Each table is an ordered list of (bound, sentiment) pairs evaluated by
//! linear scan, best bucket first; values missing every bound fall to
//! VeryNegative. Tables are metric-specific constants, asymmetric where
//! the metric's domain is (drawdown bounds are all negative), and are not
//! derived from a shared scale.

use crate::models::Sentiment;

pub type Scale = [(f64, Sentiment); 3];

/// Higher is better: the first bound the value meets or exceeds wins.
pub fn classify(value: f64, scale: &Scale) -> Sentiment {
    for &(bound, sentiment) in scale {
        if value >= bound {
            return sentiment;
        }
    }
    Sentiment::VeryNegative
}

/// Lower is better: the first bound the value stays at or under wins.
pub fn classify_inverted(value: f64, scale: &Scale) -> Sentiment {
    for &(bound, sentiment) in scale {
        if value <= bound {
            return sentiment;
        }
    }
    Sentiment::VeryNegative
}

use Sentiment::{Neutral, Positive, SlightlyNegative};

// Return quality. The CAGR bounds also grade the rolling annualized
// returns; all four are annual growth rates on the same scale.
pub const CAGR: Scale = [(0.10, Positive), (0.0, Neutral), (-0.05, SlightlyNegative)];

// Risk beyond Sharpe.
pub const SORTINO: Scale = [(1.5, Positive), (0.5, Neutral), (0.0, SlightlyNegative)];
pub const DOWNSIDE_DEV: Scale = [(0.10, Positive), (0.20, Neutral), (0.30, SlightlyNegative)];
pub const MAX_DRAWDOWN: Scale = [(-0.10, Positive), (-0.20, Neutral), (-0.35, SlightlyNegative)];
pub const CALMAR: Scale = [(1.0, Positive), (0.5, Neutral), (0.0, SlightlyNegative)];
pub const ULCER: Scale = [(5.0, Positive), (10.0, Neutral), (20.0, SlightlyNegative)];
pub const DD_DURATION: Scale = [(60.0, Positive), (120.0, Neutral), (250.0, SlightlyNegative)];

// Market sensitivity.
pub const BETA: Scale = [(0.8, Positive), (1.2, Neutral), (1.6, SlightlyNegative)];
pub const ALPHA: Scale = [(0.02, Positive), (0.0, Neutral), (-0.02, SlightlyNegative)];
pub const INFO_RATIO: Scale = [(0.5, Positive), (0.0, Neutral), (-0.5, SlightlyNegative)];

// Tail risk. VaR/CVaR are daily returns in the negative domain; less
// negative is better, so the higher-is-better scan applies directly.
pub const VAR_95: Scale = [(-0.01, Positive), (-0.02, Neutral), (-0.04, SlightlyNegative)];
pub const VAR_99: Scale = [(-0.02, Positive), (-0.04, Neutral), (-0.07, SlightlyNegative)];
pub const CVAR_95: Scale = [(-0.015, Positive), (-0.03, Neutral), (-0.05, SlightlyNegative)];
pub const SKEWNESS: Scale = [(0.3, Positive), (-0.3, Neutral), (-1.0, SlightlyNegative)];
pub const KURTOSIS: Scale = [(1.0, Positive), (3.0, Neutral), (6.0, SlightlyNegative)];

// Concentration.
pub const HHI: Scale = [(0.15, Positive), (0.30, Neutral), (0.50, SlightlyNegative)];
pub const EFFECTIVE_N: Scale = [(7.0, Positive), (4.0, Neutral), (2.0, SlightlyNegative)];
pub const TOP_HOLDING: Scale = [(0.20, Positive), (0.35, Neutral), (0.55, SlightlyNegative)];
pub const TOP_5: Scale = [(0.60, Positive), (0.80, Neutral), (0.90, SlightlyNegative)];
pub const TOP_10: Scale = [(0.80, Positive), (0.90, Neutral), (0.97, SlightlyNegative)];

// Volatility and practical metrics.
pub const VOLATILITY: Scale = [(0.10, Positive), (0.20, Neutral), (0.35, SlightlyNegative)];
pub const SHARPE: Scale = [(1.0, Positive), (0.5, Neutral), (0.0, SlightlyNegative)];
pub const LIQUIDITY: Scale = [(0.50, Positive), (0.25, Neutral), (0.10, SlightlyNegative)];
