use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Broad asset classification used for allocation math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Cash,
    Stocks,
    Bonds,
    Crypto,
}

/// Catalog entry for a selectable asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "assetId")]
    pub asset_id: String,
    pub name: String,
    #[serde(rename = "assetClass")]
    pub asset_class: AssetClass,
    #[serde(default)]
    pub ticker: Option<String>,
}

/// A position in a user's portfolio. Identity is `asset_id`, unique within
/// the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    #[serde(rename = "assetId")]
    pub asset_id: String,
    pub name: String,
    #[serde(rename = "assetClass")]
    pub asset_class: AssetClass,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(rename = "valueUSD")]
    pub value_usd: Decimal,
}

impl Holding {
    pub fn value_f64(&self) -> f64 {
        self.value_usd.to_f64().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    #[serde(rename = "totalValueUSD")]
    pub total_value_usd: Decimal,
}

/// Value-weighted share per asset class, fractions in [0, 1].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationApprox {
    pub cash: f64,
    pub stocks: f64,
    pub bonds: f64,
    pub crypto: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub notes: String,
    pub holdings: Vec<Holding>,
    pub totals: Totals,
    #[serde(rename = "allocationApprox")]
    pub allocation_approx: AllocationApprox,
}

impl Portfolio {
    /// Build a portfolio from holdings, deriving totals and the approximate
    /// allocation breakdown. Totals are always recomputed from the holdings,
    /// never carried independently.
    pub fn from_holdings(name: &str, notes: &str, holdings: Vec<Holding>) -> Self {
        let total: Decimal = holdings.iter().map(|h| h.value_usd).sum();
        let allocation_approx = Self::allocation_for(&holdings, total);
        Portfolio {
            name: name.to_string(),
            notes: notes.to_string(),
            holdings,
            totals: Totals {
                total_value_usd: total,
            },
            allocation_approx,
        }
    }

    fn allocation_for(holdings: &[Holding], total: Decimal) -> AllocationApprox {
        let total = total.to_f64().unwrap_or(0.0);
        if total <= 0.0 {
            return AllocationApprox::default();
        }
        let mut alloc = AllocationApprox::default();
        for h in holdings {
            let share = h.value_f64() / total;
            match h.asset_class {
                AssetClass::Cash => alloc.cash += share,
                AssetClass::Stocks => alloc.stocks += share,
                AssetClass::Bonds => alloc.bonds += share,
                AssetClass::Crypto => alloc.crypto += share,
            }
        }
        alloc
    }

    pub fn total_f64(&self) -> f64 {
        self.totals.total_value_usd.to_f64().unwrap_or(0.0)
    }
}

/// Immutable snapshot of one user's finances for the duration of an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(rename = "asOf")]
    pub as_of: NaiveDate,
    #[serde(rename = "baseCurrency", default = "default_currency")]
    pub base_currency: String,
    #[serde(rename = "netWorthUSD")]
    pub net_worth_usd: Decimal,
    pub portfolio: Portfolio,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// One point of a value time series; `date` is an ISO `YYYY-MM-DD` string,
/// one point per trading day, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    #[serde(rename = "valueUSD")]
    pub value_usd: f64,
}

/// Portfolio value series plus optional benchmark series. Benchmark series
/// may have gaps relative to `data` and must be joined by date key, not by
/// positional index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioPriceHistory {
    pub data: Vec<PricePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp500: Option<Vec<PricePoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitcoin: Option<Vec<PricePoint>>,
}
