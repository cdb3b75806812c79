//! Custom portfolio construction from (assetId, valueUSD) selections.

use chrono::Utc;
use portfolio_core::{DataError, Holding, Portfolio, UserProfile};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::FileCatalog;

/// One selection coming off the wire: asset id plus assigned USD value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomHolding {
    #[serde(rename = "assetId")]
    pub asset_id: String,
    #[serde(rename = "valueUSD")]
    pub value_usd: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPortfolioRequest {
    pub holdings: Vec<CustomHolding>,
}

/// Resolve the selections against the catalog and build a full profile.
/// Unknown asset ids are rejected; totals, allocation and net worth are
/// derived, asOf is today.
pub fn build_custom_profile(
    catalog: &FileCatalog,
    request: &CustomPortfolioRequest,
) -> Result<UserProfile, DataError> {
    let mut holdings = Vec::with_capacity(request.holdings.len());
    for selection in &request.holdings {
        let asset = catalog.find(&selection.asset_id)?;
        holdings.push(Holding {
            asset_id: asset.asset_id.clone(),
            name: asset.name.clone(),
            asset_class: asset.asset_class,
            ticker: asset.ticker.clone(),
            value_usd: selection.value_usd,
        });
    }

    let portfolio = Portfolio::from_holdings("Custom Portfolio", "", holdings);
    Ok(UserProfile {
        user_id: "custom".to_string(),
        name: "Custom Portfolio".to_string(),
        as_of: Utc::now().date_naive(),
        base_currency: "USD".to_string(),
        net_worth_usd: portfolio.totals.total_value_usd,
        portfolio,
    })
}
