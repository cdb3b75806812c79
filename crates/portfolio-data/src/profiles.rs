//! User profile files: `{user_id}.json` in the data directory, falling back
//! to the bundled test profile when the id is unknown.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use portfolio_core::{DataError, Holding, Portfolio, UserProfile};
use serde::Deserialize;

const FALLBACK_PROFILE: &str = "test_user.json";

/// On-disk profile shape. Totals and net worth are never trusted from the
/// file; both are recomputed from the holdings on load.
#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(rename = "userId")]
    user_id: String,
    name: Option<String>,
    #[serde(rename = "asOf")]
    as_of: NaiveDate,
    #[serde(rename = "baseCurrency")]
    base_currency: Option<String>,
    portfolio: PortfolioFile,
}

#[derive(Debug, Deserialize)]
struct PortfolioFile {
    name: String,
    #[serde(default)]
    notes: String,
    holdings: Vec<Holding>,
}

pub fn load_profile(data_dir: &Path, user_id: &str) -> Result<UserProfile, DataError> {
    let mut path: PathBuf = data_dir.join(format!("{user_id}.json"));
    if !path.exists() {
        tracing::debug!(user_id, "profile not found, using fallback");
        path = data_dir.join(FALLBACK_PROFILE);
    }
    if !path.exists() {
        return Err(DataError::ProfileNotFound(user_id.to_string()));
    }
    let raw = fs::read_to_string(&path)
        .map_err(|e| DataError::FileError(format!("{}: {e}", path.display())))?;
    parse_profile(&raw)
}

pub fn parse_profile(raw: &str) -> Result<UserProfile, DataError> {
    let file: ProfileFile = serde_json::from_str(raw)?;
    let portfolio = Portfolio::from_holdings(
        &file.portfolio.name,
        &file.portfolio.notes,
        file.portfolio.holdings,
    );
    Ok(UserProfile {
        name: file.name.unwrap_or_else(|| file.user_id.clone()),
        user_id: file.user_id,
        as_of: file.as_of,
        base_currency: file.base_currency.unwrap_or_else(|| "USD".to_string()),
        net_worth_usd: portfolio.totals.total_value_usd,
        portfolio,
    })
}
