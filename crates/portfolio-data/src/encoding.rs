//! Holdings wire format for cross-page transfer: a comma-separated list of
//! `urlEncode(assetId):valueUSD` pairs.

use rust_decimal::Decimal;

use crate::builder::CustomHolding;

/// Encode holdings for transfer. Pairs with non-positive value are dropped
/// before submission.
pub fn encode_holdings(holdings: &[CustomHolding]) -> String {
    holdings
        .iter()
        .filter(|h| h.value_usd > Decimal::ZERO)
        .map(|h| format!("{}:{}", urlencoding::encode(&h.asset_id), h.value_usd))
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode the wire string back into selections. The value parses as a
/// number, defaulting to 0 on parse failure; a pair without a colon is an
/// id with value 0.
pub fn decode_holdings(encoded: &str) -> Vec<CustomHolding> {
    encoded
        .split(',')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (raw_id, raw_value) = match pair.split_once(':') {
                Some((id, value)) => (id, value),
                None => (pair, ""),
            };
            let asset_id = urlencoding::decode(raw_id)
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| raw_id.to_string());
            let value_usd = raw_value.parse::<Decimal>().unwrap_or(Decimal::ZERO);
            CustomHolding {
                asset_id,
                value_usd,
            }
        })
        .collect()
}
