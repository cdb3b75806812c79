use async_trait::async_trait;

use crate::{Asset, DataError, PortfolioPriceHistory, UserProfile};

/// Source of user profiles (backend portfolio service).
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn load_profile(&self, user_id: &str) -> Result<UserProfile, DataError>;
}

/// Source of portfolio and benchmark value series (backend price-simulation
/// service).
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    async fn price_history(&self, profile: &UserProfile)
        -> Result<PortfolioPriceHistory, DataError>;
}

/// Source of the selectable asset catalog.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    async fn list_assets(&self) -> Result<Vec<Asset>, DataError>;
}
