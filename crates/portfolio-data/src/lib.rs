pub mod builder;
pub mod catalog;
pub mod encoding;
pub mod history;
pub mod profiles;
pub mod returns_store;

pub use builder::{build_custom_profile, CustomHolding, CustomPortfolioRequest};
pub use catalog::FileCatalog;
pub use encoding::{decode_holdings, encode_holdings};
pub use history::simulate_history;
pub use returns_store::ReturnStore;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use portfolio_core::{
    Asset, AssetCatalog, DataError, PortfolioPriceHistory, PriceHistoryProvider, ProfileProvider,
    UserProfile,
};

const ASSETS_FILE: &str = "assets.json";
const RETURNS_FILE: &str = "assets_close_returns.csv";

/// The backend data service: asset catalog plus the return store, loaded
/// once at startup; profiles are read from the data directory per request.
pub struct DataService {
    data_dir: PathBuf,
    catalog: FileCatalog,
    store: ReturnStore,
}

impl DataService {
    pub fn load(data_dir: &Path) -> Result<Self, DataError> {
        let catalog = FileCatalog::from_path(&data_dir.join(ASSETS_FILE))?;
        let store = ReturnStore::from_path(&data_dir.join(RETURNS_FILE))?;
        tracing::info!(
            assets = catalog.assets().len(),
            trading_days = store.dates().len(),
            "data service ready"
        );
        Ok(Self::new(data_dir.to_path_buf(), catalog, store))
    }

    pub fn new(data_dir: PathBuf, catalog: FileCatalog, store: ReturnStore) -> Self {
        DataService {
            data_dir,
            catalog,
            store,
        }
    }

    pub fn catalog(&self) -> &FileCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &ReturnStore {
        &self.store
    }

    pub fn custom_profile(
        &self,
        request: &CustomPortfolioRequest,
    ) -> Result<UserProfile, DataError> {
        build_custom_profile(&self.catalog, request)
    }
}

#[async_trait]
impl AssetCatalog for DataService {
    async fn list_assets(&self) -> Result<Vec<Asset>, DataError> {
        Ok(self.catalog.assets().to_vec())
    }
}

#[async_trait]
impl ProfileProvider for DataService {
    async fn load_profile(&self, user_id: &str) -> Result<UserProfile, DataError> {
        profiles::load_profile(&self.data_dir, user_id)
    }
}

#[async_trait]
impl PriceHistoryProvider for DataService {
    async fn price_history(
        &self,
        profile: &UserProfile,
    ) -> Result<PortfolioPriceHistory, DataError> {
        Ok(simulate_history(profile, &self.store))
    }
}
