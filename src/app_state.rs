use crate::config::Config;
use crate::pages::LegacyPageStore;

#[derive(Clone)]
pub struct AppState {
    pub pages: LegacyPageStore,
}

impl AppState {
    pub fn new(pages: LegacyPageStore) -> Self {
        Self { pages }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(LegacyPageStore::new(config.legacy_pages_dir()))
    }
}
