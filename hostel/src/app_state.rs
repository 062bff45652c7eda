use std::sync::Arc;

use hostel_core::store;
use tracing::info;

use crate::services::HostelService;
use crate::sessions::SessionStore;
use crate::settings::config::Settings;
use crate::stop_flag;

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub stop_flag: stop_flag::StopFlag,
    pub service: HostelService,
    pub sessions: SessionStore,
}

pub type SharedAppState = Arc<AppState>;

impl AppState {
    pub async fn new() -> anyhow::Result<SharedAppState> {
        let settings = Settings::new()?;

        let stop_flag = stop_flag::StopFlag::new();
        stop_flag::register_signal_handler(&stop_flag);

        Self::with_settings(settings, stop_flag).await
    }

    /// Build the state around already loaded settings, opening the store
    pub async fn with_settings(
        settings: Settings,
        stop_flag: stop_flag::StopFlag,
    ) -> anyhow::Result<SharedAppState> {
        let store = store::connect(&settings.database.url).await?;
        let service = HostelService::open(store, settings.security.bcrypt_cost).await?;
        info!("Document store ready at {}", settings.database.url);

        let sessions = SessionStore::new(settings.api.session_ttl.into());

        Ok(Arc::new(AppState {
            settings,
            stop_flag,
            service,
            sessions,
        }))
    }

    pub async fn new_for_config_only() -> anyhow::Result<Settings> {
        Ok(Settings::new()?)
    }
}
