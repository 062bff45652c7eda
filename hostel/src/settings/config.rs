use config::{Config, ConfigError, Environment, File};
use hostel_core::settings::{
    api_server::ApiServer, database::DatabaseSettings, scheduler_interval::SchedulerInterval,
    security::SecuritySettings,
};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
#[readonly::make]
pub struct Scheduler {
    pub session_cleanup: SchedulerInterval,
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler {
            session_cleanup: SchedulerInterval::Minutes(5),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
#[readonly::make]
pub struct Settings {
    pub debug: bool,
    pub api: ApiServer,
    #[serde(default)]
    pub scheduler: Scheduler,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub security: SecuritySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            debug: false,
            api: ApiServer::default(),
            scheduler: Scheduler::default(),
            database: DatabaseSettings::default(),
            security: SecuritySettings::default(),
        }
    }
}

impl Settings {
    pub fn get_environment() -> Environment {
        Environment::default()
            .prefix("HOSTEL")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("HOSTEL_RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("debug", false)?
            .set_default("api.bind_address", "0.0.0.0:21350")?
            .set_default("database.url", "memory://")?
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Self::get_environment())
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_from_env() {
        env::set_var("HOSTEL__DATABASE__URL", "file://data/test.json");
        env::set_var("HOSTEL__SECURITY__BCRYPT_COST", "6");

        let settings: Settings = Config::builder()
            .add_source(config::File::with_name("../config/default"))
            .add_source(Settings::get_environment())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        env::remove_var("HOSTEL__DATABASE__URL");
        env::remove_var("HOSTEL__SECURITY__BCRYPT_COST");

        assert_eq!(settings.database.url, "file://data/test.json");
        assert_eq!(settings.security.bcrypt_cost, 6);
        assert_eq!(settings.api.session_ttl, SchedulerInterval::Hours(12));
        assert_eq!(
            settings.scheduler.session_cleanup,
            SchedulerInterval::Minutes(5)
        );
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.database.url, "memory://");
        assert!(!settings.debug);
    }
}
