use serde::Deserialize;

use super::scheduler_interval::SchedulerInterval;

#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
#[readonly::make]
pub struct ApiServer {
    pub bind_address: String,
    /// Lifetime of a login session
    #[serde(default = "default_session_ttl")]
    pub session_ttl: SchedulerInterval,
}

fn default_session_ttl() -> SchedulerInterval {
    SchedulerInterval::Hours(12)
}

impl Default for ApiServer {
    fn default() -> Self {
        ApiServer {
            bind_address: "0.0.0.0:21350".to_string(),
            session_ttl: default_session_ttl(),
        }
    }
}
