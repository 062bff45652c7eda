use serde::Deserialize;

/// Location of the document store, e.g. `memory://` or `file://data/hostel.json`
#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
#[readonly::make]
pub struct DatabaseSettings {
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            url: "memory://".to_string(),
        }
    }
}
