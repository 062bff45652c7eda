use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[allow(unused)]
#[readonly::make]
pub struct SecuritySettings {
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Default for SecuritySettings {
    fn default() -> Self {
        SecuritySettings {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}
