//! Shared helpers for API tests

use config::Config;

use crate::app_state::{AppState, SharedAppState};
use crate::settings::config::Settings;
use crate::stop_flag::StopFlag;

/// Password used for every account created by [`register_user`]
pub const TEST_PASSWORD: &str = "secret";

/// Settings for an in-memory store with a cheap bcrypt cost
#[allow(dead_code)]
pub fn create_test_settings() -> Settings {
    Config::builder()
        .set_override("debug", false)
        .and_then(|b| b.set_override("api.bind_address", "127.0.0.1:0"))
        .and_then(|b| b.set_override("api.session_ttl", "1h"))
        .and_then(|b| b.set_override("database.url", "memory://"))
        .and_then(|b| b.set_override("security.bcrypt_cost", 4))
        .and_then(|b| b.build())
        .and_then(|c| c.try_deserialize())
        .unwrap_or_else(|e| panic!("test settings are invalid: {e}"))
}

#[allow(dead_code)]
pub async fn create_test_app_state() -> SharedAppState {
    AppState::with_settings(create_test_settings(), StopFlag::new())
        .await
        .unwrap_or_else(|e| panic!("test app state could not be built: {e}"))
}

/// Register an account directly through the service and return its userId
#[allow(dead_code)]
pub async fn register_user(state: &SharedAppState, user_id: &str, role: hostel_core::Role) -> String {
    state
        .service
        .register(hostel_core::records::NewUser {
            user_id: Some(user_id.to_string()),
            name: user_id.to_string(),
            email: format!("{user_id}@example.com"),
            role,
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap_or_else(|e| panic!("could not register {user_id}: {e}"))
        .user_id
}
