pub mod api_server;
pub mod database;
pub mod scheduler_interval;
pub mod security;
