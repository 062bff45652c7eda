pub mod config;
pub mod dotenv;
