pub mod error;
pub mod handlers;
pub mod json;
pub mod middleware;
pub mod router;
pub mod test_utils;

#[cfg(test)]
mod api_tests;
