/// Module containing environment-variable configuration helpers
pub mod config;
/// Module containing logging setup
pub mod logger;
/// Module containing phone number and input validation
pub mod phone;
/// Module containing random sample data generators
pub mod sample;

pub use config::*;
pub use phone::*;
