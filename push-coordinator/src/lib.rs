pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::CoordinatorConfig;
pub use error::{CoordinatorError, Result};
pub use services::*;
