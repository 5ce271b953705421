mod app_config;
mod catalog;
mod config;
mod shops;

pub use app_config::{AppConfig, Environment};
pub use catalog::{CatalogEntry, ItemsResponse};
pub use config::{load_app_config, load_app_config_from_env};
pub use shops::{ShopCatalogResponse, ShopProfile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
