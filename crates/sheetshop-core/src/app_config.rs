use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Sheet holding one row per shop profile; read by every cache refresh.
    pub customers_sheet_url: String,
    /// The single browser origin allowed by the CORS layer.
    pub cors_origin: String,
    pub sheet_request_timeout_secs: u64,
    pub sheet_user_agent: String,
    pub refresh_on_startup: bool,
    /// Six-field cron expression (with seconds). `None` disables scheduled refreshes.
    pub refresh_cron: Option<String>,
}
