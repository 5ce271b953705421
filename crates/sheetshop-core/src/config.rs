use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Customers sheet used when `SHEETSHOP_CUSTOMERS_SHEET_URL` is unset outside production.
const DEFAULT_CUSTOMERS_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1TQP-Nt4P3zRHjuFNDdemP_pWQXp4LbazwppD-KKg5Io/edit?gid=0";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("SHEETSHOP_ENV", "development"))?;

    let bind_addr = or_default("SHEETSHOP_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("SHEETSHOP_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("SHEETSHOP_LOG_LEVEL", "info");

    // Production must point at its own sheet rather than the bundled demo one.
    let customers_sheet_url = match lookup("SHEETSHOP_CUSTOMERS_SHEET_URL") {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ if env == Environment::Production => {
            return Err(ConfigError::MissingEnvVar(
                "SHEETSHOP_CUSTOMERS_SHEET_URL".to_string(),
            ));
        }
        _ => DEFAULT_CUSTOMERS_SHEET_URL.to_string(),
    };

    let cors_origin = or_default("SHEETSHOP_CORS_ORIGIN", "http://13.233.199.188");
    if cors_origin.trim().is_empty() {
        return Err(invalid(
            "SHEETSHOP_CORS_ORIGIN",
            "origin must not be empty".to_string(),
        ));
    }

    let sheet_request_timeout_secs = or_default("SHEETSHOP_SHEET_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("SHEETSHOP_SHEET_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if sheet_request_timeout_secs == 0 {
        return Err(invalid(
            "SHEETSHOP_SHEET_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let sheet_user_agent = or_default("SHEETSHOP_SHEET_USER_AGENT", "sheetshop/0.1 (sheet-reader)");

    let refresh_on_startup = parse_flag(&or_default("SHEETSHOP_REFRESH_ON_STARTUP", "false"))
        .ok_or_else(|| {
            invalid(
                "SHEETSHOP_REFRESH_ON_STARTUP",
                "expected true/false".to_string(),
            )
        })?;

    let refresh_cron = lookup("SHEETSHOP_REFRESH_CRON")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        customers_sheet_url,
        cors_origin: cors_origin.trim().to_string(),
        sheet_request_timeout_secs,
        sheet_user_agent,
        refresh_on_startup,
        refresh_cron,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHEETSHOP_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
