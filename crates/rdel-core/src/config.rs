use crate::app_config::{AppConfig, Environment};
use crate::hours::HOURS_VARY;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so parsing can be tested against a plain map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("RDEL_ENV", "development"))?;
    let log_level = or_default("RDEL_LOG_LEVEL", "info");
    let locations_path = PathBuf::from(or_default(
        "RDEL_LOCATIONS_PATH",
        "./config/locations.yaml",
    ));
    let uploads_base = or_default("RDEL_UPLOADS_BASE", "/uploads");
    let cover_base_url = optional("RDEL_COVER_BASE_URL");
    let hours_fallback = optional("RDEL_HOURS_FALLBACK").unwrap_or_else(|| HOURS_VARY.to_string());

    if !uploads_base.starts_with('/') && !uploads_base.starts_with("http") {
        return Err(ConfigError::InvalidEnvVar {
            var: "RDEL_UPLOADS_BASE".to_string(),
            reason: format!("'{uploads_base}' must be an absolute path or URL"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        locations_path,
        uploads_base,
        cover_base_url,
        hours_fallback,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything but the three known names.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RDEL_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
