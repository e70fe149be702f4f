use thiserror::Error;

/// Tunables for a search pipeline instance.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of ranked results returned per query.
    pub result_cap: usize,
    /// Distance differences below this many kilometers are treated as equal
    /// by the ranker so float noise never reorders results.
    pub distance_deadband_km: f64,
    /// Default tracing filter for binaries when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_cap: 20,
            distance_deadband_km: 0.001,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load search configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_search_config() -> Result<SearchConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_search_config_from_env()
}

/// Load search configuration from environment variables already in the
/// process.
///
/// Unlike [`load_search_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_search_config_from_env() -> Result<SearchConfig, ConfigError> {
    build_search_config(|key| std::env::var(key))
}

/// Build search configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup.
fn build_search_config<F>(lookup: F) -> Result<SearchConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = SearchConfig::default();

    let result_cap = match lookup("SEARCH_RESULT_CAP") {
        Ok(raw) => {
            let parsed = raw
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "SEARCH_RESULT_CAP".to_string(),
                    reason: e.to_string(),
                })?;
            if parsed == 0 {
                return Err(ConfigError::InvalidEnvVar {
                    var: "SEARCH_RESULT_CAP".to_string(),
                    reason: "result cap must be at least 1".to_string(),
                });
            }
            parsed
        }
        Err(_) => defaults.result_cap,
    };

    let distance_deadband_km = match lookup("SEARCH_DISTANCE_DEADBAND_KM") {
        Ok(raw) => {
            let parsed = raw
                .parse::<f64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "SEARCH_DISTANCE_DEADBAND_KM".to_string(),
                    reason: e.to_string(),
                })?;
            if !parsed.is_finite() || parsed < 0.0 {
                return Err(ConfigError::InvalidEnvVar {
                    var: "SEARCH_DISTANCE_DEADBAND_KM".to_string(),
                    reason: "deadband must be a finite non-negative number".to_string(),
                });
            }
            parsed
        }
        Err(_) => defaults.distance_deadband_km,
    };

    let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

    Ok(SearchConfig {
        result_cap,
        distance_deadband_km,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
