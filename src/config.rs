// ---------------------------------------------------------------------------
// Runtime configuration
// ---------------------------------------------------------------------------

/// Inference endpoint of the production deployment.
const DEFAULT_ENDPOINT: &str =
    "https://backend-fast-api-deteccionfrutas.onrender.com/predict";

/// Environment variable that overrides [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV_VAR: &str = "FRUTA_ENDPOINT";

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the selected image is POSTed to for classification.
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    /// An empty or whitespace-only override is treated as unset.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV_VAR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Config { endpoint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = Config::default();
        assert!(config.endpoint.starts_with("https://"));
        assert!(config.endpoint.ends_with("/predict"));
    }
}
