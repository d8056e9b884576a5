const DEFAULT_BACKEND_URL: &str = "https://irctc-backend-ns9u.onrender.com";
const DEFAULT_REDIRECT_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub redirect_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables (see build.rs)
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("REDIRECT_DELAY_MS"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        redirect_delay_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            redirect_delay_ms: redirect_delay_ms
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redirect_delay_ms),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, Some("production"), Some("nope"), Some("soon"));
        assert_eq!(config.environment, "production");
        assert!(config.enable_logging);
        assert_eq!(config.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS);
    }

    #[test]
    fn backend_url_drops_trailing_slash() {
        let config = AppConfig::from_values(Some("http://localhost:5000/"), None, Some("false"), Some("500"));
        assert_eq!(config.backend_url(), "http://localhost:5000");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.redirect_delay_ms, 500);
    }
}
