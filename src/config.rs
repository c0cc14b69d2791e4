use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Environment variable holding the Google Places credential
pub const GOOGLE_PLACES_API_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Settings for outbound calls to Nominatim and Google Places
#[derive(Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub google_places_api_key: Option<String>,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            google_places_api_key: None,
        }
    }
}

// Hand-written so the credential never ends up in logs
impl std::fmt::Debug for UpstreamSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamSettings")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "google_places_api_key",
                &self.google_places_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl UpstreamSettings {
    /// The Places credential, treating an empty value as absent
    pub fn places_api_key(&self) -> Option<&str> {
        self.google_places_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn default_timeout_secs() -> u64 { 30 }
fn default_user_agent() -> String {
    format!("trip-proxy/{} (trip planner geolocation proxy)", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TRIP_PROXY__)
    /// 5. `GOOGLE_PLACES_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TRIP_PROXY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TRIP_PROXY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_api_key(settings, std::env::var(GOOGLE_PLACES_API_KEY_VAR).ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TRIP_PROXY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_api_key(settings, std::env::var(GOOGLE_PLACES_API_KEY_VAR).ok())?;

        settings.try_deserialize()
    }
}

/// Overlay the Places credential taken from the process environment
fn substitute_api_key(settings: Config, api_key: Option<String>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        builder = builder.set_override("upstream.google_places_api_key", key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.upstream.timeout_secs, 30);
        assert!(settings.upstream.user_agent.starts_with("trip-proxy/"));
        assert!(settings.upstream.places_api_key().is_none());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_api_key_is_absent() {
        let upstream = UpstreamSettings {
            google_places_api_key: Some("   ".to_string()),
            ..UpstreamSettings::default()
        };
        assert!(upstream.places_api_key().is_none());
    }

    #[test]
    fn test_api_key_substitution() {
        let base = Config::builder().build().unwrap();
        let settings: Settings = substitute_api_key(base, Some("secret".to_string()))
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.upstream.places_api_key(), Some("secret"));
    }

    #[test]
    fn test_missing_api_key_leaves_setting_unset() {
        let base = Config::builder().build().unwrap();
        let settings: Settings = substitute_api_key(base, None)
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert!(settings.upstream.google_places_api_key.is_none());
        assert_eq!(settings.server.port, 8000);
    }

    #[test]
    fn test_load_from_file_with_env_override() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 8100\n\n[upstream]\ntimeout_secs = 7"
        )
        .unwrap();

        // only this test touches TRIP_PROXY__ variables
        std::env::set_var("TRIP_PROXY__SERVER__PORT", "9191");
        let loaded = Settings::load_from(file.path());
        std::env::remove_var("TRIP_PROXY__SERVER__PORT");

        let settings = loaded.unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 9191);
        assert_eq!(settings.upstream.timeout_secs, 7);
        assert!(settings.upstream.user_agent.starts_with("trip-proxy/"));
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let upstream = UpstreamSettings {
            google_places_api_key: Some("super-secret".to_string()),
            ..UpstreamSettings::default()
        };
        let rendered = format!("{:?}", upstream);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
