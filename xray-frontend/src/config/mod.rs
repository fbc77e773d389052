use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    /// Base URL of the service hosting both endpoints (e.g. http://localhost:5000).
    #[serde(default = "default_backend_url")]
    pub url: String,
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,
    #[serde(default = "default_chat_path")]
    pub chat_path: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            analyze_path: default_analyze_path(),
            chat_path: default_chat_path(),
        }
    }
}

impl BackendSettings {
    pub fn analyze_url(&self) -> String {
        join_url(&self.url, &self.analyze_path)
    }

    pub fn chat_url(&self) -> String {
        join_url(&self.url, &self.chat_path)
    }
}

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_analyze_path() -> String {
    "/analyze-xray".to_string()
}

fn default_chat_path() -> String {
    "/medical-chat".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// Fallback filter when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("current directory: {}", e)))?;

    // Running from the workspace root or from inside the crate directory
    let configuration_directory = if base_path.ends_with("xray-frontend") {
        base_path.join("config")
    } else {
        base_path.join("xray-frontend").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
