// Configuration - Dashboard settings from file and environment
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub debug: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataSettings {
    pub default_dataset: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            default_dataset: "data/sales.csv".to_string(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load `config/dashboard.toml` (optional) overlaid with `DASHBOARD__*` env vars.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Debug mode is on when either the config or the `--debug` flag asks for it.
pub fn debug_requested<I>(config: &DashboardConfig, args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    config.debug || args.into_iter().any(|a| a == "--debug")
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_level(debug_mode: bool) -> &'static str {
    if debug_mode { "debug" } else { "info" }
}
