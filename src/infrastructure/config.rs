use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub warm_query: WarmQuerySettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Where the telemetry comes from. Endpoint and credential are injected
/// here at startup, never embedded as literals.
#[derive(Debug, Deserialize, Clone)]
pub struct WarmQuerySettings {
    pub endpoint: String,
    pub token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

/// Loads `config/warm_query.toml`, with `BREWERY__`-prefixed environment
/// variables overriding file values (e.g. `BREWERY__WARM_QUERY__TOKEN`).
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/warm_query"))
        .add_source(config::Environment::with_prefix("BREWERY").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
