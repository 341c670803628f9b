use felpa_catalog::FormDefaults;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,

    /// Form values used when a request leaves a field out.
    pub defaults: FormDefaults,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 4700 }
    }
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Layered files, every one optional. A bare host runs on the
            // compiled-in defaults.
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `FELPA__SERVER__PORT=8080` overrides the server port
            .add_source(config::Environment::with_prefix("FELPA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
