use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Config {
    /// Load configuration: built-in defaults, overridden by an optional
    /// config file, overridden by `LEADMATE_*` environment variables
    /// (e.g. `LEADMATE_SERVICE__HTTP__PORT=8080`).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "leadmate-chat")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 3000_i64)?
            .set_default("gemini.model", "gemini-1.5-flash")?
            .set_default("gemini.base_url", "https://generativelanguage.googleapis.com")?
            .set_default("gemini.max_output_tokens", 300_i64)?
            .set_default("gemini.temperature", 0.7_f64)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("LEADMATE").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
