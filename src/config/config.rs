use color_eyre::Result;
use dotenv::dotenv;
use eyre::WrapErr;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub platform_name: String,

    /// Process-wide secret expected in the `apikey` header on the
    /// privileged endpoints.
    pub api_key: String,

    pub smtp_host: String,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub from_address: String,

    pub jobs_api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        info!("Initializing configuration");
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .wrap_err("Building configuration")?;

        settings
            .try_deserialize()
            .wrap_err("loading configuration from environment")
    }
}
