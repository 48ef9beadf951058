use serde::Deserialize;

pub const DEFAULT_API_KEY: &str = "sk-demo";
pub const DEFAULT_API_ENDPOINT: &str = "https://api.whomeai.com/v1/images/generations";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    #[serde(default = "default_api_key")]
    pub whomeai_api_key: String,
    #[serde(default = "default_api_endpoint")]
    pub whomeai_api_endpoint: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Envy {
    /// Loads `.env.{APP_ENV}` when present, then reads the process environment.
    pub fn load() -> Result<Self, envy::Error> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());
        if let Err(e) = dotenvy::from_filename(format!(".env.{}", app_env)) {
            tracing::debug!(%e, "no env file for {}", app_env);
        }

        envy::from_env::<Envy>()
    }

    pub fn has_api_key(&self) -> bool {
        !self.whomeai_api_key.is_empty()
    }

    pub fn has_custom_api_key(&self) -> bool {
        !self.whomeai_api_key.is_empty() && self.whomeai_api_key != DEFAULT_API_KEY
    }
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            whomeai_api_key: default_api_key(),
            whomeai_api_endpoint: default_api_endpoint(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}
