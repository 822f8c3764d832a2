use crate::error::AppError;
use crate::region::RegionKey;
use clap::ValueEnum;
use std::env;
use std::fmt;

pub const DEFAULT_DDRAGON_VERSION: &str = "14.14.1";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Opaque credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: ApiKey,
    pub gemini_api_key: Option<ApiKey>,
    pub region: RegionKey,
    pub ddragon_version: String,
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let riot_api_key = env::var("RIOT_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(ApiKey::new)
            .ok_or_else(|| AppError::Config("RIOT_API_KEY not found in .env file".to_string()))?;

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(ApiKey::new);

        let region = match env::var("RIOT_REGION") {
            Ok(raw) => parse_region(&raw)?,
            Err(_) => RegionKey::Na,
        };

        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.to_string());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Config {
            riot_api_key,
            gemini_api_key,
            region,
            ddragon_version,
            gemini_model,
        })
    }
}

fn parse_region(raw: &str) -> Result<RegionKey, AppError> {
    RegionKey::from_str(raw.trim(), true)
        .map_err(|_| AppError::Config(format!("RIOT_REGION '{}' is not a known region", raw)))
}
