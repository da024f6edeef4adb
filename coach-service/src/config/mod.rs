use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

/// Default Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for coaching replies.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct CoachConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub provider: ProviderKind,
    pub web: WebConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Absent when the key is not configured; requests then fail with a 500.
    pub api_key: Option<Secret<String>>,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model for coaching replies (e.g., gemini-2.0-flash)
    pub text_model: String,
    /// Optional sampling temperature forwarded to the model.
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Directory holding the browser page.
    pub static_dir: String,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

/// Which text provider backs `/api/coach`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Mock,
}

impl FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "mock" => Ok(ProviderKind::Mock),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "unknown COACH_PROVIDER '{}', expected 'gemini' or 'mock'",
                other
            ))),
        }
    }
}

impl CoachConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let temperature = match env::var("GENAI_TEMPERATURE") {
            Ok(raw) => Some(raw.parse::<f32>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("invalid GENAI_TEMPERATURE '{}': {}", raw, e))
            })?),
            Err(_) => None,
        };

        Ok(CoachConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: optional_env("GOOGLE_API_KEY").map(Secret::new),
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
                temperature,
            },
            provider: get_env("COACH_PROVIDER", Some("gemini"), false)?.parse()?,
            web: WebConfig {
                static_dir: get_env("COACH_STATIC_DIR", Some("coach-service/static"), false)?,
                cors_allowed_origins: parse_origins(
                    &optional_env("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
                ),
            },
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            google: GoogleConfig {
                api_key: None,
                api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            },
            models: ModelConfig {
                text_model: DEFAULT_TEXT_MODEL.to_string(),
                temperature: None,
            },
            provider: ProviderKind::Gemini,
            web: WebConfig {
                static_dir: "coach-service/static".to_string(),
                cors_allowed_origins: Vec::new(),
            },
            otlp_endpoint: None,
        }
    }
}

/// Split a comma separated origin list. `*` or an empty value allows any origin.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
