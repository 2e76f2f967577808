use std::env;

pub const DEFAULT_TABLE_NAME: &str = "workshop-interactions";
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_BEDROCK_REGION: &str = "us-east-1";
pub const DEFAULT_MAX_TOKENS: i32 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table_name: String,
    pub model_id: String,
    pub bedrock_region: String,
    pub max_tokens: i32,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `MAX_TOKENS` is set but is not a positive integer.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset or blank
    /// values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `MAX_TOKENS` is set but is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let max_tokens = match lookup("MAX_TOKENS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(format!("MAX_TOKENS: expected a positive integer, got {raw:?}")),
            },
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            table_name: var("TABLE_NAME", DEFAULT_TABLE_NAME),
            model_id: var("BEDROCK_MODEL_ID", DEFAULT_MODEL_ID),
            bedrock_region: var("BEDROCK_REGION", DEFAULT_BEDROCK_REGION),
            max_tokens,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            bedrock_region: DEFAULT_BEDROCK_REGION.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
