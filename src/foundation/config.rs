use std::{path::Path, time::Duration};

use crate::foundation::error::{FractalError, FractalResult};

/// Environment variables consulted for the Gemini API key, in priority order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Runtime configuration for the studio collaborators.
///
/// Every field has a default, so a JSON config file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Gemini API key. `None` selects the offline collaborators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL of the Generative Language REST API.
    pub api_base: String,
    /// Model used for analysis and prompt generation.
    pub text_model: String,
    /// Model used for long-running video generation.
    pub video_model: String,
    /// Delay between generation status polls.
    pub poll_interval_ms: u64,
    /// Maximum number of generation status polls before falling back.
    pub max_poll_attempts: u32,
    /// Simulated latency of the offline video generation step.
    pub mock_generation_latency_ms: u64,
    /// Simulated latency of the offline analysis step.
    pub mock_analysis_latency_ms: u64,
    /// Per-request HTTP timeout.
    pub request_timeout_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-3-flash-preview".to_string(),
            video_model: "veo-3.1-fast-generate-preview".to_string(),
            poll_interval_ms: 10_000,
            max_poll_attempts: 60,
            mock_generation_latency_ms: 2_500,
            mock_analysis_latency_ms: 1_500,
            request_timeout_ms: 30_000,
        }
    }
}

impl StudioConfig {
    /// Defaults overlaid with the API key from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Read a JSON config file; missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> FractalResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FractalError::Other(anyhow::Error::new(e).context(format!(
                "read config '{}'",
                path.display()
            )))
        })?;
        let cfg: Self = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Fill `api_key` from `lookup` when it is not already set.
    ///
    /// Blank values count as unset.
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.api_key.is_none() {
            self.api_key = API_KEY_ENV_VARS
                .iter()
                .filter_map(|k| lookup(k))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty());
        }
        self
    }

    pub fn validate(&self) -> FractalResult<()> {
        if self.api_base.trim().is_empty() {
            return Err(FractalError::validation("api_base must be non-empty"));
        }
        if self.max_poll_attempts == 0 {
            return Err(FractalError::validation("max_poll_attempts must be > 0"));
        }
        if self.request_timeout_ms == 0 {
            return Err(FractalError::validation("request_timeout_ms must be > 0"));
        }
        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn mock_generation_latency(&self) -> Duration {
        Duration::from_millis(self.mock_generation_latency_ms)
    }

    pub fn mock_analysis_latency(&self) -> Duration {
        Duration::from_millis(self.mock_analysis_latency_ms)
    }

    /// Offline configuration with every simulated delay removed. Used by tests and
    /// by the CLI `--instant` flag.
    pub fn instant(mut self) -> Self {
        self.mock_generation_latency_ms = 0;
        self.mock_analysis_latency_ms = 0;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
