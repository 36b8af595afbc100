//! Relay configuration, built once at startup and owned by the relay.

use std::time::Duration;

use super::types::GenerationConfig;
use crate::provider::constants::{openrouter, relay};

/// Everything a [`CompletionRelay`](crate::CompletionRelay) needs to talk to the provider.
///
/// The defaults reproduce the low-latency profile: a 5 second timeout, prompts capped at
/// 1000 characters (500 next to an image) and conservative sampling parameters.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Sent ahead of text prompts. Image prompts never carry a system turn.
    pub system_prompt: Option<String>,
    pub text_generation: GenerationConfig,
    pub image_generation: GenerationConfig,
    pub text_prompt_limit: Option<usize>,
    pub image_prompt_limit: Option<usize>,
    /// Wall-clock bound on one provider round trip; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub http_referer: Option<String>,
    pub x_title: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::fast(None)
    }
}

impl RelayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::fast(Some(api_key.into()))
    }

    /// Low-latency profile: bounded timeout, truncated prompts, tuned sampling.
    pub fn fast(api_key: Option<String>) -> Self {
        Self {
            api_key: normalize_key(api_key),
            base_url: openrouter::API_BASE.to_string(),
            model: openrouter::DEFAULT_MODEL.to_string(),
            system_prompt: Some(relay::FAST_SYSTEM_PROMPT.to_string()),
            text_generation: GenerationConfig::new(
                relay::TEMPERATURE,
                relay::TEXT_MAX_TOKENS,
                relay::TOP_P,
            ),
            image_generation: GenerationConfig::new(
                relay::TEMPERATURE,
                relay::IMAGE_MAX_TOKENS,
                relay::TOP_P,
            ),
            text_prompt_limit: Some(relay::TEXT_PROMPT_LIMIT),
            image_prompt_limit: Some(relay::IMAGE_PROMPT_LIMIT),
            timeout: Some(relay::FAST_TIMEOUT),
            http_referer: None,
            x_title: None,
        }
    }

    /// Plain profile: provider defaults for sampling, no truncation and no timeout.
    pub fn simple(api_key: Option<String>) -> Self {
        Self {
            system_prompt: Some(relay::SIMPLE_SYSTEM_PROMPT.to_string()),
            text_generation: GenerationConfig::default(),
            image_generation: GenerationConfig::default(),
            text_prompt_limit: None,
            image_prompt_limit: None,
            timeout: None,
            ..Self::fast(api_key)
        }
    }

    /// Fast profile with the API key taken from `OPENROUTER_API_KEY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`RelayConfig::from_env`], with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::fast(lookup(openrouter::API_KEY_ENV_VAR))
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = normalize_key(Some(api_key.into()));
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.system_prompt = system_prompt;
        self
    }

    pub fn with_text_generation(mut self, config: GenerationConfig) -> Self {
        self.text_generation = config;
        self
    }

    pub fn with_image_generation(mut self, config: GenerationConfig) -> Self {
        self.image_generation = config;
        self
    }

    pub fn with_text_prompt_limit(mut self, limit: Option<usize>) -> Self {
        self.text_prompt_limit = limit;
        self
    }

    pub fn with_image_prompt_limit(mut self, limit: Option<usize>) -> Self {
        self.image_prompt_limit = limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_http_referer(mut self, http_referer: impl Into<String>) -> Self {
        self.http_referer = Some(http_referer.into());
        self
    }

    pub fn with_x_title(mut self, x_title: impl Into<String>) -> Self {
        self.x_title = Some(x_title.into());
        self
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            openrouter::CHAT_COMPLETIONS_ENDPOINT
        )
    }

    pub(crate) fn auth_header(&self, api_key: &str) -> (String, String) {
        ("Authorization".to_string(), format!("Bearer {api_key}"))
    }

    pub(crate) fn extra_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(referer) = &self.http_referer {
            headers.push(("HTTP-Referer".to_string(), referer.clone()));
        }

        if let Some(title) = &self.x_title {
            headers.push(("X-Title".to_string(), title.clone()));
        }

        headers
    }
}

fn normalize_key(api_key: Option<String>) -> Option<String> {
    api_key.filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_profile_defaults() {
        let config = RelayConfig::new("sk-test");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, openrouter::DEFAULT_MODEL);
        assert_eq!(config.text_prompt_limit, Some(1000));
        assert_eq!(config.image_prompt_limit, Some(500));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.text_generation.max_tokens, Some(800));
        assert_eq!(config.image_generation.max_tokens, Some(600));
        assert_eq!(
            config.endpoint_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn simple_profile_is_unbounded() {
        let config = RelayConfig::simple(Some("sk-test".to_string()));
        assert_eq!(config.timeout, None);
        assert_eq!(config.text_prompt_limit, None);
        assert_eq!(config.text_generation, GenerationConfig::default());
        assert_eq!(
            config.system_prompt.as_deref(),
            Some("You are an ERP assistant.")
        );
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let config = RelayConfig::from_lookup(|_| Some("   ".to_string()));
        assert!(config.api_key.is_none());

        let config = RelayConfig::from_lookup(|name| {
            (name == "OPENROUTER_API_KEY").then(|| "sk-env".to_string())
        });
        assert_eq!(config.api_key.as_deref(), Some("sk-env"));
    }

    #[test]
    fn attribution_headers_are_optional() {
        let config = RelayConfig::new("sk-test");
        assert!(config.extra_headers().is_empty());

        let config = config
            .with_http_referer("https://erp.example")
            .with_x_title("ERP Assistant");
        let headers = config.extra_headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].0, "HTTP-Referer");
        assert_eq!(headers[1].1, "ERP Assistant");
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let config = RelayConfig::new("k").with_base_url("http://127.0.0.1:9000/api/v1/");
        assert_eq!(
            config.endpoint_url(),
            "http://127.0.0.1:9000/api/v1/chat/completions"
        );
    }
}
