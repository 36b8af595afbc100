//! The completion relay: one inbound prompt in, one provider request out, one reply back.

use async_trait::async_trait;

use crate::core::{
    CompletionResult, GenerationConfig, HttpClient, PromptKind, RelayConfig, RelayError,
    types::truncate_chars,
};
use crate::provider::openrouter::{ChatCompletionRequest, ChatCompletionResponse, Message};

/// Anything that can answer chat prompts. The HTTP surface depends on this rather than on
/// [`CompletionRelay`] directly.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn send_text_prompt(&self, prompt: &str) -> CompletionResult;

    async fn send_image_prompt(&self, prompt: &str, image_url: &str) -> CompletionResult;
}

/// Forwards prompts to an OpenRouter-compatible chat-completions endpoint.
///
/// Holds no per-call state; share it behind an `Arc` across request handlers.
pub struct CompletionRelay {
    config: RelayConfig,
    http: HttpClient,
}

impl CompletionRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let http = HttpClient::new(None)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Build the payload for a text prompt: `[system, user]`, or just `[user]` when no
    /// system prompt is configured.
    pub fn text_request(&self, prompt: &str) -> ChatCompletionRequest {
        let prompt = limit(prompt, self.config.text_prompt_limit);

        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = &self.config.system_prompt {
            messages.push(Message::system(system_prompt.as_str()));
        }
        messages.push(Message::user(prompt));

        self.request(messages, &self.config.text_generation)
    }

    /// Build the payload for an image prompt: a single user turn with a text part and an
    /// image part. No system turn is sent.
    pub fn image_request(&self, prompt: &str, image_url: &str) -> ChatCompletionRequest {
        let prompt = limit(prompt, self.config.image_prompt_limit);
        self.request(
            vec![Message::user_with_image(prompt, image_url)],
            &self.config.image_generation,
        )
    }

    fn request(
        &self,
        messages: Vec<Message>,
        generation: &GenerationConfig,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            generation: generation.clone(),
        }
    }

    #[tracing::instrument(
        name = "relay_completion",
        skip(self, kind, request),
        fields(kind = %kind, model = %self.config.model),
        err
    )]
    async fn complete(
        &self,
        kind: PromptKind,
        request: ChatCompletionRequest,
    ) -> CompletionResult {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RelayError::ConfigurationMissing)?;

        let url = self.config.endpoint_url();
        let mut headers = vec![self.config.auth_header(api_key)];
        headers.extend(self.config.extra_headers());

        let call = self
            .http
            .post_json::<_, ChatCompletionResponse>(&url, &headers, &request);

        let response = match self.config.timeout {
            Some(after) => match tokio::time::timeout(after, call).await {
                Ok(result) => result?,
                Err(_) => return Err(RelayError::Timeout { kind, after }),
            },
            None => call.await?,
        };

        match response.first_content() {
            Some(Some(content)) => Ok(content),
            Some(None) => Err(RelayError::transport_message(
                "provider response is missing message content",
            )),
            None => Err(RelayError::Provider {
                status: 200,
                body: "response contained no choices".to_string(),
            }),
        }
    }
}

#[async_trait]
impl Relay for CompletionRelay {
    async fn send_text_prompt(&self, prompt: &str) -> CompletionResult {
        let request = self.text_request(prompt);
        self.complete(PromptKind::Text, request).await
    }

    async fn send_image_prompt(&self, prompt: &str, image_url: &str) -> CompletionResult {
        let request = self.image_request(prompt, image_url);
        self.complete(PromptKind::Image, request).await
    }
}

fn limit(prompt: &str, max_chars: Option<usize>) -> &str {
    match max_chars {
        Some(max_chars) => truncate_chars(prompt, max_chars),
        None => prompt,
    }
}
