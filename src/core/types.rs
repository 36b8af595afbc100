use serde::Serialize;

/// Which relay operation a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    Image,
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptKind::Text => write!(f, "text"),
            PromptKind::Image => write!(f, "image"),
        }
    }
}

impl PromptKind {
    /// Message returned to the caller when the provider does not answer in time.
    pub fn timeout_message(&self) -> &'static str {
        match self {
            PromptKind::Text => "Response timeout - please try a shorter question",
            PromptKind::Image => "Image analysis timeout - please try again",
        }
    }
}

/// Configuration for text generation parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Nucleus sampling parameter (0.0 to 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl GenerationConfig {
    pub fn new(temperature: f32, max_tokens: u32, top_p: f32) -> Self {
        Self {
            temperature: Some(temperature),
            max_tokens: Some(max_tokens),
            top_p: Some(top_p),
        }
    }
}

/// Cuts `text` down to at most `limit` characters.
///
/// Counts `char`s rather than bytes so multi-byte input is never split mid-codepoint.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
