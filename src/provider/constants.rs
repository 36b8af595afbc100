pub mod openrouter {
    pub const API_BASE: &str = "https://openrouter.ai/api/v1";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";
    pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-3.2-24b-instruct:free";
}

pub mod relay {
    use std::time::Duration;

    pub const FAST_SYSTEM_PROMPT: &str =
        "You are a helpful ERP assistant. Provide concise, direct answers.";
    pub const SIMPLE_SYSTEM_PROMPT: &str = "You are an ERP assistant.";

    pub const TEXT_PROMPT_LIMIT: usize = 1000;
    pub const IMAGE_PROMPT_LIMIT: usize = 500;
    /// Upper bound on the transport error text surfaced to callers.
    pub const ERROR_MESSAGE_LIMIT: usize = 100;

    pub const TEMPERATURE: f32 = 0.3;
    pub const TOP_P: f32 = 0.7;
    pub const TEXT_MAX_TOKENS: u32 = 800;
    pub const IMAGE_MAX_TOKENS: u32 = 600;

    pub const FAST_TIMEOUT: Duration = Duration::from_secs(5);
}
