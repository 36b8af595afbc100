pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use config::RelayConfig;
pub use error::{CompletionResult, RelayError};
pub use http::HttpClient;
pub use types::{GenerationConfig, PromptKind};
