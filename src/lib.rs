//! # chat-relay
//!
//! A stateless relay between a chat front end and an OpenRouter-compatible
//! chat-completions API. Each call turns one prompt into one provider request and hands
//! back the reply text, or a [`RelayError`] saying why there is none.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_relay::{CompletionRelay, Relay, RelayConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let relay = CompletionRelay::new(RelayConfig::from_env())?;
//!     let reply = relay.send_text_prompt("How do I raise a purchase order?").await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!
//! The same relay can be served over HTTP with [`server::router`].

pub mod core;
pub mod provider;
pub mod relay;
pub mod server;

pub use crate::core::{CompletionResult, GenerationConfig, PromptKind, RelayConfig, RelayError};
pub use relay::{CompletionRelay, Relay};
