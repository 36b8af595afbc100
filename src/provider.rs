pub(crate) mod constants;
pub mod openrouter;

pub use constants::openrouter::API_KEY_ENV_VAR;
