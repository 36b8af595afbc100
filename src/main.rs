use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_relay::{CompletionRelay, RelayConfig, server};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    /// Bounded timeout, truncated prompts, tuned sampling
    Fast,
    /// Provider defaults, no truncation, no timeout
    Simple,
}

#[derive(Parser, Debug)]
#[command(name = "chat-relay")]
#[command(about = "HTTP relay from a chat endpoint to OpenRouter chat completions", long_about = None)]
struct Args {
    /// Server host
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "8000", env = "PORT")]
    port: u16,

    /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the provider base URL
    #[arg(long, env = "OPENROUTER_BASE_URL")]
    base_url: Option<String>,

    /// Override the model identifier
    #[arg(long, env = "OPENROUTER_MODEL")]
    model: Option<String>,

    #[arg(long, value_enum, default_value = "fast", env = "RELAY_PROFILE")]
    profile: Profile,

    /// Provider timeout in seconds; 0 waits indefinitely. Defaults to the profile's value.
    #[arg(long, env = "RELAY_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn relay_config(&self) -> RelayConfig {
        let mut config = match self.profile {
            Profile::Fast => RelayConfig::fast(self.api_key.clone()),
            Profile::Simple => RelayConfig::simple(self.api_key.clone()),
        };

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }

        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = args.relay_config();
    if config.api_key.is_none() {
        tracing::warn!("OPENROUTER_API_KEY not set; every chat request will fail");
    }
    tracing::info!(model = %config.model, profile = ?args.profile, "Relay configured");

    let relay = Arc::new(CompletionRelay::new(config)?);
    let app = server::router(relay);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
