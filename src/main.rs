use clap::Parser;
use hello_backend::config::Config;
use hello_backend::error::AppResult;
use hello_backend::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// hello-backend - API backend with a configurable CORS policy
#[derive(Parser, Debug)]
#[command(name = "hello-backend")]
#[command(version)]
#[command(about = "API backend with a configurable CORS policy", long_about = None)]
struct Cli {
    /// Host to bind to (overrides SERVER_HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides SERVER_PORT env var)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Load .env before tracing so RUST_LOG and LOG_FORMAT from it apply
    dotenvy::dotenv().ok();
    init_tracing();

    // Load configuration
    let mut config = Config::from_env()?;

    // Override config with CLI args if provided
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;
    let addr = config.server.addr();

    server::run_server(config, addr).await
}

/// `RUST_LOG` sets the filter (default `info`); `LOG_FORMAT=json` selects JSON output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
