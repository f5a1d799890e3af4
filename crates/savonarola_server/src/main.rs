use anyhow::Result;
use clap::Parser;
use savonarola_client::{AzureChatClient, AzureConfig, ChatCompletions};
use savonarola_server::{ApiState, init_tracing, serve};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Savonarola content-moderation demo gateway", long_about = None)]
struct Args {
    /// Address to bind the HTTP listener on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to serve the API on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Log level filter when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit JSON-formatted logs
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Local development convenience; real environments set variables directly.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing(&args.log_level, args.json_logs)?;

    // Provider configuration is validated here, before the listener binds;
    // a missing variable is fatal at startup, never a runtime path.
    let config = AzureConfig::from_env()?;
    let client = AzureChatClient::new(config);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    info!(
        %addr,
        deployment = client.model_name(),
        "Starting Savonarola demo gateway"
    );

    serve(addr, ApiState::new(Arc::new(client))).await?;

    Ok(())
}
