use clap::{Parser, Subcommand};
use dnsdiff_domain::{CliOverrides, QueryProtocol};
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsdiff")]
#[command(version)]
#[command(about = "dnsdiff - DNS lookups and side-by-side nameserver comparison")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long, global = true)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Transport for outbound queries (tcp, udp)
    #[arg(long, global = true)]
    protocol: Option<QueryProtocol>,

    /// Per-query timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Look up domains from the terminal
    Lookup(commands::LookupArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let batch_concurrency = match &cli.command {
        Some(Command::Lookup(args)) => args.concurrency,
        _ => None,
    };

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        protocol: cli.protocol,
        query_timeout_ms: cli.timeout_ms,
        batch_concurrency,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting dnsdiff v{}", env!("CARGO_PKG_VERSION"));

            let use_cases = di::UseCases::new(&config);
            let web_addr: SocketAddr =
                format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

            server::start_web_server(web_addr, use_cases.into_app_state()).await?;

            info!("Server shutdown complete");
        }
        Command::Lookup(args) => {
            commands::run_lookup(args, &config).await?;
        }
    }

    Ok(())
}
