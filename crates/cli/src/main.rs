use clap::Parser;
use natdns_domain::CliOverrides;
use natdns_infrastructure::dns::DnsServerHandler;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "natdns")]
#[command(version)]
#[command(about = "natdns - DNS forwarding proxy with per-zone NAT address rewriting")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// NAT rule file path
    #[arg(short = 'r', long, value_name = "FILE")]
    rules: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        rules_path: cli.rules.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting natdns v{}", env!("CARGO_PKG_VERSION"));
    info!(rules = %config.rules.path, fallback = %config.upstream.fallback_resolver, "Rule store configured");

    let use_case = di::build_query_pipeline(&config);
    let handler = DnsServerHandler::new(use_case);

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);

    tokio::select! {
        result = server::start_dns_server(dns_addr, handler) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, stopping");
        }
    }

    Ok(())
}
