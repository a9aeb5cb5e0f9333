use std::fmt::Display;
use std::net::SocketAddr;
use std::process;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use zone_printer::api::MetadataClient;
use zone_printer::config;
use zone_printer::models::AppState;
use zone_printer::routes::build_router;
use zone_printer::services::bootstrap;

#[derive(Parser)]
#[command(
    name = "zone-printer",
    author,
    version,
    about = "Serve a page naming the cloud zone this instance runs in",
    long_about = r#"Zone Printer asks the compute metadata server which zone, cluster and instance it runs on, then serves a page showing the zone, the city of its region with a flag, and the instance details.

Environment:
  PORT         port to listen on (default 8080)
  ADDR         address to listen on (default: all interfaces)
  FAKE_ZONE    report this zone instead of the resolved one

Examples:
  FAKE_ZONE=us-central1-a zone-printer
  zone-printer --addr 127.0.0.1 --port 5000
"#
)]
struct Cli {
    /// Address to bind to (overrides ADDR)
    #[arg(long)]
    addr: Option<String>,
    /// Port to bind to (overrides PORT)
    #[arg(long)]
    port: Option<String>,
    /// Path to .env file
    #[arg(long)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long)]
    no_color: bool,
}

fn fatal(context: &str, err: impl Display) -> ! {
    tracing::error!(%err, "{}", context);
    eprintln!("{}: {}", yansi::Paint::new(context).red(), err);
    process::exit(1);
}

async fn start_server(state: AppState, addr: SocketAddr) {
    let app = build_router(state, config::STATIC_DIR);
    tracing::info!(%addr, "starting to listen");
    println!(
        "{} {}",
        yansi::Paint::new("Zone printer running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            let service = app.into_make_service_with_connect_info::<SocketAddr>();
            if let Err(e) = axum::serve(listener, service).await {
                fatal("Server error", e);
            }
        }
        Err(e) => fatal(&format!("Failed to bind to {}", addr), e),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG may come from the .env file
    config::load_env_file(cli.env_file.as_deref());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let client = MetadataClient::from_env()
        .unwrap_or_else(|e| fatal("Failed to create metadata client", e));
    let fake_zone = config::get_fake_zone();
    let instance = bootstrap(&client, fake_zone.as_deref())
        .await
        .unwrap_or_else(|e| fatal("Startup failed", e));

    let addr = cli.addr.unwrap_or_else(config::get_addr);
    let port = cli.port.unwrap_or_else(config::get_port);
    let bind_addr = config::bind_address(&addr, &port)
        .unwrap_or_else(|e| fatal("Invalid host/port", e));

    start_server(AppState::new(instance), bind_addr).await;
}
