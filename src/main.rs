use discountex::config::{self, DEFAULT_KEYWORD, DEFAULT_PAGE};
use discountex::handlers::pages::load_landing_page;
use discountex::models::AppState;
use discountex::routes::build_router;
use discountex::services::SearchProxy;
use discountex::smoke::{self, DEFAULT_SMOKE_URL};

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "discountex",
    author,
    version,
    about = "DiscountEx retail search proxy",
    long_about = r#"DiscountEx — search a retail catalog through a small JSON proxy.

Running without a subcommand starts the web server. The listening port comes from --port, then the PORT environment variable, then 3000. When the upstream search API cannot be reached, /api/search answers with a fixed mock catalog and `success: false`.

Examples:
  1) Build & run (dev):
      cargo run -- serve --port 3000
  2) Check a running server:
      discountex smoke-test --url http://localhost:3000
"#,
    after_help = "Use `discountex <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable upstream request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server (the default when no subcommand is given)
    Serve(ServeArgs),
    /// Query a running server and verify the response envelope
    #[command(about = "Check a running server's /api/search endpoint", long_about = "Send one search request to a running DiscountEx server, verify that the response carries success, keyword, page, totalItems and items, and print the first item. Exits with status 1 on any failure.")]
    SmokeTest {
        /// Base URL of the running server
        #[arg(long, default_value = DEFAULT_SMOKE_URL)]
        url: String,
        /// Keyword to search for
        #[arg(long, default_value = DEFAULT_KEYWORD)]
        keyword: String,
        /// Page to request
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
    },
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Host to bind to (defaults to HOST or 0.0.0.0)
    #[arg(long)]
    host: Option<String>,
    /// Port to bind to (defaults to PORT or 3000)
    #[arg(long)]
    port: Option<u16>,
    /// Path to .env file
    #[arg(long)]
    env_file: Option<String>,
    /// Directory of static files (defaults to PUBLIC_DIR or ./public)
    #[arg(long)]
    public_dir: Option<String>,
    /// HTML file to serve at / instead of <public-dir>/index.html
    #[arg(long)]
    landing_page: Option<String>,
}

fn build_state(public_dir: String, landing_page: Option<&str>) -> AppState {
    let proxy = match SearchProxy::from_config(&config::get_upstream_base_url(), config::get_upstream_timeout()) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(%e, "Failed to create upstream client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create upstream client"), e);
            process::exit(1);
        }
    };

    let landing_page = match load_landing_page(landing_page, &public_dir) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(%e, "Failed to read landing page");
            eprintln!("{} {}: {}", yansi::Paint::red("Failed to read landing page at"), landing_page.unwrap_or_default(), e);
            process::exit(1);
        }
    };

    AppState {
        proxy,
        landing_page: Arc::from(landing_page),
        public_dir,
    }
}

async fn start_server(args: ServeArgs) {
    config::load_env_file(args.env_file.as_deref());

    let host = args.host.unwrap_or_else(config::get_host);
    let port = args.port.unwrap_or_else(config::get_port);
    let public_dir = args.public_dir.unwrap_or_else(config::get_public_dir);
    let state = build_state(public_dir, args.landing_page.as_deref());

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    tracing::info!(%addr, upstream = %state.proxy.upstream_base_url(), "Starting DiscountEx server");
    let app = build_router(state);
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            println!("{} {}", yansi::Paint::new("Server running on").green(), yansi::Paint::new(format!("http://localhost:{}", port)).cyan());
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        discountex::api::set_silent(true);
    }

    match cli.command.unwrap_or_else(|| Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => start_server(args).await,
        Commands::SmokeTest { url, keyword, page } => {
            println!("Starting DiscountEx API test against {}...\n", url);
            match smoke::run_smoke_test(&url, &keyword, page).await {
                Ok(report) => smoke::print_report(&report),
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Test failed").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}
