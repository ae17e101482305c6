use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tower_http::trace::TraceLayer;
use tracing::info;

use runtime::{AppConfig, CliArgs};
use users::api::gql::{build_schema, routes};
use users::domain::service::Service;
use users::infra::storage::migrations::Migrator;
use users::infra::storage::sea_orm_repo::SeaOrmUsersRepository;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// usergraph server - GraphQL CRUD over the user directory
#[derive(Parser)]
#[command(name = "usergraph-server")]
#[command(about = "usergraph server - GraphQL CRUD over the user directory")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for the HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

/// Normalize a sqlite DSN: keep ":memory:" as-is, create parent directories
/// for file-backed paths, and default to `mode=rwc` so the first run can
/// create the database file.
fn prepare_sqlite_dsn(dsn: &str, create_dirs: bool) -> Result<String> {
    if dsn.eq_ignore_ascii_case("sqlite::memory:") || dsn.eq_ignore_ascii_case("sqlite://:memory:")
    {
        return Ok("sqlite::memory:".to_string());
    }
    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow!("sqlite DSN must start with sqlite:// (got: {dsn})"))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };
    if path_str.is_empty() {
        return Err(anyhow!("empty sqlite path in DSN"));
    }

    let path = PathBuf::from(path_str);
    if create_dirs {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
        }
    }

    let mut out = format!("sqlite://{}", path.to_string_lossy().replace('\\', "/"));
    match query {
        Some(q) => {
            out.push('?');
            out.push_str(q);
        }
        None => out.push_str("?mode=rwc"),
    }
    Ok(out)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.display().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config =
        AppConfig::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_cli_overrides(&args);

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command {
        Some(Commands::Check) => {
            if config.database.url.starts_with("sqlite") {
                prepare_sqlite_dsn(&config.database.url, false)?;
            }
            println!("configuration OK");
            Ok(())
        }
        Some(Commands::Run) | None => run_server(config).await,
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    runtime::logging::init(&config.logging)?;

    let mut url = config.database.url.clone();
    if url.starts_with("sqlite") {
        url = prepare_sqlite_dsn(&url, true)?;
    }

    let mut opts = ConnectOptions::new(url);
    if let Some(max_conns) = config.database.max_conns {
        opts.max_connections(max_conns);
    }
    let conn = Database::connect(opts)
        .await
        .context("failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("failed to run database migrations")?;

    let repo = Arc::new(SeaOrmUsersRepository::new(conn));
    let service = Arc::new(Service::new(repo));
    let schema = build_schema(service);

    let app = routes::router(schema).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}, playground at /playground");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = runtime::shutdown::wait_for_shutdown().await {
                tracing::error!(error = %e, "shutdown signal listener failed");
            }
        })
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}
