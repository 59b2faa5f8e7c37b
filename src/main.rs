use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matchbook::api::state::AppState;
use matchbook::config::AppConfig;
use matchbook::stats::{self, StatsFilter, StatsFilterParams};
use matchbook::storage::StorageConfig;

#[derive(Parser)]
#[command(name = "matchbook")]
#[command(about = "TCG match tracker with a statistics aggregation core")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one aggregation against the data directory and print JSON
    Stats {
        /// Which aggregation to run
        query: StatsQueryKind,

        /// Restrict to one season
        #[arg(long)]
        season: Option<String>,

        /// Restrict to one match type (TOURNAMENT, FRIENDLY or ALL)
        #[arg(long)]
        match_type: Option<String>,

        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Result limit (1-50)
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatsQueryKind {
    Factions,
    WinRates,
    Matchups,
    MatchTypes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&PathBuf::from(&cli.config))?;
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = PathBuf::from(data_dir);
    }
    if let Some(ref log_level) = cli.log_level {
        config.log_level = log_level.clone();
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting matchbook v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            let state = AppState {
                storage: Arc::new(storage),
            };
            let app = matchbook::api::build_router(state);
            let addr = format!(
                "{}:{}",
                host.unwrap_or(config.server.host),
                port.unwrap_or(config.server.port)
            );
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Stats {
            query,
            season,
            match_type,
            from,
            to,
            limit,
        } => {
            let params = StatsFilterParams {
                season_id: season,
                match_type,
                start_date: from,
                end_date: to,
                limit,
            };
            let filter = StatsFilter::from_params(&params)?;

            let json = match query {
                StatsQueryKind::Factions => {
                    serde_json::to_string_pretty(&stats::faction_stats(&storage, &filter)?)?
                }
                StatsQueryKind::WinRates => {
                    serde_json::to_string_pretty(&stats::hero_win_rates(&storage, &filter)?)?
                }
                StatsQueryKind::Matchups => {
                    serde_json::to_string_pretty(&stats::hero_matchups(&storage, &filter)?)?
                }
                StatsQueryKind::MatchTypes => {
                    serde_json::to_string_pretty(&stats::match_type_stats(&storage, &filter)?)?
                }
            };
            println!("{}", json);
        }
    }

    Ok(())
}
