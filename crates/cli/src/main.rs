use clap::Parser;
use jping_domain::{CheckMode, CliOverrides};
use tracing::info;

mod bootstrap;
mod di;
mod report;

#[derive(Parser)]
#[command(name = "jping")]
#[command(version)]
#[command(about = "jping - ping every ARP neighbor of your routers before and after a change")]
struct Cli {
    /// Capture the baseline: read ARP tables, ping every neighbor, store results
    #[arg(short = 'p', long)]
    pre: bool,

    /// Re-ping stored neighbors and compare against the baseline
    #[arg(short = 'a', long)]
    post: bool,

    /// Select the mode by name (pre or post)
    #[arg(short = 'c', long, value_name = "MODE")]
    check: Option<String>,

    /// Configuration file path
    #[arg(short = 'f', long, value_name = "FILE")]
    config: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Login used on every router
    #[arg(short = 'u', long)]
    user: Option<String>,

    /// Echo requests sent per neighbor
    #[arg(long)]
    count: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mode = CheckMode::from_flags(cli.pre, cli.post, cli.check.as_deref())?;

    // Load configuration
    let cli_overrides = CliOverrides {
        user: cli.user.clone(),
        ping_count: cli.count,
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    let targets = config.targets()?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting jping v{} ({})", env!("CARGO_PKG_VERSION"), mode);

    // Initialize database
    let pool = bootstrap::init_database(&config.database.path).await?;

    // Dependency Injection - Build all dependencies
    let repos = di::Repositories::new(pool.clone());
    let network = di::NetworkServices::new(&config);
    let use_cases = di::UseCases::new(&config, &repos, &network);

    let report = use_cases.run_checks.execute(mode, &targets).await;
    pool.close().await;

    println!("{}", report::render(&report));

    let failed = report.failures().count();
    if failed > 0 {
        anyhow::bail!("{} of {} routers failed", failed, report.hosts.len());
    }

    Ok(())
}
