use clap::Parser;
use pagelift::{
    batch::{self, DEFAULT_OUTPUT},
    config,
    repositories::PageRepository,
    telemetry,
};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::path::PathBuf;
use tracing::{info, warn};

/// Load extracted profiles into the pages and page_links tables.
#[derive(Parser, Debug)]
#[command(name = "pagelift-migrate", version, about)]
struct Args {
    /// JSON file written by pagelift-extract.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    input: PathBuf,

    /// Only apply schema migrations.
    #[arg(long)]
    schema_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let args = Args::parse();
    let config = config::Config::from_env()?;

    let pool: Pool<Postgres> = PgPoolOptions::new()
        .max_connections(5)
        .connect(config.database_url())
        .await?;

    // runs all pending migrations; no-op if up-to-date
    sqlx::migrate!("./migrations").run(&pool).await?;

    if args.schema_only {
        return Ok(());
    }

    let profiles = batch::read_profiles(&args.input)?;
    info!("Loaded {} profiles from {}", profiles.len(), args.input.display());

    let repo = PageRepository::new(pool);
    let summary = batch::persist_profiles(&repo, &profiles).await;

    println!(
        "{} created, {} updated, {} links, {} failed",
        summary.created,
        summary.updated,
        summary.links,
        summary.failed.len()
    );
    if !summary.failed.is_empty() {
        warn!("Failed pages: {}", summary.failed.join(", "));
    }

    Ok(())
}
