use clap::Parser;
use pagelift::{
    batch::{self, DEFAULT_OUTPUT, KNOWN_SLUGS},
    config,
    pages::LegacyPageStore,
    telemetry,
};
use std::path::PathBuf;
use tracing::info;

/// Extract profile data from every legacy page into one JSON file.
#[derive(Parser, Debug)]
#[command(name = "pagelift-extract", version, about)]
struct Args {
    /// Directory holding `<slug>/page.tsx` files. Defaults to LEGACY_PAGES_DIR.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Where to write the extracted profiles.
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Pages to extract. Defaults to every known page.
    slugs: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let args = Args::parse();

    let root = match args.root {
        Some(root) => root,
        None => config::Config::from_env()?.legacy_pages_dir().to_path_buf(),
    };
    let store = LegacyPageStore::new(root);

    let slugs: Vec<String> = if args.slugs.is_empty() {
        KNOWN_SLUGS.iter().map(|s| s.to_string()).collect()
    } else {
        args.slugs
    };

    let report = batch::extract_all(&store, slugs.as_slice()).await;
    batch::write_profiles(&args.output, &report.profiles())?;

    println!("{}", report.checklist());
    info!("Wrote {}", args.output.display());

    Ok(())
}
