use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use flatcar_sync::App;
use flatcar_sync::Config;
use flatcar_sync::error::exit_status;
use flatcar_sync::ops::git::RealGit;
use flatcar_sync::ops::portage::RealPortage;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "flatcar-sync", version)]
#[command(about = "Sync the Flatcar scripts repository and its overlays to the running release", long_about = None)]
pub struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(e) = setup_logging() {
        eprintln!("Failed to set up logging: {e:#}");
    }

    let app = App::new(Config::default(), RealGit, RealPortage);

    let result = app.cmd_sync(&mut std::io::stdout()).await;
    ExitCode::from(exit_status(result, &mut std::io::stderr()))
}

fn setup_logging() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
