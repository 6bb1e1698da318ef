use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use trolley::api::TrolleyApi;
use trolley::args::Cli;
use trolley::catalog::fixed::FixedCatalog;
use trolley::catalog::http::HttpCatalog;
use trolley::cli::session::{self, SessionContext};
use trolley::config::TrolleyConfig;
use trolley::error::{Result, TrolleyError};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = config_dir()?;
    let mut config = TrolleyConfig::load(&config_dir).unwrap_or_default();
    if let Some(base_url) = &cli.base_url {
        config.set("base_url", base_url)?;
    }

    let ctx = SessionContext {
        config,
        config_dir,
        show_badge: !cli.no_badge,
    };

    if cli.offline {
        let mut api = TrolleyApi::new(FixedCatalog::sample());
        session::run(&mut api, ctx)
    } else {
        let catalog = HttpCatalog::new(ctx.config.base_url.as_str())?;
        let mut api = TrolleyApi::new(catalog);
        session::run(&mut api, ctx)
    }
}

fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "trolley", "trolley")
        .ok_or_else(|| TrolleyError::Config("Could not determine config directory".into()))?;
    Ok(dirs.config_dir().to_path_buf())
}
