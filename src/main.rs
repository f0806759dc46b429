// src/main.rs
use anyhow::Result;
use clap::Parser;
use notebox::cli::args::Args;
use notebox::infrastructure::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_deref())?;

    // -v/-vv override the configured level
    let level = match args.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("notebox={}", level).parse()?),
        )
        .init();

    notebox::run(args, config)
}
