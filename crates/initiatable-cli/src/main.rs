use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use initiatable::Initiatable;
use initiatable_cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let namespace = commands::load_namespace(cli.namespace.as_deref())?;
    let settings = commands::load_settings(cli.settings.as_deref())?;
    let engine = Initiatable::new(namespace).with_settings(settings);
    debug!(command = ?cli.command, "running");

    let output = match &cli.command {
        Commands::Config { document } => {
            let document = commands::load_document(document)?;
            commands::config(&engine, &document)
        }
        Commands::Resolve { value, strict } => commands::resolve(&engine, value, *strict),
        Commands::Init {
            document,
            renderer_version,
        } => {
            let mut document = commands::load_document(document)?;
            commands::init(engine, &mut document, renderer_version)?
        }
    };

    println!("{}", commands::render(&output, cli.format)?);
    Ok(())
}
