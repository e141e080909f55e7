use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ghost_icons::config::Config;
use ghost_icons::constants::{output, themes};
use ghost_icons::manifest;
use ghost_icons::BatchDriver;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "ghost-icons")]
#[command(about = "Generate the ghost icon set (active/inactive at 16, 48 and 128 px)", long_about = None)]
struct Cli {
    /// YAML config file. Defaults to ./ghost-icons.yaml when it exists
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory the PNGs are written to (overrides the config)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every theme at every size (the default)
    Generate,
    /// Write the default config so it can be edited
    InitConfig {
        /// Where to write the config
        #[arg(default_value = output::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
    /// Print the manifest "icons" block for the active theme
    Manifest {
        /// Path prefix for each icon, e.g. "icons/"
        #[arg(long, default_value = "")]
        prefix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the per-file lines
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ghost_icons=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Some(Commands::InitConfig { path }) => init_config_command(path),
        Some(Commands::Manifest { prefix }) => {
            let config = load_config(&cli)?;
            manifest_command(&config, prefix)
        }
        Some(Commands::Generate) | None => {
            let config = load_config(&cli)?;
            generate_command(&config)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    Ok(config)
}

fn generate_command(config: &Config) -> Result<()> {
    let driver = BatchDriver::from_config(config);
    let written = driver.run()?;
    info!(count = written.len(), "Done");
    Ok(())
}

fn init_config_command(path: &Path) -> Result<()> {
    Config::init(path)?;
    println!("Created default config at: {}", path.display());
    Ok(())
}

fn manifest_command(config: &Config, prefix: &str) -> Result<()> {
    let block = manifest::icons_block(themes::ACTIVE, &config.sizes, prefix);
    let pretty = serde_json::to_string_pretty(&block).context("Failed to format manifest icons")?;
    println!("{}", pretty);
    Ok(())
}
