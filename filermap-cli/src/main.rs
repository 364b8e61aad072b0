mod commands;
mod config;
mod init;
mod mc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use filermap_common::ProcessEnv;
use tracing_subscriber::EnvFilter;

/// Map network-filer paths onto MinIO client aliases and buckets
#[derive(Parser)]
#[command(name = "filermap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with initializer settings
    #[arg(short, long, global = true, env = "FILERMAP_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print structured output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register every configured filer as an mc alias and write the done marker
    Init {
        /// mc executable to run
        #[arg(long = "mc", env = "FILERMAP_MC", value_name = "BIN")]
        mc_binary: Option<String>,

        /// Marker file written once all aliases were attempted
        #[arg(long, env = "FILERMAP_DONE_FILE", value_name = "PATH")]
        done_file: Option<PathBuf>,

        /// Discard mc output
        #[arg(long)]
        quiet: bool,
    },
    /// Print the mc path (`alias/bucket/key`) for a filer path
    Resolve { path: String },
    /// Print the filer, share and object key of a path
    Components { path: String },
    /// Print endpoint and bucket settings for a filer path
    EnvConfig { path: String },
    /// Report whether a path refers to a filer
    Check { path: String },
    /// List filers configured in the environment
    List,
    /// Print the built-in filer alias table
    Aliases,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let env = ProcessEnv;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Init {
            mc_binary,
            done_file,
            quiet,
        } => {
            let config = commands::init_config(cli.config.as_ref(), mc_binary, done_file, quiet)?;
            commands::init(&env, &config);
            Ok(())
        }
        Commands::Resolve { path } => commands::resolve(&env, &path, &mut out),
        Commands::Components { path } => commands::components(&path, cli.json, &mut out),
        Commands::EnvConfig { path } => commands::env_config(&env, &path, cli.json, &mut out),
        Commands::Check { path } => commands::check(&path, &mut out),
        Commands::List => commands::list(&env, cli.json, &mut out),
        Commands::Aliases => commands::aliases(&mut out),
    }
}
