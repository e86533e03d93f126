//! clubreg CLI
//!
//! Command-line interface for the club and event registry

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clubreg_core::logging_facility::{init, Profile};
use clubreg_core_types::RequestId;
use clubreg_engine::Registry;
use clubreg_store::{FileKv, KvStore, MemoryKv, SqliteKv};

mod commands;
mod config;

use config::{Backend, FileConfig, LogFormat, Overrides, Settings};

#[derive(Debug, Parser)]
#[command(name = "clubreg")]
#[command(about = "clubreg - Club and event registry", long_about = None)]
struct Cli {
    /// Config file (default: .clubreg/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file, or directory for the files backend
    #[arg(long, global = true, env = "CLUBREG_DB")]
    db: Option<PathBuf>,

    #[arg(long, global = true, value_enum, env = "CLUBREG_BACKEND")]
    backend: Option<Backend>,

    #[arg(long, global = true, value_enum, env = "CLUBREG_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Club operations (register, list, remove, statistics)
    Club(commands::club::ClubArgs),
    /// Event operations (create, attendance, attach and detach clubs)
    Event(commands::event::EventArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(
        file,
        Overrides {
            db: cli.db,
            backend: cli.backend,
            log_format: cli.log_format,
        },
    )?;

    init(match settings.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let request_id = RequestId::new();
    let span = tracing::info_span!("request", request_id = %request_id);
    let _guard = span.enter();

    let mut registry = Registry::open(open_backend(&settings)?)?.with_request_id(request_id);

    match cli.command {
        Commands::Club(args) => commands::club::execute(args, &mut registry),
        Commands::Event(args) => commands::event::execute(args, &mut registry),
    }
}

fn open_backend(settings: &Settings) -> clubreg_store::Result<Box<dyn KvStore>> {
    tracing::debug!(backend = ?settings.backend, path = %settings.path.display(), "opening store");
    Ok(match settings.backend {
        Backend::Sqlite => Box::new(SqliteKv::open(&settings.path)?),
        Backend::Files => Box::new(FileKv::new(&settings.path)),
        Backend::Memory => Box::new(MemoryKv::new()),
    })
}
