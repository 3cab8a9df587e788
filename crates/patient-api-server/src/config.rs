//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use patient_api_core::{JsonFileStore, PatientStore, SqliteStore, StoreResult};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Single pretty-printed JSON document
    Json,
    /// Embedded SQLite database
    Sqlite,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "patient-api",
    version,
    about = "Patient record API with BMI classification",
    long_about = "Serves create/read/update operations for patient records over HTTP.\n\n\
        Records are kept in a single JSON document by default; every response\n\
        carries a freshly computed BMI and category.\n\n\
        EXAMPLES:\n\
        \n  patient-api                                  Serve ./patients.json on 127.0.0.1:8000\n\
        \n  patient-api --addr 0.0.0.0:9000 -v           Listen on all interfaces with debug logs\n\
        \n  patient-api --backend sqlite --data-file patients.db"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "PATIENT_API_ADDR", default_value = "127.0.0.1:8000")]
    pub addr: SocketAddr,

    /// Backing document (or database file for the sqlite backend)
    #[arg(long, env = "PATIENT_API_DATA_FILE", default_value = "patients.json")]
    pub data_file: PathBuf,

    /// Storage backend
    #[arg(long, env = "PATIENT_API_BACKEND", value_enum, default_value_t = Backend::Json)]
    pub backend: Backend,

    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ServerConfig {
    /// Default `env_logger` filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Open the configured store.
    pub fn open_store(&self) -> StoreResult<Box<dyn PatientStore + Send>> {
        info!(
            "Using {:?} backend at {}",
            self.backend,
            self.data_file.display()
        );
        Ok(match self.backend {
            Backend::Json => Box::new(JsonFileStore::new(&self.data_file)),
            Backend::Sqlite => Box::new(SqliteStore::open(&self.data_file)?),
        })
    }
}
