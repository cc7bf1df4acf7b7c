use super::{ConfigError, LogConfig};
use crate::model::{mergington_catalog, Catalog};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "server")]
#[command(version, about = "Extracurricular activity enrollment server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "ROSTER_ADDR", default_value = "0.0.0.0:3000")]
    pub addr: SocketAddr,

    /// Directory served under /static
    #[arg(long, env = "ROSTER_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// JSON seed catalog, same shape as GET /activities (built-in catalog if unset)
    #[arg(long, env = "ROSTER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "ROSTER_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,

    /// Emit logs as JSON lines
    #[arg(long, env = "ROSTER_LOG_JSON")]
    pub log_json: bool,

    /// Verbose development logging: debug level and thread ids
    #[arg(long, env = "ROSTER_LOG_DEV")]
    pub log_dev: bool,
}

impl ServerConfig {
    pub fn log_config(&self) -> LogConfig {
        let config = if self.log_dev {
            LogConfig::dev()
        } else {
            LogConfig {
                default_level: self.log_level,
                ..Default::default()
            }
        };
        if self.log_json {
            config.with_json()
        } else {
            config
        }
    }

    /// The catalog the store starts with.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog {
            Some(path) => load_catalog_file(path),
            None => Ok(mergington_catalog()),
        }
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog, ConfigError> {
    let reader = BufReader::new(File::open(path)?);
    let catalog: Catalog = serde_json::from_reader(reader)?;

    for (name, activity) in catalog.iter() {
        if let Some(participant) = activity.duplicate_participant() {
            return Err(ConfigError::DuplicateParticipant {
                activity: name.to_string(),
                participant: participant.to_string(),
            });
        }
    }

    info!(path = %path.display(), activities = catalog.len(), "Loaded seed catalog");
    Ok(catalog)
}
