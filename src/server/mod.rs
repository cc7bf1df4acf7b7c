mod config;
mod error;
mod memory_storage;
mod observability;
mod roster_handler;
mod roster_repository;
pub mod route;

pub use config::{load_catalog_file, ServerConfig};
pub use error::{ConfigError, ErrorResponse, RosterError};
pub use memory_storage::MemoryStorage;
pub use observability::LogConfig;
pub use roster_handler::{MessageResponse, RosterHandler, SignupQuery};
pub use roster_repository::RosterRepository;
pub use route::create_roster_route;
