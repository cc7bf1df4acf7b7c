pub mod model;

#[cfg(feature = "server")]
pub mod server;

pub mod prelude {
    pub use crate::model::mergington_catalog;
    pub use crate::model::Activity;
    pub use crate::model::Catalog;
    pub use crate::model::Enrollment;
    #[cfg(feature = "server")]
    pub use crate::server::{MemoryStorage, RosterError, RosterHandler, RosterRepository};
}
