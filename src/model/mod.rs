mod activity;
mod catalog;
mod enrollment;
mod seed;

pub use activity::Activity;
pub use catalog::Catalog;
pub use enrollment::Enrollment;
pub use seed::mergington_catalog;
