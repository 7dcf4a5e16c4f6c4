// Export our modules for use in binaries and tests
pub mod api;
pub mod config;
pub mod domain;
pub mod filter;
pub mod map;
pub mod production;
pub mod report;
pub mod status;

pub use domain::{StatusCategory, VolumeUnit};
pub use status::{normalize, Classification, StatusClassifier, StatusTables};
