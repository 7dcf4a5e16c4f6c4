pub mod client;
pub mod error;
pub mod models;
pub mod params;
pub mod response;

pub use client::{ApiClient, WellsApi};
pub use error::ApiError;
pub use models::{Company, PozoDetail, ProductionAggregates, ProductionMonthly, ProductionStat};
pub use params::ProductionFilters;
