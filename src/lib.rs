pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::{catalog::Catalog, toml_config::TripConfig};
pub use core::budget::{format_duration, BudgetBreakdown, TripSummary};
pub use core::itinerary::Trip;
pub use core::planner::{PlanAction, TripPlanner};
pub use domain::model::{CatalogItem, ItemDetails, ItemKind, TripDay, TripItem};
pub use domain::ports::CatalogSource;
pub use utils::error::{PlannerError, Result};
