pub mod budget;
pub mod itinerary;
pub mod planner;

pub use crate::domain::model::{CatalogItem, ItemDetails, ItemKind, TripDay, TripItem};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
