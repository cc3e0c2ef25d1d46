use crate::core::itinerary::Trip;
use crate::domain::model::TripItem;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};

/// One user action against the itinerary. Day and item positions are 0-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlanAction {
    AddDay,
    RemoveDay { day: usize },
    DropItem { item: String, day: usize },
    RemoveItem { day: usize, item: usize },
    SetTravelers { count: u32 },
    SetTitle { title: String },
}

impl std::fmt::Display for PlanAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanAction::AddDay => write!(f, "add day"),
            PlanAction::RemoveDay { day } => write!(f, "remove day #{}", day),
            PlanAction::DropItem { item, day } => write!(f, "drop '{}' into day #{}", item, day),
            PlanAction::RemoveItem { day, item } => {
                write!(f, "remove item #{} from day #{}", item, day)
            }
            PlanAction::SetTravelers { count } => write!(f, "set travelers to {}", count),
            PlanAction::SetTitle { title } => write!(f, "set title to '{}'", title),
        }
    }
}

/// A planning session: a read-only catalog plus the trip being built from it.
pub struct TripPlanner<C: CatalogSource> {
    catalog: C,
    trip: Trip,
}

impl<C: CatalogSource> TripPlanner<C> {
    pub fn new(catalog: C, trip: Trip) -> Self {
        Self { catalog, trip }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn trip_mut(&mut self) -> &mut Trip {
        &mut self.trip
    }

    pub fn into_trip(self) -> Trip {
        self.trip
    }

    pub fn drop_item(&mut self, catalog_id: &str, day_index: usize) -> Result<&TripItem> {
        let template = self
            .catalog
            .find(catalog_id)
            .ok_or_else(|| PlannerError::UnknownCatalogItem {
                id: catalog_id.to_string(),
            })?;
        self.trip.move_item_to_day(template, day_index)
    }

    pub fn apply(&mut self, action: &PlanAction) -> Result<()> {
        tracing::debug!("Applying action: {}", action);
        match action {
            PlanAction::AddDay => {
                self.trip.add_day();
            }
            PlanAction::RemoveDay { day } => {
                self.trip.remove_day(*day)?;
            }
            PlanAction::DropItem { item, day } => {
                self.drop_item(item, *day)?;
            }
            PlanAction::RemoveItem { day, item } => {
                self.trip.remove_item(*day, *item)?;
            }
            PlanAction::SetTravelers { count } => self.trip.set_traveler_count(*count)?,
            PlanAction::SetTitle { title } => self.trip.set_title(title.as_str()),
        }
        Ok(())
    }

    /// Applies actions in order, stopping at the first failure. Returns the
    /// number of actions applied.
    pub fn replay(&mut self, actions: &[PlanAction]) -> Result<usize> {
        for (position, action) in actions.iter().enumerate() {
            if let Err(e) = self.apply(action) {
                tracing::error!("❌ Action #{} ({}) failed: {}", position, action, e);
                return Err(e);
            }
        }
        tracing::info!("✅ Replayed {} action(s)", actions.len());
        Ok(actions.len())
    }
}
