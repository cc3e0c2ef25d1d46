use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Destination,
    Activity,
    Accommodation,
    Transport,
}

impl ItemKind {
    /// Accommodation duration is a nightly stay, not time spent during the day.
    pub fn counts_toward_duration(self) -> bool {
        !matches!(self, ItemKind::Accommodation)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Destination => "destination",
            ItemKind::Activity => "activity",
            ItemKind::Accommodation => "accommodation",
            ItemKind::Transport => "transport",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by catalog templates and placed trip items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub kind: ItemKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub duration_hours: f64,
    pub cost_per_person: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ItemDetails {
    pub fn counted_duration(&self) -> f64 {
        if self.kind.counts_toward_duration() {
            self.duration_hours
        } else {
            0.0
        }
    }

    pub fn parsed_start_time(&self) -> Option<NaiveTime> {
        self.start_time
            .as_deref()
            .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    #[serde(flatten)]
    pub details: ItemDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripItem {
    pub id: String,
    pub source_id: String,
    pub day_index: usize,
    #[serde(flatten)]
    pub details: ItemDetails,
}

impl TripItem {
    pub fn from_template(template: &CatalogItem, id: String, day_index: usize) -> Self {
        Self {
            id,
            source_id: template.id.clone(),
            day_index,
            details: template.details.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDay {
    pub day_number: usize,
    pub date: NaiveDate,
    pub items: Vec<TripItem>,
}

impl TripDay {
    pub fn new(day_number: usize, date: NaiveDate) -> Self {
        Self {
            day_number,
            date,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|item| item.details.cost_per_person).sum()
    }

    pub fn total_duration(&self) -> f64 {
        self.items.iter().map(|item| item.details.counted_duration()).sum()
    }

    /// Items ordered by start time for display. Untimed items follow the
    /// timed ones in insertion order; `items` itself is left untouched.
    pub fn schedule(&self) -> Vec<&TripItem> {
        let mut ordered: Vec<&TripItem> = self.items.iter().collect();
        ordered.sort_by(|a, b| {
            match (a.details.parsed_start_time(), b.details.parsed_start_time()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        ordered
    }
}
