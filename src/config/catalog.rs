use crate::domain::model::{CatalogItem, ItemDetails, ItemKind};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_clock_time, validate_non_empty_string, validate_non_negative_amount,
    validate_unique_ids, Validate,
};

/// Immutable list of item templates that can be dropped into a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let catalog = Self { items };
        catalog.validate()?;
        Ok(catalog)
    }

    /// 內建的巴黎範例目錄
    pub fn sample() -> Self {
        let item = |id: &str,
                    kind: ItemKind,
                    title: &str,
                    description: &str,
                    duration_hours: f64,
                    cost_per_person: f64,
                    start_time: Option<&str>,
                    image: &str| CatalogItem {
            id: id.to_string(),
            details: ItemDetails {
                kind,
                title: title.to_string(),
                description: description.to_string(),
                location: "Paris, France".to_string(),
                duration_hours,
                cost_per_person,
                start_time: start_time.map(str::to_string),
                image: Some(image.to_string()),
            },
        };

        Self {
            items: vec![
                item(
                    "dest-1",
                    ItemKind::Destination,
                    "Eiffel Tower",
                    "Iconic iron lattice tower and symbol of Paris",
                    3.0,
                    25.0,
                    Some("09:00"),
                    "https://images.unsplash.com/photo-1511739001486-6bfe10ce785f?w=400",
                ),
                item(
                    "dest-2",
                    ItemKind::Destination,
                    "Louvre Museum",
                    "World's largest art museum and historic monument",
                    4.0,
                    17.0,
                    Some("14:00"),
                    "https://images.unsplash.com/photo-1566139884669-4b9356b4c040?w=400",
                ),
                item(
                    "act-1",
                    ItemKind::Activity,
                    "Seine River Cruise",
                    "Romantic boat tour along the Seine River",
                    2.0,
                    35.0,
                    Some("19:00"),
                    "https://images.unsplash.com/photo-1502602898536-47ad22581b52?w=400",
                ),
                item(
                    "acc-1",
                    ItemKind::Accommodation,
                    "Hotel Le Marais",
                    "Boutique hotel in historic district",
                    24.0,
                    150.0,
                    None,
                    "https://images.unsplash.com/photo-1564501049412-61c2a3083791?w=400",
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogSource for Catalog {
    fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}

impl Validate for CatalogItem {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("catalog.id", &self.id)?;
        validate_non_empty_string("catalog.title", &self.details.title)?;
        validate_non_negative_amount("catalog.duration_hours", self.details.duration_hours)?;
        validate_non_negative_amount("catalog.cost_per_person", self.details.cost_per_person)?;
        if let Some(start_time) = &self.details.start_time {
            validate_clock_time("catalog.start_time", start_time)?;
        }
        Ok(())
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_unique_ids(self.items.iter().map(|item| item.id.as_str()))?;
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}
