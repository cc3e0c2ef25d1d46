use crate::core::itinerary::Trip;
use crate::domain::model::ItemKind;
use chrono::NaiveDate;
use serde::Serialize;

/// Renders hours as `"{days}d {hours}h"` from 24 hours up, `"{hours}h"` below.
/// The hours part keeps the sign of the input, so negative totals print as-is.
pub fn format_duration(hours: f64) -> String {
    let days = (hours / 24.0).floor();
    // `+ 0.0` turns a -0 remainder into 0
    let remaining = hours % 24.0 + 0.0;
    if days > 0.0 {
        format!("{}d {}h", days, remaining)
    } else {
        format!("{}h", remaining)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub item_id: String,
    pub title: String,
    pub kind: ItemKind,
    pub cost_per_person: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBudget {
    pub day_number: usize,
    pub date: NaiveDate,
    pub lines: Vec<BudgetLine>,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetBreakdown {
    pub days: Vec<DayBudget>,
    pub per_person: f64,
    pub travelers: u32,
    pub group_total: f64,
}

impl BudgetBreakdown {
    pub fn from_trip(trip: &Trip) -> Self {
        let days = trip
            .days()
            .iter()
            .map(|day| DayBudget {
                day_number: day.day_number,
                date: day.date,
                lines: day
                    .items
                    .iter()
                    .map(|item| BudgetLine {
                        item_id: item.id.clone(),
                        title: item.details.title.clone(),
                        kind: item.details.kind,
                        cost_per_person: item.details.cost_per_person,
                    })
                    .collect(),
                subtotal: day.total_cost(),
            })
            .collect();

        Self {
            days,
            per_person: trip.total_cost(),
            travelers: trip.traveler_count(),
            group_total: trip.group_total_cost(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = (&DayBudget, &BudgetLine)> {
        self.days
            .iter()
            .flat_map(|day| day.lines.iter().map(move |line| (day, line)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub title: String,
    pub day_count: usize,
    pub item_count: usize,
    pub travelers: u32,
    pub per_person_cost: f64,
    pub group_cost: f64,
    pub duration_hours: f64,
    pub duration: String,
}

impl TripSummary {
    pub fn from_trip(trip: &Trip) -> Self {
        let duration_hours = trip.total_duration();
        Self {
            title: trip.title().to_string(),
            day_count: trip.days().len(),
            item_count: trip.item_count(),
            travelers: trip.traveler_count(),
            per_person_cost: trip.total_cost(),
            group_cost: trip.group_total_cost(),
            duration_hours,
            duration: format_duration(duration_hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog::Catalog;
    use crate::domain::ports::CatalogSource;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0h");
        assert_eq!(format_duration(5.0), "5h");
        assert_eq!(format_duration(24.0), "1d 0h");
        assert_eq!(format_duration(26.0), "1d 2h");
        assert_eq!(format_duration(48.0), "2d 0h");
        assert_eq!(format_duration(2.5), "2.5h");
        assert_eq!(format_duration(-1.0), "-1h");
        assert_eq!(format_duration(-25.0), "-1h");
        assert_eq!(format_duration(-24.0), "0h");
    }

    #[test]
    fn test_budget_breakdown_groups_by_day() {
        let catalog = Catalog::sample();
        let mut trip = Trip::new(
            "My Paris Adventure",
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            2,
        )
        .unwrap();
        trip.add_day();
        trip.move_item_to_day(catalog.find("dest-1").unwrap(), 0).unwrap();
        trip.move_item_to_day(catalog.find("acc-1").unwrap(), 0).unwrap();
        trip.move_item_to_day(catalog.find("act-1").unwrap(), 1).unwrap();

        let breakdown = trip.budget_breakdown();
        assert_eq!(breakdown.days.len(), 2);
        assert_eq!(breakdown.days[0].subtotal, 175.0);
        assert_eq!(breakdown.days[1].subtotal, 35.0);
        assert_eq!(breakdown.per_person, 210.0);
        assert_eq!(breakdown.travelers, 2);
        assert_eq!(breakdown.group_total, 420.0);

        let titles: Vec<&str> = breakdown.lines().map(|(_, l)| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Eiffel Tower", "Hotel Le Marais", "Seine River Cruise"]);
    }

    #[test]
    fn test_summary() {
        let catalog = Catalog::sample();
        let mut trip = Trip::new(
            "Weekend",
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            3,
        )
        .unwrap();
        trip.move_item_to_day(catalog.find("dest-2").unwrap(), 0).unwrap();
        trip.move_item_to_day(catalog.find("acc-1").unwrap(), 0).unwrap();

        let summary = trip.summary();
        assert_eq!(summary.day_count, 1);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.per_person_cost, 167.0);
        assert_eq!(summary.group_cost, 501.0);
        assert_eq!(summary.duration, "4h");
    }
}
