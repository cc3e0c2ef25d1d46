use crate::core::budget::{BudgetBreakdown, TripSummary};
use crate::domain::model::{CatalogItem, TripDay, TripItem};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_positive_number;
use chrono::{Days, NaiveDate, Utc};
use serde::Serialize;

/// The trip aggregate. Days are numbered 1..=N without gaps, every item's
/// `day_index` equals the number of the day holding it, and there is always
/// at least one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    title: String,
    start_date: NaiveDate,
    traveler_count: u32,
    days: Vec<TripDay>,
    #[serde(skip)]
    last_stamp: i64,
}

impl Trip {
    pub fn new(title: impl Into<String>, start_date: NaiveDate, traveler_count: u32) -> Result<Self> {
        validate_positive_number("traveler_count", traveler_count, 1)?;

        Ok(Self {
            title: title.into(),
            start_date,
            traveler_count,
            days: vec![TripDay::new(1, start_date)],
            last_stamp: 0,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        tracing::debug!("Trip title set to '{}'", self.title);
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn traveler_count(&self) -> u32 {
        self.traveler_count
    }

    pub fn set_traveler_count(&mut self, count: u32) -> Result<()> {
        validate_positive_number("traveler_count", count, 1)?;
        self.traveler_count = count;
        tracing::debug!("Traveler count set to {}", count);
        Ok(())
    }

    pub fn days(&self) -> &[TripDay] {
        &self.days
    }

    pub fn day(&self, day_index: usize) -> Option<&TripDay> {
        self.days.get(day_index)
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|day| day.items.len()).sum()
    }

    pub fn items(&self) -> impl Iterator<Item = &TripItem> {
        self.days.iter().flat_map(|day| day.items.iter())
    }

    pub fn add_day(&mut self) -> &[TripDay] {
        let day_number = self.days.len() + 1;
        let date = self.date_for(day_number);
        self.days.push(TripDay::new(day_number, date));
        tracing::info!("📅 Added day {} ({})", day_number, date);
        &self.days
    }

    /// Removes the day at `day_index` along with its items. Returns
    /// `Ok(false)` without changing anything when it is the only day left.
    pub fn remove_day(&mut self, day_index: usize) -> Result<bool> {
        self.check_day_index(day_index)?;

        if self.days.len() == 1 {
            tracing::warn!("Refusing to remove the last remaining day");
            return Ok(false);
        }

        let removed = self.days.remove(day_index);
        tracing::info!(
            "🗑️ Removed day {} with {} item(s)",
            removed.day_number,
            removed.items.len()
        );
        self.renumber_from(day_index);
        Ok(true)
    }

    /// Places a copy of `template` at the end of the day at `target_day_index`.
    /// The copy gets a fresh id so the same template can be dropped repeatedly.
    pub fn move_item_to_day(
        &mut self,
        template: &CatalogItem,
        target_day_index: usize,
    ) -> Result<&TripItem> {
        self.check_day_index(target_day_index)?;

        let id = format!("{}-{}", template.id, self.next_stamp());
        let day = &mut self.days[target_day_index];
        let item = TripItem::from_template(template, id, day.day_number);
        tracing::info!(
            "➕ Dropped '{}' into day {} as {}",
            item.details.title,
            day.day_number,
            item.id
        );
        day.items.push(item);
        Ok(&day.items[day.items.len() - 1])
    }

    pub fn remove_item(&mut self, day_index: usize, item_index: usize) -> Result<TripItem> {
        self.check_day_index(day_index)?;

        let day = &mut self.days[day_index];
        if item_index >= day.items.len() {
            return Err(PlannerError::invalid_index("item", item_index, day.items.len()));
        }

        let removed = day.items.remove(item_index);
        tracing::info!(
            "➖ Removed '{}' from day {}",
            removed.details.title,
            day.day_number
        );
        Ok(removed)
    }

    /// Per-person cost across every day.
    pub fn total_cost(&self) -> f64 {
        self.days.iter().map(TripDay::total_cost).sum()
    }

    pub fn group_total_cost(&self) -> f64 {
        self.total_cost() * f64::from(self.traveler_count)
    }

    /// Hours spent on items, not counting accommodation.
    pub fn total_duration(&self) -> f64 {
        self.days.iter().map(TripDay::total_duration).sum()
    }

    pub fn budget_breakdown(&self) -> BudgetBreakdown {
        BudgetBreakdown::from_trip(self)
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary::from_trip(self)
    }

    fn check_day_index(&self, day_index: usize) -> Result<()> {
        if day_index >= self.days.len() {
            return Err(PlannerError::invalid_index("day", day_index, self.days.len()));
        }
        Ok(())
    }

    // 超出 chrono 可表示範圍時固定為 NaiveDate::MAX
    fn date_for(&self, day_number: usize) -> NaiveDate {
        let offset = day_number.saturating_sub(1) as u64;
        match self.start_date.checked_add_days(Days::new(offset)) {
            Some(date) => date,
            None => {
                tracing::warn!(
                    "Date for day {} overflows from {}, clamping to {}",
                    day_number,
                    self.start_date,
                    NaiveDate::MAX
                );
                NaiveDate::MAX
            }
        }
    }

    fn renumber_from(&mut self, first: usize) {
        for position in first..self.days.len() {
            let day_number = position + 1;
            let date = self.date_for(day_number);
            let day = &mut self.days[position];
            day.day_number = day_number;
            day.date = date;
            for item in &mut day.items {
                item.day_index = day_number;
            }
        }
    }

    // 以毫秒時間戳作為 ID 後綴；同一毫秒內重複拖放時遞增以保持唯一
    fn next_stamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_stamp = now.max(self.last_stamp + 1);
        self.last_stamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ItemDetails, ItemKind};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn template(id: &str, kind: ItemKind, hours: f64, cost: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            details: ItemDetails {
                kind,
                title: id.to_string(),
                description: String::new(),
                location: "Paris, France".to_string(),
                duration_hours: hours,
                cost_per_person: cost,
                start_time: None,
                image: None,
            },
        }
    }

    fn assert_consistent(trip: &Trip) {
        for (position, day) in trip.days().iter().enumerate() {
            assert_eq!(day.day_number, position + 1);
            assert_eq!(day.date, start() + Days::new(position as u64));
            for item in &day.items {
                assert_eq!(item.day_index, day.day_number);
            }
        }
    }

    #[test]
    fn test_new_trip_has_one_empty_day() {
        let trip = Trip::new("My Paris Adventure", start(), 2).unwrap();
        assert_eq!(trip.days().len(), 1);
        assert_eq!(trip.days()[0].day_number, 1);
        assert_eq!(trip.days()[0].date, start());
        assert!(trip.days()[0].is_empty());
    }

    #[test]
    fn test_zero_travelers_rejected() {
        assert!(Trip::new("Empty", start(), 0).is_err());

        let mut trip = Trip::new("Trip", start(), 2).unwrap();
        assert!(trip.set_traveler_count(0).is_err());
        assert_eq!(trip.traveler_count(), 2);
        trip.set_traveler_count(4).unwrap();
        assert_eq!(trip.traveler_count(), 4);
    }

    #[test]
    fn test_add_day_increments_date() {
        let mut trip = Trip::new("Trip", start(), 1).unwrap();
        let days = trip.add_day();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].day_number, 2);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 6, 16).unwrap());
    }

    #[test]
    fn test_add_day_past_max_date_clamps() {
        let mut trip = Trip::new("Trip", NaiveDate::MAX, 1).unwrap();
        let days = trip.add_day();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].day_number, 2);
        assert_eq!(days[1].date, NaiveDate::MAX);
    }

    #[test]
    fn test_remove_last_remaining_day_is_noop() {
        let mut trip = Trip::new("Trip", start(), 1).unwrap();
        assert!(!trip.remove_day(0).unwrap());
        assert_eq!(trip.days().len(), 1);
    }

    #[test]
    fn test_remove_middle_day_renumbers() {
        let mut trip = Trip::new("Trip", start(), 1).unwrap();
        trip.add_day();
        trip.add_day();
        let tower = template("dest-1", ItemKind::Destination, 3.0, 25.0);
        trip.move_item_to_day(&tower, 2).unwrap();

        assert!(trip.remove_day(1).unwrap());

        assert_eq!(trip.days().len(), 2);
        assert_eq!(trip.days()[1].items.len(), 1);
        assert_eq!(trip.days()[1].items[0].day_index, 2);
        assert_consistent(&trip);
    }

    #[test]
    fn test_remove_day_out_of_range() {
        let mut trip = Trip::new("Trip", start(), 1).unwrap();
        trip.add_day();
        let err = trip.remove_day(5).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::InvalidIndex { target: "day", index: 5, len: 2 }
        ));
        assert_eq!(trip.days().len(), 2);
    }

    #[test]
    fn test_move_item_sets_day_and_fresh_id() {
        let mut trip = Trip::new("Trip", start(), 1).unwrap();
        trip.add_day();
        let tower = template("dest-1", ItemKind::Destination, 3.0, 25.0);

        let first = trip.move_item_to_day(&tower, 1).unwrap().id.clone();
        let second = trip.move_item_to_day(&tower, 1).unwrap().id.clone();

        assert_ne!(first, second);
        assert!(first.starts_with("dest-1-"));
        let day = &trip.days()[1];
        assert_eq!(day.items.len(), 2);
        assert!(day.items.iter().all(|i| i.day_index == 2 && i.source_id == "dest-1"));
    }

    #[test]
    fn test_move_item_to_missing_day() {
        let mut trip = Trip::new("Trip", start(), 1).unwrap();
        let tower = template("dest-1", ItemKind::Destination, 3.0, 25.0);
        assert!(trip.move_item_to_day(&tower, 1).is_err());
        assert_eq!(trip.item_count(), 0);
    }

    #[test]
    fn test_remove_item() {
        let mut trip = Trip::new("Trip", start(), 1).unwrap();
        let tower = template("dest-1", ItemKind::Destination, 3.0, 25.0);
        let louvre = template("dest-2", ItemKind::Destination, 4.0, 17.0);
        trip.move_item_to_day(&tower, 0).unwrap();
        trip.move_item_to_day(&louvre, 0).unwrap();

        let removed = trip.remove_item(0, 0).unwrap();
        assert_eq!(removed.source_id, "dest-1");
        assert_eq!(trip.days()[0].items[0].source_id, "dest-2");

        assert!(matches!(
            trip.remove_item(0, 3),
            Err(PlannerError::InvalidIndex { target: "item", .. })
        ));
        assert!(matches!(
            trip.remove_item(2, 0),
            Err(PlannerError::InvalidIndex { target: "day", .. })
        ));
        assert_eq!(trip.item_count(), 1);
    }

    #[test]
    fn test_totals() {
        let mut trip = Trip::new("Trip", start(), 2).unwrap();
        trip.add_day();
        trip.move_item_to_day(&template("dest-1", ItemKind::Destination, 3.0, 25.0), 0)
            .unwrap();
        trip.move_item_to_day(&template("dest-2", ItemKind::Destination, 4.0, 17.0), 1)
            .unwrap();
        trip.move_item_to_day(&template("act-1", ItemKind::Activity, 2.0, 35.0), 1)
            .unwrap();
        trip.move_item_to_day(&template("acc-1", ItemKind::Accommodation, 24.0, 0.0), 0)
            .unwrap();

        assert_eq!(trip.total_cost(), 77.0);
        assert_eq!(trip.group_total_cost(), 154.0);
        assert_eq!(trip.total_duration(), 9.0);
    }
}
