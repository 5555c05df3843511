use std::collections::BTreeSet;

use serde::Serialize;

use super::error::{Result, ScheduleError};
use super::types::{Interval, SlotKey, TimeOfDay, Weekday};

/// A tour guide with weekly availability and an assignment history
#[derive(Debug, Clone, Serialize)]
pub struct Navigator {
    name: String,
    /// Indexed by `Weekday::index()`. `None` means nothing was declared for
    /// that day, `Some(vec![])` is an explicit day off.
    availability: [Option<Vec<Interval>>; 5],
    tour_count: u32,
    assigned_slots: BTreeSet<SlotKey>,
}

impl Navigator {
    pub fn new(name: impl Into<String>) -> Self {
        Navigator {
            name: name.into(),
            availability: Default::default(),
            tour_count: 0,
            assigned_slots: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tour_count(&self) -> u32 {
        self.tour_count
    }

    pub fn assigned_slots(&self) -> &BTreeSet<SlotKey> {
        &self.assigned_slots
    }

    /// Declared intervals for a day, or `None` if the day was never declared
    pub fn availability(&self, day: Weekday) -> Option<&[Interval]> {
        self.availability[day.index()].as_deref()
    }

    /// Appends an interval to the day's availability
    pub fn add_availability(&mut self, day: Weekday, interval: Interval) {
        self.availability[day.index()]
            .get_or_insert_with(Vec::new)
            .push(interval);
    }

    /// Replaces the whole day. An empty list marks a day off.
    pub fn replace_availability(&mut self, day: Weekday, intervals: Vec<Interval>) {
        self.availability[day.index()] = Some(intervals);
    }

    pub fn is_assigned(&self, day: Weekday, time: TimeOfDay) -> bool {
        self.assigned_slots.contains(&SlotKey::new(day, time))
    }

    /// Records a tour for this navigator
    pub fn mark_assigned(&mut self, day: Weekday, time: TimeOfDay) -> Result<()> {
        if !self.assigned_slots.insert(SlotKey::new(day, time)) {
            return Err(ScheduleError::AlreadyAssigned {
                navigator: self.name.clone(),
                day,
                time,
            });
        }
        self.tour_count += 1;
        Ok(())
    }

    /// Whether some declared interval on `day` holds a tour that starts at
    /// `time` and runs for `duration_minutes`
    pub fn is_available_for(&self, day: Weekday, time: TimeOfDay, duration_minutes: i64) -> bool {
        self.availability(day)
            .map(|intervals| intervals.iter().any(|iv| iv.covers(time, duration_minutes)))
            .unwrap_or(false)
    }
}
