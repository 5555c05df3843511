use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Result, ScheduleError};
use super::slot_utils::{format_minutes, parse_time_to_minutes};

/// Weekdays on which tours run, in schedule order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Position in the week, used to index fixed-size per-day tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    /// Accepts full names and three-letter abbreviations, any case
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| ScheduleError::invalid_input(format!("Unknown weekday '{}'", s.trim())))
    }
}

/// Time of day parsed from a 12-hour literal such as `9:00 AM`.
/// Stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Only for known-good constants; `hour < 24` and `minute < 60`
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        TimeOfDay(hour * 60 + minute)
    }

    pub fn parse(input: &str) -> Result<Self> {
        parse_time_to_minutes(input).map(TimeOfDay)
    }

    /// Builds a time from a 24-hour clock reading
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then(|| TimeOfDay::at(hour, minute))
    }

    pub fn minutes_from_midnight(self) -> i64 {
        i64::from(self.0)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        TimeOfDay::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        format_minutes(time.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.0))
    }
}

/// Half-open availability window `[start, end)` within one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Interval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::invalid_input(format!(
                "Availability must end after it starts ({} - {})",
                start, end
            )));
        }
        Ok(Interval { start, end })
    }

    /// Parses both ends from their 12-hour literals
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Interval::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)
    }

    /// Whether a tour starting at `time` and lasting `duration_minutes` fits inside
    pub fn covers(&self, time: TimeOfDay, duration_minutes: i64) -> bool {
        let start = time.minutes_from_midnight();
        self.start.minutes_from_midnight() <= start
            && start + duration_minutes <= self.end.minutes_from_midnight()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// A (day, time) pair identifying when a tour runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: Weekday,
    pub time: TimeOfDay,
}

impl SlotKey {
    pub fn new(day: Weekday, time: TimeOfDay) -> Self {
        SlotKey { day, time }
    }
}

/// State of a fixed walk-in slot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "navigator")]
pub enum WalkInState {
    #[default]
    NotOffered,
    Pending,
    Assigned(String),
}

/// A school group booked for a specific day and time
#[derive(Debug, Clone, Serialize)]
pub struct GroupTourRequest {
    pub day: Weekday,
    pub time: TimeOfDay,
    pub school: String,
    pub students: u32,
    assigned_navigators: Vec<String>,
}

impl GroupTourRequest {
    pub fn new(day: Weekday, time: TimeOfDay, school: String, students: u32) -> Self {
        GroupTourRequest {
            day,
            time,
            school,
            students,
            assigned_navigators: Vec::new(),
        }
    }

    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.day, self.time)
    }

    pub fn assigned_navigators(&self) -> &[String] {
        &self.assigned_navigators
    }

    pub(crate) fn set_assigned_navigators(&mut self, names: Vec<String>) {
        self.assigned_navigators = names;
    }
}

/// Which part of the catalog a schedule line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    WalkIn,
    GroupTour,
}

/// One line of the weekly schedule view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub time: TimeOfDay,
    pub kind: EntryKind,
    pub description: String,
}

/// All schedule lines for one weekday, sorted by time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub entries: Vec<ScheduleEntry>,
}
