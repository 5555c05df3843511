use chrono::{NaiveTime, Timelike};

use super::error::{Result, ScheduleError};
use super::types::{ScheduleEntry, TimeOfDay};

/// Morning walk-in tour (10:00 AM)
pub const MORNING_WALK_IN: TimeOfDay = TimeOfDay::at(10, 0);

/// Afternoon walk-in tour (3:00 PM)
pub const AFTERNOON_WALK_IN: TimeOfDay = TimeOfDay::at(15, 0);

/// The two fixed walk-in times offered every day, in schedule order
pub const WALK_IN_TIMES: [TimeOfDay; 2] = [MORNING_WALK_IN, AFTERNOON_WALK_IN];

/// Every tour lasts one hour
pub const TOUR_DURATION_MINUTES: i64 = 60;

/// Groups larger than this get a second navigator
pub const LARGE_GROUP_THRESHOLD: u32 = 30;

/// Parses a 12-hour time string (e.g. "9:00 AM", "12:30 pm") to minutes since midnight
pub fn parse_time_to_minutes(time_str: &str) -> Result<u16> {
    let trimmed = time_str.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%I:%M %p").map_err(|_| ScheduleError::TimeParse {
        input: trimmed.to_string(),
    })?;
    // hour() < 24 and minute() < 60, so this fits comfortably in u16
    Ok((time.hour() * 60 + time.minute()) as u16)
}

/// Formats minutes since midnight as a 12-hour time string (e.g. "9:00 AM")
pub fn format_minutes(minutes: u16) -> String {
    let hours = (minutes / 60) % 24;
    let mins = minutes % 60;
    let meridiem = if hours < 12 { "AM" } else { "PM" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, mins, meridiem)
}

/// Whether `time` is one of the fixed walk-in times
pub fn is_walk_in_time(time: TimeOfDay) -> bool {
    WALK_IN_TIMES.contains(&time)
}

/// Sorts a day's entries by time of day. The sort is stable, so entries at the
/// same time keep their insertion order.
pub fn sort_entries_by_time(entries: &mut [ScheduleEntry]) {
    entries.sort_by_key(|entry| entry.time);
}
