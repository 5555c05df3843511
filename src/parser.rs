use std::path::Path;

use csv::Reader;
use serde::Deserialize;

use crate::schedule::{Interval, Result, ScheduleError, TimeOfDay, Weekday};

/// A navigator as read from a roster file
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorRecord {
    pub name: String,
    pub availability: Vec<(Weekday, Interval)>,
    pub days_off: Vec<Weekday>,
}

/// A group tour as read from a group tours file
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTourRecord {
    pub day: Weekday,
    pub time: TimeOfDay,
    pub school: String,
    pub students: u32,
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    day: String,
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
}

#[derive(Debug, Deserialize)]
struct GroupTourRow {
    day: String,
    time: String,
    school: String,
    students: String,
}

/// Parses availability written as `day,start,end` entries separated by `;`,
/// e.g. `Monday,9:00 AM,5:00 PM;Tuesday,9:00 AM,12:00 PM`
pub fn parse_availability_spec(spec: &str) -> Result<Vec<(Weekday, Interval)>> {
    let mut availability = Vec::new();
    for entry in spec.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ScheduleError::invalid_input(format!(
                "Invalid availability entry '{}': expected day,start,end",
                entry
            )));
        }
        let day: Weekday = parts[0].parse()?;
        availability.push((day, Interval::parse(parts[1], parts[2])?));
    }
    Ok(availability)
}

/// Parses a student head count. Only plain digits are accepted.
pub fn parse_student_count(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ScheduleError::invalid_input(format!(
            "Number of students must be a whole number, got '{}'",
            trimmed
        )));
    }
    trimmed
        .parse()
        .map_err(|_| ScheduleError::invalid_input(format!("Number of students is too large: {}", trimmed)))
}

/// Parses the yes/no answer for offering a walk-in tour
pub fn parse_walk_in_choice(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => Err(ScheduleError::invalid_input(format!(
            "Walk-in choice must be yes or no, got '{}'",
            other
        ))),
    }
}

fn with_row<T>(row: usize, result: Result<T>) -> Result<T> {
    result.map_err(|e| match e {
        ScheduleError::InvalidInput(msg) => ScheduleError::InvalidInput(format!("row {}: {}", row, msg)),
        other => other,
    })
}

/// Loads a roster CSV with header `name,day,start,end`.
///
/// Rows for the same name are merged in file order. A row with empty start
/// and end marks that day off.
pub fn load_roster<P: AsRef<Path>>(csv_path: P) -> Result<Vec<NavigatorRecord>> {
    let mut reader = Reader::from_path(csv_path)?;
    let mut records: Vec<NavigatorRecord> = Vec::new();

    for (i, result) in reader.deserialize::<RosterRow>().enumerate() {
        let row = result?;
        let line = i + 2; // header is line 1
        let name = row.name.trim().to_string();
        if name.is_empty() {
            return Err(ScheduleError::invalid_input(format!("row {}: navigator name is required", line)));
        }
        let day: Weekday = with_row(line, row.day.parse())?;

        let position = match records.iter().position(|r| r.name == name) {
            Some(position) => position,
            None => {
                records.push(NavigatorRecord {
                    name,
                    availability: Vec::new(),
                    days_off: Vec::new(),
                });
                records.len() - 1
            }
        };
        let record = &mut records[position];

        if row.start.trim().is_empty() && row.end.trim().is_empty() {
            record.days_off.push(day);
        } else {
            let interval = with_row(line, Interval::parse(&row.start, &row.end))?;
            record.availability.push((day, interval));
        }
    }

    Ok(records)
}

/// Loads group tours from a CSV with header `day,time,school,students`
pub fn load_group_tours<P: AsRef<Path>>(csv_path: P) -> Result<Vec<GroupTourRecord>> {
    let mut reader = Reader::from_path(csv_path)?;
    let mut tours = Vec::new();

    for (i, result) in reader.deserialize::<GroupTourRow>().enumerate() {
        let row = result?;
        let line = i + 2;
        let school = row.school.trim().to_string();
        if school.is_empty() {
            return Err(ScheduleError::invalid_input(format!("row {}: school name is required", line)));
        }
        tours.push(GroupTourRecord {
            day: with_row(line, row.day.parse())?,
            time: TimeOfDay::parse(&row.time)?,
            school,
            students: with_row(line, parse_student_count(&row.students))?,
        });
    }

    Ok(tours)
}
