use serde::Deserialize;

use crate::parser::{parse_availability_spec, parse_student_count, parse_walk_in_choice, GroupTourRecord, NavigatorRecord};
use crate::schedule::{Interval, Result, ScheduleError, TimeOfDay, Weekday};

/// New navigator as entered on the form
#[derive(Debug, Clone, Deserialize)]
pub struct NavigatorForm {
    pub name: String,
    /// `day,start,end` entries separated by `;`
    pub availability: String,
}

impl NavigatorForm {
    pub fn validate(&self) -> Result<NavigatorRecord> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ScheduleError::invalid_input("Navigator name is required"));
        }
        if self.availability.trim().is_empty() {
            return Err(ScheduleError::invalid_input("Availability is required"));
        }
        Ok(NavigatorRecord {
            name: name.to_string(),
            availability: parse_availability_spec(&self.availability)?,
            days_off: Vec::new(),
        })
    }
}

/// Change to one day of a navigator's availability
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityForm {
    pub day: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub day_off: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvailabilityChange {
    DayOff(Weekday),
    Window(Weekday, Interval),
}

impl AvailabilityForm {
    pub fn validate(&self) -> Result<AvailabilityChange> {
        let day: Weekday = self.day.parse()?;
        if self.day_off {
            return Ok(AvailabilityChange::DayOff(day));
        }
        let start = self.start.as_deref().map(str::trim).unwrap_or("");
        let end = self.end.as_deref().map(str::trim).unwrap_or("");
        if start.is_empty() || end.is_empty() {
            return Err(ScheduleError::invalid_input("Please provide valid start and end times"));
        }
        Ok(AvailabilityChange::Window(day, Interval::parse(start, end)?))
    }
}

/// Whether a walk-in slot is offered (`yes`) or not (`no`)
#[derive(Debug, Clone, Deserialize)]
pub struct WalkInForm {
    pub day: String,
    pub time: String,
    pub offered: String,
}

impl WalkInForm {
    pub fn validate(&self) -> Result<(Weekday, TimeOfDay, bool)> {
        Ok((
            self.day.parse()?,
            TimeOfDay::parse(&self.time)?,
            parse_walk_in_choice(&self.offered)?,
        ))
    }
}

/// Group tour as entered on the form. The head count arrives as text.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupTourForm {
    pub day: String,
    pub time: String,
    pub school: String,
    pub students: String,
}

impl GroupTourForm {
    pub fn validate(&self) -> Result<GroupTourRecord> {
        let school = self.school.trim();
        if school.is_empty() {
            return Err(ScheduleError::invalid_input("School name is required"));
        }
        Ok(GroupTourRecord {
            day: self.day.parse()?,
            time: TimeOfDay::parse(&self.time)?,
            school: school.to_string(),
            students: parse_student_count(&self.students)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_tour_form_rejects_non_numeric_counts() {
        let form = GroupTourForm {
            day: "Monday".to_string(),
            time: "2:00 PM".to_string(),
            school: "Lincoln High".to_string(),
            students: "lots".to_string(),
        };
        assert!(matches!(form.validate(), Err(ScheduleError::InvalidInput(_))));
    }

    #[test]
    fn availability_form_day_off_ignores_times() {
        let form = AvailabilityForm {
            day: "wed".to_string(),
            start: Some("garbage".to_string()),
            end: None,
            day_off: true,
        };
        assert_eq!(form.validate().unwrap(), AvailabilityChange::DayOff(Weekday::Wednesday));
    }

    #[test]
    fn availability_form_needs_both_times() {
        let form = AvailabilityForm {
            day: "Monday".to_string(),
            start: Some("9:00 AM".to_string()),
            end: Some("  ".to_string()),
            day_off: false,
        };
        assert!(matches!(form.validate(), Err(ScheduleError::InvalidInput(_))));
    }

    #[test]
    fn navigator_form_parses_availability() {
        let form = NavigatorForm {
            name: " Donara ".to_string(),
            availability: "Monday,10:30 AM,5:00 PM;Wednesday,10:00 AM,5:00 PM".to_string(),
        };
        let record = form.validate().unwrap();
        assert_eq!(record.name, "Donara");
        assert_eq!(record.availability.len(), 2);
    }

    #[test]
    fn walk_in_form_validates_choice() {
        let form = WalkInForm {
            day: "Friday".to_string(),
            time: "3:00 PM".to_string(),
            offered: "yes".to_string(),
        };
        let (day, time, offered) = form.validate().unwrap();
        assert_eq!(day, Weekday::Friday);
        assert_eq!(time.to_string(), "3:00 PM");
        assert!(offered);
    }
}
