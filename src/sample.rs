use crate::parser::NavigatorRecord;
use crate::schedule::{Interval, Result, Weekday};

use Weekday::*;

const SAMPLE_ROSTER: &[(&str, &[(Weekday, &str, &str)])] = &[
    ("Sanaa", &[
        (Monday, "9:00 AM", "5:00 PM"),
        (Tuesday, "9:00 AM", "12:00 PM"),
        (Wednesday, "3:00 PM", "5:00 PM"),
        (Thursday, "9:00 AM", "5:00 PM"),
    ]),
    ("Damir", &[
        (Wednesday, "9:00 AM", "5:00 PM"),
        (Thursday, "9:00 AM", "12:00 PM"),
        (Friday, "9:00 AM", "5:00 PM"),
    ]),
    ("Emily", &[
        (Monday, "9:00 AM", "12:00 PM"),
        (Wednesday, "9:00 AM", "5:00 PM"),
        (Friday, "9:00 AM", "5:00 PM"),
    ]),
    ("Tanim", &[
        (Thursday, "9:00 AM", "5:00 PM"),
        (Friday, "9:00 AM", "5:00 PM"),
    ]),
    ("Donara", &[
        (Monday, "10:30 AM", "5:00 PM"),
        (Wednesday, "10:00 AM", "5:00 PM"),
    ]),
    ("Mousa", &[
        (Monday, "9:00 AM", "11:00 AM"),
        (Tuesday, "9:00 AM", "11:00 AM"),
        (Wednesday, "9:00 AM", "11:00 AM"),
        (Thursday, "9:00 AM", "11:00 AM"),
    ]),
    ("Dior", &[
        (Tuesday, "9:30 AM", "3:00 PM"),
        (Friday, "10:00 AM", "3:00 PM"),
    ]),
    ("Mike", &[
        (Tuesday, "12:00 PM", "5:00 PM"),
    ]),
];

/// The built-in roster used when no roster file is configured
pub fn sample_roster() -> Result<Vec<NavigatorRecord>> {
    SAMPLE_ROSTER
        .iter()
        .map(|(name, windows)| {
            let availability = windows
                .iter()
                .map(|(day, start, end)| Ok((*day, Interval::parse(start, end)?)))
                .collect::<Result<Vec<_>>>()?;
            Ok(NavigatorRecord {
                name: name.to_string(),
                availability,
                days_off: Vec::new(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roster_parses() {
        let roster = sample_roster().unwrap();
        assert_eq!(roster.len(), 8);
        assert_eq!(roster[0].name, "Sanaa");
        assert_eq!(roster[7].availability.len(), 1);
    }
}
