use std::path::Path;

use csv::WriterBuilder;

use crate::schedule::{DaySchedule, EntryKind, Result};

/// Exports the weekly schedule to CSV with header `day,time,kind,description`
pub fn export_schedule_to_csv(schedule: &[DaySchedule], csv_path: &Path) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(csv_path)?;
    wtr.write_record(["day", "time", "kind", "description"])?;

    for day in schedule {
        let day_name = day.day.to_string();
        for entry in &day.entries {
            let kind = match entry.kind {
                EntryKind::WalkIn => "walk-in",
                EntryKind::GroupTour => "group",
            };
            let time = entry.time.to_string();
            wtr.write_record([day_name.as_str(), time.as_str(), kind, entry.description.as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{ScheduleEntry, TimeOfDay, Weekday};

    #[test]
    fn writes_one_row_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");
        let schedule = vec![DaySchedule {
            day: Weekday::Tuesday,
            entries: vec![
                ScheduleEntry {
                    time: TimeOfDay::parse("10:00 AM").unwrap(),
                    kind: EntryKind::WalkIn,
                    description: "Dior".to_string(),
                },
                ScheduleEntry {
                    time: TimeOfDay::parse("1:00 PM").unwrap(),
                    kind: EntryKind::GroupTour,
                    description: "Oak Elementary with 20 students (Navigators: Mike)".to_string(),
                },
            ],
        }];

        export_schedule_to_csv(&schedule, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "day,time,kind,description");
        assert_eq!(lines[1], "Tuesday,10:00 AM,walk-in,Dior");
        assert_eq!(
            lines[2],
            "Tuesday,1:00 PM,group,Oak Elementary with 20 students (Navigators: Mike)"
        );
    }
}
