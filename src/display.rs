use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::coordinator::{NavigatorAvailability, TourCount};
use crate::schedule::{AssignmentReport, DaySchedule, Result};

/// Formats the week as one block per day, each tour on its own line:
/// `    10:00 AM: Sanaa`
pub fn format_weekly_schedule(schedule: &[DaySchedule]) -> String {
    let mut out = String::new();
    for day in schedule {
        let _ = writeln!(out, "{}:", day.day);
        for entry in &day.entries {
            let _ = writeln!(out, "    {}: {}", entry.time, entry.description);
        }
        out.push('\n');
    }
    out
}

/// One line per navigator: `Sanaa: 2 tours assigned`
pub fn format_tour_counts(counts: &[TourCount]) -> String {
    let mut out = String::new();
    for count in counts {
        let _ = writeln!(out, "{}: {} tours assigned", count.name, count.tour_count);
    }
    out
}

pub fn format_availabilities(availabilities: &[NavigatorAvailability]) -> String {
    let mut out = String::new();
    for navigator in availabilities {
        let _ = writeln!(out, "{}:", navigator.name);
        for day in &navigator.days {
            if day.intervals.is_empty() {
                let _ = writeln!(out, "  {}: day off", day.day);
            } else {
                let windows: Vec<String> = day.intervals.iter().map(|iv| iv.to_string()).collect();
                let _ = writeln!(out, "  {}: {}", day.day, windows.join(", "));
            }
        }
        out.push('\n');
    }
    out
}

/// Prints the weekly schedule with a heading
pub fn print_weekly_schedule(schedule: &[DaySchedule]) {
    println!("\n=== Weekly Tours ===");
    print!("{}", format_weekly_schedule(schedule));
}

pub fn print_availabilities(availabilities: &[NavigatorAvailability]) {
    println!("\n=== Navigator Availabilities ===");
    print!("{}", format_availabilities(availabilities));
}

pub fn print_tour_counts(counts: &[TourCount]) {
    println!("\n=== Tour Counts ===");
    print!("{}", format_tour_counts(counts));
}

pub fn print_assignment_report(report: &AssignmentReport) {
    println!("Walk-in tours assigned: {}", report.walk_ins_assigned);
    if report.walk_ins_unmet > 0 {
        println!("⚠️  Walk-in tours still pending: {}", report.walk_ins_unmet);
    }
    println!("Group tours staffed: {}", report.group_tours_staffed);
    if report.group_tours_unstaffed > 0 {
        println!("⚠️  Group tours without a navigator: {}", report.group_tours_unstaffed);
    }
    if report.group_tours_short_staffed > 0 {
        println!(
            "⚠️  Large groups with only one navigator: {}",
            report.group_tours_short_staffed
        );
    }
}

/// Writes the weekly schedule to a text file in the printed format
pub fn write_schedule_to_file<P: AsRef<Path>>(schedule: &[DaySchedule], filename: P) -> Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "** Weekly Tours **")?;
    file.write_all(format_weekly_schedule(schedule).as_bytes())?;
    Ok(())
}
