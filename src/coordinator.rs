use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::schedule::{
    AssignmentEngine, AssignmentReport, DaySchedule, EntryKind, GroupTourRequest, Interval, Navigator,
    RandomShuffle, Result, Roster, ScheduleEntry, ScheduleError, Shuffler, SlotCatalog, TimeOfDay,
    WalkInState, Weekday,
};
use crate::parser::{GroupTourRecord, NavigatorRecord};
use crate::schedule::slot_utils::sort_entries_by_time;

/// Tours assigned to one navigator so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourCount {
    pub name: String,
    pub tour_count: u32,
}

/// Declared intervals for one day; empty means a day off
#[derive(Debug, Clone, Serialize)]
pub struct DayAvailability {
    pub day: Weekday,
    pub intervals: Vec<Interval>,
}

/// Availability view of one navigator, declared days only
#[derive(Debug, Clone, Serialize)]
pub struct NavigatorAvailability {
    pub name: String,
    pub days: Vec<DayAvailability>,
}

/// Owns the roster, the slot catalog and the engine, and exposes the
/// operations a front end needs
pub struct Coordinator<S = RandomShuffle<StdRng>> {
    roster: Roster,
    catalog: SlotCatalog,
    engine: AssignmentEngine<S>,
}

impl Coordinator<RandomShuffle<StdRng>> {
    /// Seeded when a seed is given, otherwise seeded from OS entropy
    pub fn with_seed(seed: Option<u64>) -> Self {
        let shuffler = match seed {
            Some(seed) => RandomShuffle::seeded(seed),
            None => RandomShuffle::from_entropy(),
        };
        Coordinator::new(shuffler)
    }
}

impl<S: Shuffler> Coordinator<S> {
    pub fn new(shuffler: S) -> Self {
        Coordinator {
            roster: Roster::new(),
            catalog: SlotCatalog::new(),
            engine: AssignmentEngine::new(shuffler),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    /// Adds a navigator with initial availability. Intervals for the same
    /// day accumulate.
    pub fn add_navigator<I>(&mut self, name: &str, availability: I) -> Result<()>
    where
        I: IntoIterator<Item = (Weekday, Interval)>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScheduleError::invalid_input("Navigator name is required"));
        }
        if self.roster.get(name).is_some() {
            return Err(ScheduleError::DuplicateName(name.to_string()));
        }
        let mut navigator = Navigator::new(name);
        for (day, interval) in availability {
            navigator.add_availability(day, interval);
        }
        self.roster.add(navigator)?;
        info!(navigator = name, "navigator added");
        Ok(())
    }

    /// Replaces the navigator's whole day with a single interval
    pub fn set_availability(&mut self, name: &str, day: Weekday, interval: Interval) -> Result<()> {
        self.roster.get_mut(name)?.replace_availability(day, vec![interval]);
        info!(navigator = name, %day, %interval, "availability updated");
        Ok(())
    }

    pub fn set_day_off(&mut self, name: &str, day: Weekday) -> Result<()> {
        self.roster.get_mut(name)?.replace_availability(day, Vec::new());
        info!(navigator = name, %day, "day off");
        Ok(())
    }

    pub fn open_walk_in_slot(&mut self, day: Weekday, time: TimeOfDay) -> Result<()> {
        self.catalog.open_walk_in(day, time)
    }

    pub fn close_walk_in_slot(&mut self, day: Weekday, time: TimeOfDay) -> Result<()> {
        self.catalog.close_walk_in(day, time)
    }

    pub fn open_all_walk_ins(&mut self) -> usize {
        self.catalog.open_all_walk_ins()
    }

    pub fn add_group_tour_request(&mut self, day: Weekday, time: TimeOfDay, school: &str, students: u32) -> Result<()> {
        let school = school.trim();
        if school.is_empty() {
            return Err(ScheduleError::invalid_input("School name is required"));
        }
        self.catalog
            .add_group_tour(GroupTourRequest::new(day, time, school.to_string(), students));
        info!(%day, %time, school, students, "group tour registered");
        Ok(())
    }

    /// Adds navigators read from a roster file, then applies their days off
    pub fn import_navigators(&mut self, records: Vec<NavigatorRecord>) -> Result<()> {
        for record in records {
            self.add_navigator(&record.name, record.availability)?;
            for day in record.days_off {
                self.set_day_off(&record.name, day)?;
            }
        }
        Ok(())
    }

    pub fn import_group_tours(&mut self, records: Vec<GroupTourRecord>) -> Result<()> {
        for record in records {
            self.add_group_tour_request(record.day, record.time, &record.school, record.students)?;
        }
        Ok(())
    }

    pub fn run_assignment(&mut self) -> Result<AssignmentReport> {
        self.engine.run(&mut self.roster, &mut self.catalog)
    }

    /// Walk-ins and group tours for each weekday, merged and sorted by time
    pub fn weekly_schedule(&self) -> Vec<DaySchedule> {
        Weekday::ALL
            .into_iter()
            .map(|day| {
                let mut entries: Vec<ScheduleEntry> = self
                    .catalog
                    .walk_ins(day)
                    .map(|(time, state)| ScheduleEntry {
                        time,
                        kind: EntryKind::WalkIn,
                        description: match state {
                            WalkInState::NotOffered => "Unassigned".to_string(),
                            WalkInState::Pending => "Pending".to_string(),
                            WalkInState::Assigned(name) => name.clone(),
                        },
                    })
                    .collect();

                for request in self.catalog.group_tours(day) {
                    let navigators = if request.assigned_navigators().is_empty() {
                        "Unassigned".to_string()
                    } else {
                        request.assigned_navigators().join(", ")
                    };
                    entries.push(ScheduleEntry {
                        time: request.time,
                        kind: EntryKind::GroupTour,
                        description: format!(
                            "{} with {} students (Navigators: {})",
                            request.school, request.students, navigators
                        ),
                    });
                }

                sort_entries_by_time(&mut entries);
                DaySchedule { day, entries }
            })
            .collect()
    }

    /// Tour count per navigator, in roster order
    pub fn tour_counts(&self) -> Vec<TourCount> {
        self.roster
            .navigators()
            .iter()
            .map(|n| TourCount {
                name: n.name().to_string(),
                tour_count: n.tour_count(),
            })
            .collect()
    }

    pub fn availabilities(&self) -> Vec<NavigatorAvailability> {
        self.roster
            .navigators()
            .iter()
            .map(|n| NavigatorAvailability {
                name: n.name().to_string(),
                days: Weekday::ALL
                    .into_iter()
                    .filter_map(|day| {
                        n.availability(day).map(|intervals| DayAvailability {
                            day,
                            intervals: intervals.to_vec(),
                        })
                    })
                    .collect(),
            })
            .collect()
    }
}
