use serde::Serialize;
use tracing::{debug, info, warn};

use super::catalog::SlotCatalog;
use super::error::Result;
use super::roster::Roster;
use super::selection::{least_loaded, Shuffler};
use super::slot_utils::{LARGE_GROUP_THRESHOLD, TOUR_DURATION_MINUTES};
use super::types::{SlotKey, Weekday};

/// Outcome counts of one assignment run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentReport {
    pub walk_ins_assigned: usize,
    pub walk_ins_unmet: usize,
    pub group_tours_staffed: usize,
    pub group_tours_unstaffed: usize,
    /// Large groups that got a single navigator because nobody else was free
    pub group_tours_short_staffed: usize,
}

/// Matches navigators to pending walk-ins and unstaffed group tours
pub struct AssignmentEngine<S> {
    shuffler: S,
}

impl<S: Shuffler> AssignmentEngine<S> {
    pub fn new(shuffler: S) -> Self {
        AssignmentEngine { shuffler }
    }

    /// Runs one greedy pass: pending walk-ins first (week order, morning first),
    /// then group tours (week order, submission order). Each slot takes the
    /// least-loaded eligible navigator after shuffling.
    pub fn run(&mut self, roster: &mut Roster, catalog: &mut SlotCatalog) -> Result<AssignmentReport> {
        let mut report = AssignmentReport::default();

        for key in catalog.pending_walk_ins() {
            match self.pick(roster, key, &[]) {
                Some(idx) => {
                    let navigator = &mut roster.navigators_mut()[idx];
                    navigator.mark_assigned(key.day, key.time)?;
                    debug!(day = %key.day, time = %key.time, navigator = navigator.name(), "walk-in assigned");
                    catalog.assign_walk_in(key, navigator.name().to_string())?;
                    report.walk_ins_assigned += 1;
                }
                None => {
                    warn!(day = %key.day, time = %key.time, "no navigator available for walk-in");
                    report.walk_ins_unmet += 1;
                }
            }
        }

        for day in Weekday::ALL {
            for position in 0..catalog.group_tours(day).len() {
                let request = &catalog.group_tours(day)[position];
                if !request.assigned_navigators().is_empty() {
                    continue;
                }
                let key = request.key();
                let needs_two = request.students > LARGE_GROUP_THRESHOLD;

                let Some(primary) = self.pick(roster, key, &[]) else {
                    warn!(day = %key.day, time = %key.time, school = %request.school, "no navigator available for group tour");
                    report.group_tours_unstaffed += 1;
                    continue;
                };
                let mut chosen = vec![primary];
                if needs_two {
                    match self.pick(roster, key, &chosen) {
                        Some(secondary) => chosen.push(secondary),
                        None => report.group_tours_short_staffed += 1,
                    }
                }

                let mut names = Vec::with_capacity(chosen.len());
                for idx in chosen {
                    let navigator = &mut roster.navigators_mut()[idx];
                    navigator.mark_assigned(key.day, key.time)?;
                    names.push(navigator.name().to_string());
                }
                debug!(day = %key.day, time = %key.time, navigators = ?names, "group tour assigned");
                catalog.group_tours_mut(day)[position].set_assigned_navigators(names);
                report.group_tours_staffed += 1;
            }
        }

        info!(
            walk_ins_assigned = report.walk_ins_assigned,
            walk_ins_unmet = report.walk_ins_unmet,
            group_tours_staffed = report.group_tours_staffed,
            group_tours_unstaffed = report.group_tours_unstaffed,
            group_tours_short_staffed = report.group_tours_short_staffed,
            "assignment run finished"
        );
        Ok(report)
    }

    /// Shuffles the eligible set (minus `exclude`) and takes the least-loaded navigator
    fn pick(&mut self, roster: &Roster, key: SlotKey, exclude: &[usize]) -> Option<usize> {
        let mut candidates: Vec<usize> = eligible_navigators(roster, key)
            .into_iter()
            .filter(|idx| !exclude.contains(idx))
            .collect();
        self.shuffler.shuffle(&mut candidates);
        least_loaded(&candidates, roster.navigators()).map(|pos| candidates[pos])
    }
}

/// Roster indices of navigators free for the whole tour at `key` and not
/// already booked at that exact day and time
pub fn eligible_navigators(roster: &Roster, key: SlotKey) -> Vec<usize> {
    roster
        .navigators()
        .iter()
        .enumerate()
        .filter(|(_, nav)| {
            nav.is_available_for(key.day, key.time, TOUR_DURATION_MINUTES)
                && !nav.is_assigned(key.day, key.time)
        })
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::navigator::Navigator;
    use crate::schedule::selection::RosterOrder;
    use crate::schedule::slot_utils::{AFTERNOON_WALK_IN, MORNING_WALK_IN};
    use crate::schedule::types::{GroupTourRequest, Interval, TimeOfDay, WalkInState};

    fn navigator(name: &str, day: Weekday, start: &str, end: &str) -> Navigator {
        let mut nav = Navigator::new(name);
        nav.add_availability(day, Interval::parse(start, end).unwrap());
        nav
    }

    #[test]
    fn secondary_pick_excludes_the_primary() {
        let mut roster = Roster::new();
        roster.add(navigator("A", Weekday::Monday, "3:00 PM", "5:00 PM")).unwrap();
        roster.add(navigator("B", Weekday::Monday, "3:00 PM", "5:00 PM")).unwrap();
        let mut catalog = SlotCatalog::new();
        catalog.add_group_tour(GroupTourRequest::new(
            Weekday::Monday,
            AFTERNOON_WALK_IN,
            "Lincoln High".to_string(),
            40,
        ));

        let report = AssignmentEngine::new(RosterOrder).run(&mut roster, &mut catalog).unwrap();

        assert_eq!(catalog.group_tours(Weekday::Monday)[0].assigned_navigators(), ["A", "B"]);
        assert_eq!(report.group_tours_staffed, 1);
        assert_eq!(report.group_tours_short_staffed, 0);
    }

    #[test]
    fn walk_in_and_group_tour_at_same_time_use_different_navigators() {
        let mut roster = Roster::new();
        roster.add(navigator("A", Weekday::Monday, "9:00 AM", "12:00 PM")).unwrap();
        roster.add(navigator("B", Weekday::Monday, "9:00 AM", "12:00 PM")).unwrap();
        let mut catalog = SlotCatalog::new();
        catalog.open_walk_in(Weekday::Monday, MORNING_WALK_IN).unwrap();
        catalog.add_group_tour(GroupTourRequest::new(
            Weekday::Monday,
            MORNING_WALK_IN,
            "Oak Elementary".to_string(),
            12,
        ));

        AssignmentEngine::new(RosterOrder).run(&mut roster, &mut catalog).unwrap();

        assert_eq!(
            catalog.walk_in(Weekday::Monday, MORNING_WALK_IN).unwrap(),
            &WalkInState::Assigned("A".to_string())
        );
        assert_eq!(catalog.group_tours(Weekday::Monday)[0].assigned_navigators(), ["B"]);
    }

    #[test]
    fn busier_navigator_loses_the_tie_break() {
        let mut roster = Roster::new();
        let mut busy = navigator("Busy", Weekday::Tuesday, "9:00 AM", "5:00 PM");
        busy.mark_assigned(Weekday::Monday, TimeOfDay::parse("1:00 PM").unwrap()).unwrap();
        roster.add(busy).unwrap();
        roster.add(navigator("Fresh", Weekday::Tuesday, "9:00 AM", "5:00 PM")).unwrap();
        let mut catalog = SlotCatalog::new();
        catalog.open_walk_in(Weekday::Tuesday, MORNING_WALK_IN).unwrap();

        AssignmentEngine::new(RosterOrder).run(&mut roster, &mut catalog).unwrap();

        assert_eq!(
            catalog.walk_in(Weekday::Tuesday, MORNING_WALK_IN).unwrap(),
            &WalkInState::Assigned("Fresh".to_string())
        );
    }
}
