use super::error::{Result, ScheduleError};
use super::slot_utils::WALK_IN_TIMES;
use super::types::{GroupTourRequest, SlotKey, TimeOfDay, WalkInState, Weekday};

/// The week's walk-in slots and group tour requests
#[derive(Debug, Clone, Default)]
pub struct SlotCatalog {
    /// `[day][walk-in index]`, where the index follows `WALK_IN_TIMES`
    walk_ins: [[WalkInState; 2]; 5],
    /// Per day, in submission order
    group_tours: [Vec<GroupTourRequest>; 5],
}

fn walk_in_index(time: TimeOfDay) -> Result<usize> {
    WALK_IN_TIMES
        .iter()
        .position(|&t| t == time)
        .ok_or_else(|| ScheduleError::invalid_input(format!("{} is not a walk-in tour time", time)))
}

impl SlotCatalog {
    pub fn new() -> Self {
        SlotCatalog::default()
    }

    pub fn walk_in(&self, day: Weekday, time: TimeOfDay) -> Result<&WalkInState> {
        Ok(&self.walk_ins[day.index()][walk_in_index(time)?])
    }

    /// Walk-in slots of one day, morning first
    pub fn walk_ins(&self, day: Weekday) -> impl Iterator<Item = (TimeOfDay, &WalkInState)> {
        WALK_IN_TIMES.into_iter().zip(self.walk_ins[day.index()].iter())
    }

    /// Marks a walk-in slot as needing a navigator
    pub fn open_walk_in(&mut self, day: Weekday, time: TimeOfDay) -> Result<()> {
        self.set_offered(day, time, WalkInState::Pending)
    }

    /// Withdraws a walk-in slot that has not been staffed yet
    pub fn close_walk_in(&mut self, day: Weekday, time: TimeOfDay) -> Result<()> {
        self.set_offered(day, time, WalkInState::NotOffered)
    }

    fn set_offered(&mut self, day: Weekday, time: TimeOfDay, state: WalkInState) -> Result<()> {
        let slot = &mut self.walk_ins[day.index()][walk_in_index(time)?];
        if let WalkInState::Assigned(_) = slot {
            return Err(ScheduleError::WalkInAlreadyAssigned { day, time });
        }
        *slot = state;
        Ok(())
    }

    /// Opens every walk-in slot that is not offered yet. Returns how many changed.
    pub fn open_all_walk_ins(&mut self) -> usize {
        let mut opened = 0;
        for slot in self.walk_ins.iter_mut().flatten() {
            if *slot == WalkInState::NotOffered {
                *slot = WalkInState::Pending;
                opened += 1;
            }
        }
        opened
    }

    /// Pending walk-in slots in week order, morning before afternoon
    pub fn pending_walk_ins(&self) -> Vec<SlotKey> {
        Weekday::ALL
            .into_iter()
            .flat_map(|day| {
                self.walk_ins(day)
                    .filter(|(_, state)| **state == WalkInState::Pending)
                    .map(move |(time, _)| SlotKey::new(day, time))
            })
            .collect()
    }

    pub(crate) fn assign_walk_in(&mut self, key: SlotKey, navigator: String) -> Result<()> {
        let index = walk_in_index(key.time)?;
        self.walk_ins[key.day.index()][index] = WalkInState::Assigned(navigator);
        Ok(())
    }

    pub fn add_group_tour(&mut self, request: GroupTourRequest) {
        self.group_tours[request.day.index()].push(request);
    }

    pub fn group_tours(&self, day: Weekday) -> &[GroupTourRequest] {
        &self.group_tours[day.index()]
    }

    pub(crate) fn group_tours_mut(&mut self, day: Weekday) -> &mut [GroupTourRequest] {
        &mut self.group_tours[day.index()]
    }
}
