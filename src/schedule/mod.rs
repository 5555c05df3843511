pub mod types;
pub mod error;
pub mod slot_utils;
pub mod navigator;
pub mod roster;
pub mod catalog;
pub mod selection;
pub mod engine;

pub use types::{DaySchedule, EntryKind, GroupTourRequest, Interval, ScheduleEntry, SlotKey, TimeOfDay, WalkInState, Weekday};
pub use error::{Result, ScheduleError};
pub use slot_utils::{AFTERNOON_WALK_IN, LARGE_GROUP_THRESHOLD, MORNING_WALK_IN, TOUR_DURATION_MINUTES, WALK_IN_TIMES};
pub use navigator::Navigator;
pub use roster::Roster;
pub use catalog::SlotCatalog;
pub use selection::{RandomShuffle, RosterOrder, Shuffler};
pub use engine::{eligible_navigators, AssignmentEngine, AssignmentReport};
