pub mod submission;
pub mod export;

pub use submission::{AvailabilityChange, AvailabilityForm, GroupTourForm, NavigatorForm, WalkInForm};
pub use export::export_schedule_to_csv;
