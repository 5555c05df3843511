//! Assigns tour navigators to walk-in slots and school group tours across a
//! Monday to Friday week.
//!
//! [`coordinator::Coordinator`] is the entry point. It owns the roster, the
//! slot catalog and the assignment engine. The CLI and the JSON API in
//! [`web`] only call into it.

pub mod schedule;
pub mod coordinator;
pub mod parser;
pub mod display;
pub mod form;
pub mod config;
pub mod sample;
pub mod web;

pub use coordinator::Coordinator;
pub use schedule::{ScheduleError, TimeOfDay, Weekday};
