use thiserror::Error;

use super::types::{TimeOfDay, Weekday};

/// Result type for scheduling operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised by the roster, the slot catalog and the assignment engine
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Time literal that is not `H:MM AM|PM`
    #[error("Invalid time '{input}': expected a 12-hour time such as 9:00 AM")]
    TimeParse { input: String },

    /// Malformed request field, rejected before any state changes
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A navigator was marked twice for the same slot key. The engine checks
    /// eligibility first, so seeing this means a bug.
    #[error("Navigator '{navigator}' is already assigned on {day} at {time}")]
    AlreadyAssigned {
        navigator: String,
        day: Weekday,
        time: TimeOfDay,
    },

    #[error("A navigator named '{0}' already exists")]
    DuplicateName(String),

    #[error("No navigator named '{0}'")]
    UnknownNavigator(String),

    #[error("Walk-in tour on {day} at {time} is already assigned")]
    WalkInAlreadyAssigned { day: Weekday, time: TimeOfDay },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ScheduleError::InvalidInput(msg.into())
    }
}
