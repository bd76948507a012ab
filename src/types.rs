//! Core types for the descriptor library

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for descriptor operations
pub type Result<T> = std::result::Result<T, CronError>;

/// Descriptor library errors
///
/// `MissingField` and `Format` report a structurally unusable expression and
/// always propagate to the caller. `Generation` covers failures while
/// composing a description (e.g. a malformed numeric literal); unless
/// [`Options::throw_on_parse_error`](crate::Options) is set, its message is
/// returned in place of the description.
#[derive(Debug, Clone, Error)]
pub enum CronError {
    /// Expression string is missing or empty
    #[error("field 'expression' not found")]
    MissingField,

    /// Expression has an unusable number of fields
    #[error("{0}")]
    Format(String),

    /// Failure while composing a description
    #[error("{0}")]
    Generation(String),
}

/// Which part(s) of the expression to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionType {
    /// The whole expression as one sentence
    Full,
    /// The seconds, minutes, and hours fields combined
    TimeOfDay,
    /// The seconds field only
    Seconds,
    /// The minutes field only
    Minutes,
    /// The hours field only
    Hours,
    /// The day-of-month field only
    DayOfMonth,
    /// The month field only
    Month,
    /// The day-of-week field only
    DayOfWeek,
    /// The year field only
    Year,
}

impl std::fmt::Display for DescriptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptionType::Full => write!(f, "full"),
            DescriptionType::TimeOfDay => write!(f, "timeofday"),
            DescriptionType::Seconds => write!(f, "seconds"),
            DescriptionType::Minutes => write!(f, "minutes"),
            DescriptionType::Hours => write!(f, "hours"),
            DescriptionType::DayOfMonth => write!(f, "dayofmonth"),
            DescriptionType::Month => write!(f, "month"),
            DescriptionType::DayOfWeek => write!(f, "dayofweek"),
            DescriptionType::Year => write!(f, "year"),
        }
    }
}
