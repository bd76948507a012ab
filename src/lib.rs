//! cron-describe - Human readable cron expressions
//!
//! Translates cron schedule expressions (5 to 7 whitespace-separated fields)
//! into readable sentences describing when the schedule fires:
//! - Quartz-style expressions with optional seconds and year fields
//! - Special day tokens (`L`, `LW`, `15W`, `L-3`, `6#2`) and named
//!   weekdays/months (`MON-FRI`, `JAN,SEP`)
//! - Locale-aware phrase tables with English fallback
//! - 12- or 24-hour clock output, verbose or terse sentences
//!
//! ## Quick Start
//!
//! ```
//! use cron_describe::{describe, describe_with_options, Options};
//!
//! assert_eq!(describe("*/5 * * * *").unwrap(), "Every 5 minutes");
//! assert_eq!(describe("0 0 12 * * ?").unwrap(), "At 12:00 PM");
//!
//! let options = Options::new().with_24_hour_time_format(true);
//! assert_eq!(
//!     describe_with_options("0 15 10 ? * 6L", &options).unwrap(),
//!     "At 10:15, on the last Saturday of the month"
//! );
//! ```
//!
//! This library only renders the textual meaning of an expression; it does
//! not compute firing times or validate that a schedule is runnable.

pub mod locale;

mod descriptor;
mod options;
mod parser;
mod types;

pub use descriptor::ExpressionDescriptor;
pub use locale::{English, Locale, Phrase};
pub use options::Options;
pub use parser::ExpressionParser;
pub use types::{CronError, DescriptionType, Result};

/// Describe a cron expression with default options
///
/// Renders the full sentence. Structural errors (empty expression, field
/// count outside 5..=7) are returned as `Err`; rendering problems degrade
/// into the returned sentence.
pub fn describe(expression: &str) -> Result<String> {
    describe_with_options(expression, &Options::default())
}

/// Describe a cron expression with explicit options
pub fn describe_with_options(expression: &str, options: &Options) -> Result<String> {
    ExpressionDescriptor::new(expression, options.clone()).description(DescriptionType::Full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe("* * * * *").unwrap(), "Every minute");
    }

    #[test]
    fn test_describe_with_options() {
        let options = Options::new().with_verbose(true);
        assert_eq!(
            describe_with_options("* * * * *", &options).unwrap(),
            "Every minute, every hour, every day"
        );
    }

    #[test]
    fn test_describe_propagates_structural_errors() {
        assert!(describe("").is_err());
        assert!(describe("* *").is_err());
    }
}
