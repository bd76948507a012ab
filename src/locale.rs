//! Phrase tables for description output
//!
//! A [`Locale`] supplies the sentence fragments the descriptor stitches
//! together. Lookups are pure table reads; any key a locale does not carry
//! falls back to the bundled English table, so a partial translation degrades
//! to English rather than failing. Templates use `{0}` / `{1}` placeholders.

/// Phrase keys used by the descriptor
///
/// Keys marked *optional* are absent even from the English table; call sites
/// chain them onto a base key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    /// "every second"
    EverySecond,
    /// "every {0} seconds"
    EveryXSeconds,
    /// "seconds {0} through {1} past the minute"
    SecondsXThroughYPastTheMinute,
    /// "at {0} seconds past the minute"
    AtXSecondsPastTheMinute,
    /// Optional variant for second values of 20 and above
    AtXSecondsPastTheMinuteGt20,
    /// "every minute"
    EveryMinute,
    /// "every {0} minutes"
    EveryXMinutes,
    /// "minutes {0} through {1} past the hour"
    MinutesXThroughYPastTheHour,
    /// "at {0} minutes past the hour"
    AtXMinutesPastTheHour,
    /// Optional variant for minute values of 20 and above
    AtXMinutesPastTheHourGt20,
    /// "every minute between {0} and {1}"
    EveryMinuteBetweenXAndY,
    /// "every hour"
    EveryHour,
    /// "every {0} hours"
    EveryXHours,
    /// "between {0} and {1}"
    BetweenXAndY,
    /// "at {0}"
    AtX,
    /// "At " prefix for an exact time
    AtSpace,
    /// "At" prefix for a list of times
    At,
    /// " and" conjunction
    SpaceAnd,
    /// " and " conjunction
    SpaceAndSpace,
    /// ", every day"
    CommaEveryDay,
    /// ", every {0} days of the week"
    CommaEveryXDaysOfTheWeek,
    /// ", only on {0}"
    CommaOnlyOnX,
    /// ", {0} through {1}"
    CommaXThroughY,
    /// Optional numeric-range idiom (minutes, seconds, hours, days)
    CommaMinXThroughMinY,
    /// Optional month-range idiom
    CommaMonthXThroughMonthY,
    /// Optional year-range idiom
    CommaYearXThroughYearY,
    /// "first"
    First,
    /// "second"
    Second,
    /// "third"
    Third,
    /// "fourth"
    Fourth,
    /// "fifth"
    Fifth,
    /// ", on the " prefix for an ordinal weekday clause
    CommaOnThe,
    /// " {0} of the month" suffix for an ordinal weekday clause
    SpaceXOfTheMonth,
    /// ", on the last {0} of the month"
    CommaOnTheLastXOfTheMonth,
    /// ", on the last day of the month"
    CommaOnTheLastDayOfTheMonth,
    /// ", on the last weekday of the month"
    CommaOnTheLastWeekdayOfTheMonth,
    /// ", {0} days before the last day of the month"
    CommaDaysBeforeTheLastDayOfTheMonth,
    /// "first weekday"
    FirstWeekday,
    /// "weekday nearest day {0}"
    WeekdayNearestDayX,
    /// ", on the {0} of the month"
    CommaOnTheXOfTheMonth,
    /// ", every {0} days"
    CommaEveryXDays,
    /// ", between day {0} and {1} of the month"
    CommaBetweenDayXAndYOfTheMonth,
    /// ", on day {0} of the month"
    CommaOnDayXOfTheMonth,
    /// ", every {0} months"
    CommaEveryXMonths,
    /// ", only in {0}"
    CommaOnlyInX,
    /// ", every {0} years"
    CommaEveryXYears,
    /// ", starting {0}"
    CommaStartingX,
    /// ", every minute" boilerplate stripped in terse output
    CommaEveryMinute,
    /// ", every hour" boilerplate stripped in terse output
    CommaEveryHour,
    /// Morning clock period
    AmPeriod,
    /// Afternoon clock period
    PmPeriod,
    /// Sentence reported when composing the description fails
    ErrorGenerating,
}

/// A phrase table for one language
///
/// Implementations are pure lookups. Returning `None` from any method defers
/// to the bundled English table.
pub trait Locale: Send + Sync {
    /// Look up a phrase template
    fn phrase(&self, phrase: Phrase) -> Option<&str>;

    /// Full weekday name for a 0-based day (0 = Sunday)
    fn day_name(&self, day: u32) -> Option<&str> {
        let _ = day;
        None
    }

    /// Full month name for a 1-based month
    fn month_name(&self, month: u32) -> Option<&str> {
        let _ = month;
        None
    }
}

/// The bundled English phrase table
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

const ENGLISH_DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale for English {
    fn phrase(&self, phrase: Phrase) -> Option<&str> {
        match phrase {
            Phrase::EverySecond => Some("every second"),
            Phrase::EveryXSeconds => Some("every {0} seconds"),
            Phrase::SecondsXThroughYPastTheMinute => {
                Some("seconds {0} through {1} past the minute")
            }
            Phrase::AtXSecondsPastTheMinute => Some("at {0} seconds past the minute"),
            Phrase::EveryMinute => Some("every minute"),
            Phrase::EveryXMinutes => Some("every {0} minutes"),
            Phrase::MinutesXThroughYPastTheHour => Some("minutes {0} through {1} past the hour"),
            Phrase::AtXMinutesPastTheHour => Some("at {0} minutes past the hour"),
            Phrase::EveryMinuteBetweenXAndY => Some("every minute between {0} and {1}"),
            Phrase::EveryHour => Some("every hour"),
            Phrase::EveryXHours => Some("every {0} hours"),
            Phrase::BetweenXAndY => Some("between {0} and {1}"),
            Phrase::AtX => Some("at {0}"),
            Phrase::AtSpace => Some("At "),
            Phrase::At => Some("At"),
            Phrase::SpaceAnd => Some(" and"),
            Phrase::SpaceAndSpace => Some(" and "),
            Phrase::CommaEveryDay => Some(", every day"),
            Phrase::CommaEveryXDaysOfTheWeek => Some(", every {0} days of the week"),
            Phrase::CommaOnlyOnX => Some(", only on {0}"),
            Phrase::CommaXThroughY => Some(", {0} through {1}"),
            Phrase::First => Some("first"),
            Phrase::Second => Some("second"),
            Phrase::Third => Some("third"),
            Phrase::Fourth => Some("fourth"),
            Phrase::Fifth => Some("fifth"),
            Phrase::CommaOnThe => Some(", on the "),
            Phrase::SpaceXOfTheMonth => Some(" {0} of the month"),
            Phrase::CommaOnTheLastXOfTheMonth => Some(", on the last {0} of the month"),
            Phrase::CommaOnTheLastDayOfTheMonth => Some(", on the last day of the month"),
            Phrase::CommaOnTheLastWeekdayOfTheMonth => {
                Some(", on the last weekday of the month")
            }
            Phrase::CommaDaysBeforeTheLastDayOfTheMonth => {
                Some(", {0} days before the last day of the month")
            }
            Phrase::FirstWeekday => Some("first weekday"),
            Phrase::WeekdayNearestDayX => Some("weekday nearest day {0}"),
            Phrase::CommaOnTheXOfTheMonth => Some(", on the {0} of the month"),
            Phrase::CommaEveryXDays => Some(", every {0} days"),
            Phrase::CommaBetweenDayXAndYOfTheMonth => {
                Some(", between day {0} and {1} of the month")
            }
            Phrase::CommaOnDayXOfTheMonth => Some(", on day {0} of the month"),
            Phrase::CommaEveryXMonths => Some(", every {0} months"),
            Phrase::CommaOnlyInX => Some(", only in {0}"),
            Phrase::CommaEveryXYears => Some(", every {0} years"),
            Phrase::CommaStartingX => Some(", starting {0}"),
            Phrase::CommaEveryMinute => Some(", every minute"),
            Phrase::CommaEveryHour => Some(", every hour"),
            Phrase::AmPeriod => Some("AM"),
            Phrase::PmPeriod => Some("PM"),
            Phrase::ErrorGenerating => Some(
                "an error occured when generating the expression description, \
                 check the cron expression syntax",
            ),
            // Idiom variants no language in the bundled set needs
            Phrase::AtXSecondsPastTheMinuteGt20
            | Phrase::AtXMinutesPastTheHourGt20
            | Phrase::CommaMinXThroughMinY
            | Phrase::CommaMonthXThroughMonthY
            | Phrase::CommaYearXThroughYearY => None,
        }
    }

    fn day_name(&self, day: u32) -> Option<&str> {
        ENGLISH_DAY_NAMES.get(day as usize).copied()
    }

    fn month_name(&self, month: u32) -> Option<&str> {
        match month {
            1..=12 => Some(ENGLISH_MONTH_NAMES[(month - 1) as usize]),
            _ => None,
        }
    }
}

/// Look up a bundled phrase table for a locale tag
///
/// Only English ships with the crate; other tags resolve to `None` and the
/// descriptor serves every key from the English fallback. Additional
/// languages plug in through [`crate::ExpressionDescriptor::with_locale`].
pub fn bundled(locale: &str) -> Option<Box<dyn Locale>> {
    match crate::options::language_code(locale).as_str() {
        "en" => Some(Box::new(English)),
        _ => None,
    }
}
