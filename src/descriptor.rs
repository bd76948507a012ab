//! Human readable descriptions for cron expressions
//!
//! The descriptor consumes the canonical 7-field form produced by
//! [`ExpressionParser`] and renders each field through one shared segment
//! classification routine plus a set of field-specific renderers, then
//! composes the final sentence with locale- and verbosity-aware
//! post-processing.

use std::sync::OnceLock;

use crate::locale::{bundled, English, Locale, Phrase};
use crate::options::Options;
use crate::parser::ExpressionParser;
use crate::types::{CronError, DescriptionType, Result};

/// Characters that select a non-trivial rendering path for a field
const SPECIAL_CHARACTERS: &[char] = &['/', '-', ',', '*'];

/// Placeholder for a phrase the layered lookup cannot resolve
const MISSING: &str = "[err]";

/// Converts a cron expression into a human readable sentence
///
/// Normalization runs once per instance and is cached, so an instance can be
/// queried repeatedly (and concurrently) for different description types.
///
/// # Examples
///
/// ```
/// use cron_describe::{DescriptionType, ExpressionDescriptor, Options};
///
/// let descriptor = ExpressionDescriptor::new("*/5 * * * *", Options::default());
/// let description = descriptor.description(DescriptionType::Full).unwrap();
/// assert_eq!(description, "Every 5 minutes");
/// ```
pub struct ExpressionDescriptor {
    expression: String,
    options: Options,
    locale: Option<Box<dyn Locale>>,
    use_24_hour_time_format: bool,
    fields: OnceLock<Result<[String; 7]>>,
}

/// The renderer set one field kind plugs into the shared segment routine
///
/// `single` turns one value into words and is the only renderer that can
/// fail; the rest select phrase templates. `interval` may return a finished
/// phrase or a template still carrying `{0}`, which the segment routine then
/// fills with the single-value rendering of the step.
struct SegmentRenderers<'a> {
    every: String,
    single: Box<dyn Fn(&str) -> Result<String> + 'a>,
    interval: Box<dyn Fn(&str) -> Option<String> + 'a>,
    between: Box<dyn Fn(&str) -> Option<String> + 'a>,
    item: Box<dyn Fn(&str) -> Option<String> + 'a>,
    range: Box<dyn Fn(&str) -> Option<String> + 'a>,
}

impl ExpressionDescriptor {
    /// Create a descriptor for one expression
    pub fn new(expression: impl Into<String>, options: Options) -> Self {
        let use_24_hour_time_format = options.resolved_24_hour_time_format();
        let locale = bundled(&options.locale);
        Self {
            expression: expression.into(),
            options,
            locale,
            use_24_hour_time_format,
            fields: OnceLock::new(),
        }
    }

    /// Replace the phrase table with a caller-supplied one
    ///
    /// Keys the table does not carry still fall back to bundled English.
    pub fn with_locale(mut self, locale: impl Locale + 'static) -> Self {
        self.locale = Some(Box::new(locale));
        self
    }

    /// Render the description for the requested part of the expression
    ///
    /// Structural errors (empty expression, unusable field count) always
    /// propagate. Failures while composing the sentence propagate only when
    /// [`Options::throw_on_parse_error`] is set; otherwise their message is
    /// returned as the description.
    pub fn description(&self, kind: DescriptionType) -> Result<String> {
        self.fields()?;

        let rendered = match kind {
            DescriptionType::Full => self.full_description(),
            DescriptionType::TimeOfDay => self.time_of_day_description(),
            DescriptionType::Seconds => self.seconds_description(),
            DescriptionType::Minutes => self.minutes_description(),
            DescriptionType::Hours => self.hours_description(),
            DescriptionType::DayOfMonth => self.day_of_month_description(),
            DescriptionType::Month => self.month_description(),
            DescriptionType::DayOfWeek => self.day_of_week_description(),
            DescriptionType::Year => self.year_description(),
        };

        let description = match rendered {
            Ok(description) => description,
            Err(error) if self.options.throw_on_parse_error => return Err(error),
            Err(error) => error.to_string(),
        };

        tracing::debug!("described '{}' as '{}' ({})", self.expression, description, kind);

        Ok(uppercase_first(&description))
    }

    /// Canonical fields, normalized on first use
    fn fields(&self) -> Result<&[String; 7]> {
        self.fields
            .get_or_init(|| ExpressionParser::new(&self.expression, &self.options).parse())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Look up a phrase, falling back to the bundled English table
    fn phrase(&self, phrase: Phrase) -> Option<String> {
        self.locale
            .as_ref()
            .and_then(|locale| locale.phrase(phrase))
            .map(str::to_string)
            .or_else(|| English.phrase(phrase).map(str::to_string))
    }

    fn phrase_or_missing(&self, phrase: Phrase) -> String {
        self.phrase(phrase).unwrap_or_else(|| MISSING.to_string())
    }

    fn day_name(&self, day: u32) -> Option<String> {
        self.locale
            .as_ref()
            .and_then(|locale| locale.day_name(day))
            .map(str::to_string)
            .or_else(|| English.day_name(day).map(str::to_string))
    }

    fn month_name(&self, month: u32) -> Option<String> {
        self.locale
            .as_ref()
            .and_then(|locale| locale.month_name(month))
            .map(str::to_string)
            .or_else(|| English.month_name(month).map(str::to_string))
    }

    /// The full sentence: time of day, then day-of-month, day-of-week,
    /// month, and year clauses, skipping empties
    ///
    /// Day-of-month and day-of-week may both contribute a clause; the OR
    /// relationship cron gives the two fields is not expressed in words.
    fn full_description(&self) -> Result<String> {
        let composed = self.compose_full();
        match composed {
            Ok(description) => Ok(self.transform_verbosity(description)),
            Err(error) => {
                let message = self
                    .phrase(Phrase::ErrorGenerating)
                    .unwrap_or_else(|| error.to_string());
                Err(CronError::Generation(message))
            }
        }
    }

    fn compose_full(&self) -> Result<String> {
        Ok(format!(
            "{}{}{}{}{}",
            self.time_of_day_description()?,
            self.day_of_month_description()?,
            self.day_of_week_description()?,
            self.month_description()?,
            self.year_description()?,
        ))
    }

    /// The seconds/minutes/hours portion as one phrase
    fn time_of_day_description(&self) -> Result<String> {
        let fields = self.fields()?;
        let seconds = &fields[0];
        let minutes = &fields[1];
        let hours = &fields[2];

        // One exact time
        if !seconds.contains(SPECIAL_CHARACTERS)
            && !minutes.contains(SPECIAL_CHARACTERS)
            && !hours.contains(SPECIAL_CHARACTERS)
        {
            let time = self.format_time(hours, minutes, seconds)?;
            return Ok(format!("{}{}", self.phrase_or_missing(Phrase::AtSpace), time));
        }

        // A minute range within a single hour
        if seconds.is_empty()
            && minutes.contains('-')
            && !minutes.contains(',')
            && !hours.contains(SPECIAL_CHARACTERS)
        {
            let (from, to) = minutes.split_once('-').unwrap_or((minutes.as_str(), ""));
            let from_time = self.format_time(hours, from, "")?;
            // read the span inclusively
            let to_time = self.format_time(hours, to, "")?.replace(":00", ":59");
            return Ok(try_format2(
                self.phrase(Phrase::EveryMinuteBetweenXAndY),
                &from_time,
                &to_time,
            ));
        }

        // A list of hours sharing a single minute
        if seconds.is_empty()
            && hours.contains(',')
            && !hours.contains('-')
            && !minutes.contains(SPECIAL_CHARACTERS)
        {
            let hour_items: Vec<&str> = hours.split(',').collect();
            let mut description = self.phrase_or_missing(Phrase::At);
            for (i, hour) in hour_items.iter().enumerate() {
                description.push(' ');
                description.push_str(&self.format_time(hour, minutes, "")?);
                if i + 2 < hour_items.len() {
                    description.push(',');
                }
                if i + 2 == hour_items.len() {
                    description.push_str(&self.phrase_or_missing(Phrase::SpaceAnd));
                }
            }
            return Ok(description);
        }

        // Generic join of the three field phrases
        let parts = [
            self.seconds_description()?,
            self.minutes_description()?,
            self.hours_description()?,
        ];
        Ok(parts
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", "))
    }

    fn seconds_description(&self) -> Result<String> {
        let expression = &self.fields()?[0];
        self.segment_description(expression, &self.seconds_renderers())
    }

    fn minutes_description(&self) -> Result<String> {
        let expression = &self.fields()?[1];
        self.segment_description(expression, &self.minutes_renderers())
    }

    fn hours_description(&self) -> Result<String> {
        let expression = &self.fields()?[2];
        self.segment_description(expression, &self.hours_renderers())
    }

    /// Day-of-month phrase, with the special tokens checked ahead of the
    /// generic segment routine
    fn day_of_month_description(&self) -> Result<String> {
        let expression = &self.fields()?[3];
        match expression.as_str() {
            "L" => Ok(self.phrase_or_missing(Phrase::CommaOnTheLastDayOfTheMonth)),
            "LW" | "WL" => Ok(self.phrase_or_missing(Phrase::CommaOnTheLastWeekdayOfTheMonth)),
            _ => {
                if let Some(day) = nearest_weekday_number(expression) {
                    let day_phrase = if day == 1 {
                        self.phrase_or_missing(Phrase::FirstWeekday)
                    } else {
                        try_format(self.phrase(Phrase::WeekdayNearestDayX), &day.to_string())
                    };
                    return Ok(try_format(
                        self.phrase(Phrase::CommaOnTheXOfTheMonth),
                        &day_phrase,
                    ));
                }
                if let Some(offset) = last_day_offset(expression) {
                    return Ok(try_format(
                        self.phrase(Phrase::CommaDaysBeforeTheLastDayOfTheMonth),
                        &offset,
                    ));
                }
                self.segment_description(expression, &self.day_of_month_renderers())
            }
        }
    }

    fn month_description(&self) -> Result<String> {
        let expression = &self.fields()?[4];
        self.segment_description(expression, &self.month_renderers())
    }

    /// Day-of-week phrase
    ///
    /// A wildcard renders empty here: the day-of-month clause already covers
    /// "every day", and stating it twice reads as a contradiction.
    fn day_of_week_description(&self) -> Result<String> {
        let expression = &self.fields()?[5];
        if expression == "*" {
            return Ok(String::new());
        }
        self.segment_description(expression, &self.day_of_week_renderers())
    }

    fn year_description(&self) -> Result<String> {
        let expression = &self.fields()?[6];
        self.segment_description(expression, &self.year_renderers())
    }

    /// Shared segment classification and rendering
    ///
    /// Precedence: empty, wildcard, single value, step, list, range.
    fn segment_description(&self, expression: &str, renderers: &SegmentRenderers) -> Result<String> {
        if expression.is_empty() {
            return Ok(String::new());
        }

        if expression == "*" {
            return Ok(renderers.every.clone());
        }

        if !expression.contains(['/', '-', ',']) {
            return Ok(try_format(
                (renderers.item)(expression),
                &(renderers.single)(expression)?,
            ));
        }

        if expression.contains('/') {
            let (start, step) = expression.split_once('/').unwrap_or((expression, ""));
            let mut description = try_format((renderers.interval)(step), &(renderers.single)(step)?);

            if start.contains('-') {
                let between =
                    self.between_description(start, &renderers.between, &renderers.single)?;
                if !between.starts_with(", ") {
                    description.push_str(", ");
                }
                description.push_str(&between);
            } else if !start.contains(['*', ',']) {
                let starting =
                    try_format((renderers.item)(start), &(renderers.single)(start)?)
                        .replace(", ", "");
                description.push_str(&try_format(self.phrase(Phrase::CommaStartingX), &starting));
            }

            return Ok(description);
        }

        if expression.contains(',') {
            let items: Vec<&str> = expression.split(',').collect();
            let mut content = String::new();
            for (i, item) in items.iter().enumerate() {
                if i > 0 && items.len() > 2 {
                    content.push(',');
                    if i + 1 < items.len() {
                        content.push(' ');
                    }
                }
                if i > 0 && (i + 1 == items.len() || items.len() == 2) {
                    content.push_str(&self.phrase_or_missing(Phrase::SpaceAndSpace));
                }
                if item.contains('-') {
                    let between =
                        self.between_description(item, &renderers.range, &renderers.single)?;
                    content.push_str(&between.replace(", ", ""));
                } else {
                    content.push_str(&(renderers.single)(item)?);
                }
            }
            return Ok(try_format((renderers.item)(expression), &content));
        }

        self.between_description(expression, &renderers.between, &renderers.single)
    }

    /// Render a two-sided range with the given between template
    fn between_description(
        &self,
        expression: &str,
        between: &dyn Fn(&str) -> Option<String>,
        single: &dyn Fn(&str) -> Result<String>,
    ) -> Result<String> {
        let (low, high) = expression.split_once('-').unwrap_or((expression, ""));
        let low_description = single(low)?;
        // the upper bound reads inclusively
        let high_description = single(high)?.replace(":00", ":59");
        Ok(try_format2(
            between(expression),
            &low_description,
            &high_description,
        ))
    }

    fn seconds_renderers(&self) -> SegmentRenderers<'_> {
        SegmentRenderers {
            every: self.phrase_or_missing(Phrase::EverySecond),
            single: Box::new(|s| Ok(s.to_string())),
            interval: Box::new(|s| {
                self.phrase(Phrase::EveryXSeconds)
                    .map(|template| template.replace("{0}", s))
            }),
            between: Box::new(|_| self.phrase(Phrase::SecondsXThroughYPastTheMinute)),
            item: Box::new(|s| match s.parse::<u32>() {
                Ok(_) if s == "0" => Some(String::new()),
                Ok(value) if value < 20 => self.phrase(Phrase::AtXSecondsPastTheMinute),
                Ok(_) => self
                    .phrase(Phrase::AtXSecondsPastTheMinuteGt20)
                    .or_else(|| self.phrase(Phrase::AtXSecondsPastTheMinute)),
                Err(_) => self.phrase(Phrase::AtXSecondsPastTheMinute),
            }),
            range: Box::new(|_| {
                self.phrase(Phrase::CommaMinXThroughMinY)
                    .or_else(|| self.phrase(Phrase::CommaXThroughY))
            }),
        }
    }

    fn minutes_renderers(&self) -> SegmentRenderers<'_> {
        SegmentRenderers {
            every: self.phrase_or_missing(Phrase::EveryMinute),
            single: Box::new(|s| Ok(s.to_string())),
            interval: Box::new(|s| {
                self.phrase(Phrase::EveryXMinutes)
                    .map(|template| template.replace("{0}", s))
            }),
            between: Box::new(|_| self.phrase(Phrase::MinutesXThroughYPastTheHour)),
            item: Box::new(|s| match s.parse::<u32>() {
                Ok(_) if s == "0" => Some(String::new()),
                Ok(value) if value < 20 => self.phrase(Phrase::AtXMinutesPastTheHour),
                Ok(_) => self
                    .phrase(Phrase::AtXMinutesPastTheHourGt20)
                    .or_else(|| self.phrase(Phrase::AtXMinutesPastTheHour)),
                Err(_) => self.phrase(Phrase::AtXMinutesPastTheHour),
            }),
            range: Box::new(|_| {
                self.phrase(Phrase::CommaMinXThroughMinY)
                    .or_else(|| self.phrase(Phrase::CommaXThroughY))
            }),
        }
    }

    fn hours_renderers(&self) -> SegmentRenderers<'_> {
        SegmentRenderers {
            every: self.phrase_or_missing(Phrase::EveryHour),
            single: Box::new(|s| self.format_time(s, "0", "")),
            interval: Box::new(|s| {
                self.phrase(Phrase::EveryXHours)
                    .map(|template| template.replace("{0}", s))
            }),
            between: Box::new(|_| self.phrase(Phrase::BetweenXAndY)),
            item: Box::new(|_| self.phrase(Phrase::AtX)),
            range: Box::new(|_| {
                self.phrase(Phrase::CommaMinXThroughMinY)
                    .or_else(|| self.phrase(Phrase::CommaXThroughY))
            }),
        }
    }

    fn day_of_month_renderers(&self) -> SegmentRenderers<'_> {
        SegmentRenderers {
            every: self.phrase_or_missing(Phrase::CommaEveryDay),
            single: Box::new(|s| Ok(s.to_string())),
            interval: Box::new(|s| {
                if s == "1" {
                    self.phrase(Phrase::CommaEveryDay)
                } else {
                    self.phrase(Phrase::CommaEveryXDays)
                }
            }),
            between: Box::new(|_| self.phrase(Phrase::CommaBetweenDayXAndYOfTheMonth)),
            item: Box::new(|_| self.phrase(Phrase::CommaOnDayXOfTheMonth)),
            range: Box::new(|_| self.phrase(Phrase::CommaXThroughY)),
        }
    }

    fn month_renderers(&self) -> SegmentRenderers<'_> {
        SegmentRenderers {
            // a wildcard month is omitted, not stated
            every: String::new(),
            single: Box::new(|s| {
                let month: u32 = s.parse().map_err(|_| invalid_value("month", s))?;
                self.month_name(month).ok_or_else(|| invalid_value("month", s))
            }),
            interval: Box::new(|s| {
                self.phrase(Phrase::CommaEveryXMonths)
                    .map(|template| template.replace("{0}", s))
            }),
            between: Box::new(|_| {
                self.phrase(Phrase::CommaMonthXThroughMonthY)
                    .or_else(|| self.phrase(Phrase::CommaXThroughY))
            }),
            item: Box::new(|_| self.phrase(Phrase::CommaOnlyInX)),
            range: Box::new(|_| {
                self.phrase(Phrase::CommaMonthXThroughMonthY)
                    .or_else(|| self.phrase(Phrase::CommaXThroughY))
            }),
        }
    }

    fn day_of_week_renderers(&self) -> SegmentRenderers<'_> {
        SegmentRenderers {
            every: self.phrase_or_missing(Phrase::CommaEveryDay),
            single: Box::new(|s| {
                // strip an occurrence ordinal or a last-of-month marker
                let value = match s.find('#') {
                    Some(position) => s[..position].to_string(),
                    None => s.replace('L', ""),
                };
                let day: u32 = value.parse().map_err(|_| invalid_value("day-of-week", s))?;
                self.day_name(day).ok_or_else(|| invalid_value("day-of-week", s))
            }),
            interval: Box::new(|s| {
                self.phrase(Phrase::CommaEveryXDaysOfTheWeek)
                    .map(|template| template.replace("{0}", s))
            }),
            between: Box::new(|_| self.phrase(Phrase::CommaXThroughY)),
            item: Box::new(|s| {
                if let Some(position) = s.find('#') {
                    let ordinal_word = match &s[position + 1..] {
                        "1" => self.phrase(Phrase::First),
                        "2" => self.phrase(Phrase::Second),
                        "3" => self.phrase(Phrase::Third),
                        "4" => self.phrase(Phrase::Fourth),
                        "5" => self.phrase(Phrase::Fifth),
                        // out-of-range ordinals degrade to an empty word
                        _ => Some(String::new()),
                    };
                    Some(format!(
                        "{}{}{}",
                        self.phrase(Phrase::CommaOnThe).unwrap_or_default(),
                        ordinal_word.unwrap_or_default(),
                        self.phrase(Phrase::SpaceXOfTheMonth).unwrap_or_default(),
                    ))
                } else if s.contains('L') {
                    self.phrase(Phrase::CommaOnTheLastXOfTheMonth)
                } else {
                    self.phrase(Phrase::CommaOnlyOnX)
                }
            }),
            range: Box::new(|_| self.phrase(Phrase::CommaXThroughY)),
        }
    }

    fn year_renderers(&self) -> SegmentRenderers<'_> {
        SegmentRenderers {
            every: String::new(),
            single: Box::new(|s| {
                if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                    let year: u32 = s.parse().map_err(|_| invalid_value("year", s))?;
                    if year == 0 || year > 9999 {
                        return Err(invalid_value("year", s));
                    }
                    Ok(format!("{:04}", year))
                } else {
                    Ok(s.to_string())
                }
            }),
            interval: Box::new(|s| {
                self.phrase(Phrase::CommaEveryXYears)
                    .map(|template| template.replace("{0}", s))
            }),
            between: Box::new(|_| {
                self.phrase(Phrase::CommaYearXThroughYearY)
                    .or_else(|| self.phrase(Phrase::CommaXThroughY))
            }),
            item: Box::new(|_| self.phrase(Phrase::CommaOnlyInX)),
            range: Box::new(|_| {
                self.phrase(Phrase::CommaYearXThroughYearY)
                    .or_else(|| self.phrase(Phrase::CommaXThroughY))
            }),
        }
    }

    /// Format a clock time from field values, honoring the clock convention
    fn format_time(
        &self,
        hour_expression: &str,
        minute_expression: &str,
        second_expression: &str,
    ) -> Result<String> {
        let mut hour: u32 = hour_expression
            .parse()
            .map_err(|_| invalid_value("hour", hour_expression))?;

        let mut period = String::new();
        if !self.use_24_hour_time_format {
            let key = if hour >= 12 {
                Phrase::PmPeriod
            } else {
                Phrase::AmPeriod
            };
            if let Some(name) = self.phrase(key).filter(|name| !name.is_empty()) {
                period = format!(" {}", name);
            }
            if hour > 12 {
                hour -= 12;
            }
            if hour == 0 {
                hour = 12;
            }
        }

        let minute: u32 = minute_expression
            .parse()
            .map_err(|_| invalid_value("minute", minute_expression))?;

        let second = if second_expression.is_empty() {
            String::new()
        } else {
            let second: u32 = second_expression
                .parse()
                .map_err(|_| invalid_value("second", second_expression))?;
            format!(":{:02}", second)
        };

        Ok(format!("{:02}:{:02}{}{}", hour, minute, second, period))
    }

    /// Strip "every minute" / "every hour" / "every day" boilerplate unless
    /// verbose output was requested
    ///
    /// This is a plain substring removal over the composed sentence, not a
    /// structural re-derivation.
    fn transform_verbosity(&self, mut description: String) -> String {
        if !self.options.verbose {
            for boilerplate in [
                Phrase::CommaEveryMinute,
                Phrase::CommaEveryHour,
                Phrase::CommaEveryDay,
            ] {
                if let Some(text) = self.phrase(boilerplate) {
                    description = description.replace(&text, "");
                }
            }
        }
        description
    }
}

impl std::fmt::Debug for ExpressionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressionDescriptor")
            .field("expression", &self.expression)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn invalid_value(field: &str, value: &str) -> CronError {
    CronError::Generation(format!("invalid {} value '{}'", field, value))
}

/// Fill a one-value template, or emit the missing-phrase marker
fn try_format(template: Option<String>, value: &str) -> String {
    match template {
        Some(template) => template.replace("{0}", value),
        None => MISSING.to_string(),
    }
}

/// Fill a two-value template, or emit the missing-phrase marker
fn try_format2(template: Option<String>, first: &str, second: &str) -> String {
    match template {
        Some(template) => template.replace("{0}", first).replace("{1}", second),
        None => MISSING.to_string(),
    }
}

/// Day number of a "nearest weekday" token: 1-2 digits adjacent to a `W`
fn nearest_weekday_number(expression: &str) -> Option<u32> {
    let bytes = expression.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'W' {
            continue;
        }
        let mut start = i;
        while start > 0 && bytes[start - 1].is_ascii_digit() && i - start < 2 {
            start -= 1;
        }
        if start < i {
            return expression[start..i].parse().ok();
        }
        let mut end = i + 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() && end - i - 1 < 2 {
            end += 1;
        }
        if end > i + 1 {
            return expression[i + 1..end].parse().ok();
        }
    }
    None
}

/// Offset of an `L-N` token: 1-2 digits after `L-`
fn last_day_offset(expression: &str) -> Option<String> {
    let position = expression.find("L-")?;
    let digits: String = expression[position + 2..]
        .chars()
        .take_while(char::is_ascii_digit)
        .take(2)
        .collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Uppercase only the first character
fn uppercase_first(description: &str) -> String {
    let mut characters = description.chars();
    match characters.next() {
        Some(first) => first.to_uppercase().collect::<String>() + characters.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(expression: &str) -> String {
        ExpressionDescriptor::new(expression, Options::default())
            .description(DescriptionType::Full)
            .unwrap()
    }

    fn describe_with(expression: &str, options: Options) -> String {
        ExpressionDescriptor::new(expression, options)
            .description(DescriptionType::Full)
            .unwrap()
    }

    #[test]
    fn test_every_minute() {
        assert_eq!(describe("* * * * *"), "Every minute");
    }

    #[test]
    fn test_every_n_minutes() {
        assert_eq!(describe("*/5 * * * *"), "Every 5 minutes");
        assert_eq!(describe("0 0/10 * * * ?"), "Every 10 minutes");
    }

    #[test]
    fn test_exact_time() {
        assert_eq!(describe("0 0 12 * * ?"), "At 12:00 PM");
        assert_eq!(describe("30 11 * * *"), "At 11:30 AM");
    }

    #[test]
    fn test_exact_time_with_seconds() {
        assert_eq!(describe("5 30 11 * * ?"), "At 11:30:05 AM");
    }

    #[test]
    fn test_verbose_keeps_boilerplate() {
        let terse = describe("0 0 12 * * ?");
        let verbose = describe_with("0 0 12 * * ?", Options::new().with_verbose(true));
        assert_eq!(terse, "At 12:00 PM");
        assert_eq!(verbose, "At 12:00 PM, every day");
    }

    #[test]
    fn test_24_hour_clock() {
        let options = Options::new().with_24_hour_time_format(true);
        assert_eq!(describe_with("0 0 23 * * ?", options), "At 23:00");
    }

    #[test]
    fn test_24_hour_clock_from_locale() {
        assert_eq!(describe_with("0 0 14 * * ?", Options::new().with_locale("de-DE")), "At 14:00");
        assert_eq!(describe("0 0 14 * * ?"), "At 02:00 PM");
    }

    #[test]
    fn test_minute_range_within_hour() {
        assert_eq!(
            describe("0 0-10 11 * * ?"),
            "Every minute between 11:00 AM and 11:10 AM"
        );
    }

    #[test]
    fn test_hour_list_with_shared_minute() {
        assert_eq!(
            describe("0 30 6,14,16 * * ?"),
            "At 06:30 AM, 02:30 PM and 04:30 PM"
        );
        assert_eq!(describe("0 30 6,14 * * ?"), "At 06:30 AM and 02:30 PM");
    }

    #[test]
    fn test_seconds_description() {
        let descriptor = ExpressionDescriptor::new("30 * * * * ?", Options::default());
        assert_eq!(
            descriptor.description(DescriptionType::Seconds).unwrap(),
            "At 30 seconds past the minute"
        );
        assert_eq!(
            descriptor.description(DescriptionType::Full).unwrap(),
            "At 30 seconds past the minute"
        );
    }

    #[test]
    fn test_minutes_list() {
        assert_eq!(
            describe("0 5,10 * * * ?"),
            "At 5 and 10 minutes past the hour"
        );
    }

    #[test]
    fn test_interval_with_start() {
        assert_eq!(
            describe("0 5/10 * * * ?"),
            "Every 10 minutes, starting at 5 minutes past the hour"
        );
    }

    #[test]
    fn test_minutes_range() {
        assert_eq!(
            describe("0 10-30 */2 * * ?"),
            "Minutes 10 through 30 past the hour, every 2 hours"
        );
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(describe("0 0 12 L * ?"), "At 12:00 PM, on the last day of the month");
    }

    #[test]
    fn test_last_weekday_of_month() {
        assert_eq!(
            describe("0 0 12 LW * ?"),
            "At 12:00 PM, on the last weekday of the month"
        );
        assert_eq!(
            describe("0 0 12 WL * ?"),
            "At 12:00 PM, on the last weekday of the month"
        );
    }

    #[test]
    fn test_nearest_weekday() {
        assert_eq!(
            describe("0 0 12 15W * ?"),
            "At 12:00 PM, on the weekday nearest day 15 of the month"
        );
        assert_eq!(
            describe("0 0 12 W15 * ?"),
            "At 12:00 PM, on the weekday nearest day 15 of the month"
        );
        assert_eq!(
            describe("0 0 12 1W * ?"),
            "At 12:00 PM, on the first weekday of the month"
        );
    }

    #[test]
    fn test_days_before_last_day() {
        assert_eq!(
            describe("0 0 12 L-5 * ?"),
            "At 12:00 PM, 5 days before the last day of the month"
        );
    }

    #[test]
    fn test_day_of_month() {
        assert_eq!(describe("0 0 12 15 * ?"), "At 12:00 PM, on day 15 of the month");
        assert_eq!(
            describe("0 0 12 5-10 * ?"),
            "At 12:00 PM, between day 5 and 10 of the month"
        );
    }

    #[test]
    fn test_last_day_of_week() {
        assert_eq!(
            describe("0 15 10 ? * 6L"),
            "At 10:15 AM, on the last Saturday of the month"
        );
    }

    #[test]
    fn test_nth_day_of_week() {
        assert_eq!(
            describe("0 15 10 ? * 6#3"),
            "At 10:15 AM, on the third Saturday of the month"
        );
        assert_eq!(
            describe("0 15 10 ? * 1#1"),
            "At 10:15 AM, on the first Monday of the month"
        );
    }

    #[test]
    fn test_nth_day_of_week_out_of_range_ordinal() {
        // the ordinal word degrades to empty rather than failing
        let description = describe("0 15 10 ? * 6#7");
        assert!(description.contains("of the month"), "{}", description);
        assert!(!description.contains("seventh"), "{}", description);
    }

    #[test]
    fn test_only_on_day_of_week() {
        assert_eq!(describe("0 0 12 ? * MON"), "At 12:00 PM, only on Monday");
    }

    #[test]
    fn test_day_of_week_range() {
        assert_eq!(
            describe("0 0 12 ? * MON-FRI"),
            "At 12:00 PM, Monday through Friday"
        );
    }

    #[test]
    fn test_wildcard_day_of_week_is_silent() {
        let descriptor = ExpressionDescriptor::new("0 0 12 * * *", Options::default());
        assert_eq!(descriptor.description(DescriptionType::DayOfWeek).unwrap(), "");
    }

    #[test]
    fn test_month_list() {
        assert_eq!(
            describe("0 0 12 * JAN,MAR,SEP ?"),
            "At 12:00 PM, only in January, March, and September"
        );
        assert_eq!(
            describe("0 0 12 * JAN,MAR ?"),
            "At 12:00 PM, only in January and March"
        );
    }

    #[test]
    fn test_year() {
        assert_eq!(describe("0 0 12 * * ? 2026"), "At 12:00 PM, only in 2026");
        assert_eq!(
            describe("0 0 12 * * ? 2002-2010"),
            "At 12:00 PM, 2002 through 2010"
        );
    }

    #[test]
    fn test_composed_sentence() {
        let description = describe("0 0/5 14,18,3-39,52 * JAN,MAR,SEP MON-FRI 2002-2010");
        assert!(description.starts_with("Every 5 minutes"), "{}", description);
        assert!(description.contains("Monday through Friday"), "{}", description);
        assert!(
            description.contains("only in January, March, and September"),
            "{}",
            description
        );
        assert!(description.contains("2002 through 2010"), "{}", description);
    }

    #[test]
    fn test_soft_failure_returns_message() {
        let descriptor = ExpressionDescriptor::new("0 0 ABC * * ?", Options::default());
        let description = descriptor.description(DescriptionType::Hours).unwrap();
        assert_eq!(description, "Invalid hour value 'ABC'");
    }

    #[test]
    fn test_throw_on_parse_error() {
        let options = Options::new().with_throw_on_parse_error(true);
        let descriptor = ExpressionDescriptor::new("0 0 ABC * * ?", options);
        let result = descriptor.description(DescriptionType::Full);
        assert!(matches!(result, Err(CronError::Generation(_))));
    }

    #[test]
    fn test_structural_errors_always_propagate() {
        let descriptor = ExpressionDescriptor::new("* * *", Options::default());
        assert!(matches!(
            descriptor.description(DescriptionType::Full),
            Err(CronError::Format(_))
        ));

        let descriptor = ExpressionDescriptor::new("", Options::default());
        assert!(matches!(
            descriptor.description(DescriptionType::Full),
            Err(CronError::MissingField)
        ));
    }

    #[test]
    fn test_repeated_calls_reuse_normalization() {
        let descriptor = ExpressionDescriptor::new("0 30 11 * * ?", Options::default());
        let first = descriptor.description(DescriptionType::Full).unwrap();
        let second = descriptor.description(DescriptionType::Full).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_locale_with_english_fallback() {
        struct Pirate;

        impl crate::locale::Locale for Pirate {
            fn phrase(&self, phrase: Phrase) -> Option<&str> {
                match phrase {
                    Phrase::EveryMinute => Some("every turn o' the glass"),
                    _ => None,
                }
            }
        }

        let descriptor =
            ExpressionDescriptor::new("* * * * *", Options::new().with_locale("xx-XX"))
                .with_locale(Pirate);
        assert_eq!(
            descriptor.description(DescriptionType::Full).unwrap(),
            "Every turn o' the glass"
        );

        // untranslated keys degrade to English
        let descriptor =
            ExpressionDescriptor::new("*/5 * * * *", Options::new().with_locale("xx-XX"))
                .with_locale(Pirate);
        assert_eq!(
            descriptor.description(DescriptionType::Full).unwrap(),
            "Every 5 minutes"
        );
    }

    #[test]
    fn test_nearest_weekday_number() {
        assert_eq!(nearest_weekday_number("15W"), Some(15));
        assert_eq!(nearest_weekday_number("W15"), Some(15));
        assert_eq!(nearest_weekday_number("1W"), Some(1));
        assert_eq!(nearest_weekday_number("15"), None);
        assert_eq!(nearest_weekday_number("W"), None);
    }

    #[test]
    fn test_last_day_offset() {
        assert_eq!(last_day_offset("L-5"), Some("5".to_string()));
        assert_eq!(last_day_offset("L-15"), Some("15".to_string()));
        assert_eq!(last_day_offset("L"), None);
        assert_eq!(last_day_offset("L-"), None);
    }

    #[test]
    fn test_uppercase_first() {
        assert_eq!(uppercase_first("every minute"), "Every minute");
        assert_eq!(uppercase_first(""), "");
        assert_eq!(uppercase_first("At 12:00 PM"), "At 12:00 PM");
    }
}
