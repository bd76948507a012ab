//! Cron expression normalizer
//!
//! Splits a raw schedule expression into the canonical 7-field form used by
//! the descriptor:
//! ```text
//! ┌───────────── second (0-59, optional)
//! │ ┌───────────── minute (0-59)
//! │ │ ┌───────────── hour (0-23)
//! │ │ │ ┌───────────── day of month (1-31)
//! │ │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ │ ┌───────────── day of week (0-6, 0=Sunday)
//! │ │ │ │ │ │ ┌───────────── year (optional)
//! │ │ │ │ │ │ │
//! * * * * * * *
//! ```
//!
//! An unspecified field is the empty string, never absent. Several shorthand
//! and legacy token forms are rewritten into one normalized grammar so the
//! renderers only deal with `* , - /` plus the special day tokens.

use crate::options::Options;
use crate::types::{CronError, Result};

const DAY_ABBREVIATIONS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Normalizes a raw cron expression into seven canonical fields
#[derive(Debug)]
pub struct ExpressionParser<'a> {
    expression: &'a str,
    options: &'a Options,
}

impl<'a> ExpressionParser<'a> {
    /// Create a parser for one expression
    pub fn new(expression: &'a str, options: &'a Options) -> Self {
        Self {
            expression,
            options,
        }
    }

    /// Parse the expression into its canonical 7-field form
    ///
    /// Accepts 5 fields (minute through day-of-week), 6 fields (with either a
    /// leading seconds field or a trailing year, disambiguated by a 4-digit
    /// suffix on the last token), or all 7 fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use cron_describe::{ExpressionParser, Options};
    ///
    /// let options = Options::default();
    /// let fields = ExpressionParser::new("*/5 * * * *", &options).parse().unwrap();
    /// assert_eq!(fields[1], "*/5");
    /// assert_eq!(fields[0], "");
    /// assert_eq!(fields[6], "");
    /// ```
    pub fn parse(&self) -> Result<[String; 7]> {
        if self.expression.trim().is_empty() {
            return Err(CronError::MissingField);
        }

        let tokens: Vec<&str> = self.expression.split_whitespace().collect();
        let mut fields: [String; 7] = Default::default();

        match tokens.len() {
            n @ 0..=4 => {
                return Err(CronError::Format(format!(
                    "expression only has {} parts, at least 5 parts are required",
                    n
                )));
            }
            5 => {
                // No seconds, no year
                for (i, token) in tokens.iter().enumerate() {
                    fields[i + 1] = (*token).to_string();
                }
            }
            6 => {
                // A trailing 4-digit token is a year, otherwise the extra
                // token is a leading seconds field
                let offset = if ends_with_four_digits(tokens[5]) { 1 } else { 0 };
                for (i, token) in tokens.iter().enumerate() {
                    fields[i + offset] = (*token).to_string();
                }
            }
            7 => {
                for (i, token) in tokens.iter().enumerate() {
                    fields[i] = (*token).to_string();
                }
            }
            n => {
                return Err(CronError::Format(format!(
                    "expression has too many parts ({}), expression must not have more than 7 parts",
                    n
                )));
            }
        }

        self.normalize(&mut fields);
        tracing::debug!("normalized '{}' into {:?}", self.expression, fields);

        Ok(fields)
    }

    /// Rewrite shorthand token forms into the canonical grammar
    ///
    /// Idempotent: running it over already-canonical fields changes nothing.
    fn normalize(&self, fields: &mut [String; 7]) {
        // '?' means "no restriction" in day-of-month and day-of-week
        fields[3] = fields[3].replace('?', "*");
        fields[5] = fields[5].replace('?', "*");

        // An interval starting at the field's origin is a wildcard interval
        for i in [0, 1, 2] {
            if let Some(rest) = fields[i].strip_prefix("0/") {
                fields[i] = format!("*/{}", rest);
            }
        }
        for i in [3, 4, 5, 6] {
            if let Some(rest) = fields[i].strip_prefix("1/") {
                fields[i] = format!("*/{}", rest);
            }
        }

        // Shift one-based weekday digits down to the 0=Sunday convention
        if !self.options.day_of_week_start_index_zero {
            fields[5] = decrement_day_of_week_digits(&fields[5]);
        }

        // SUN-SAT and JAN-DEC names to their numeric values
        for (day, abbreviation) in DAY_ABBREVIATIONS.iter().enumerate() {
            fields[5] = replace_ignore_ascii_case(&fields[5], abbreviation, &day.to_string());
        }
        for (index, abbreviation) in MONTH_ABBREVIATIONS.iter().enumerate() {
            fields[4] =
                replace_ignore_ascii_case(&fields[4], abbreviation, &(index + 1).to_string());
        }

        // A bare zero seconds field carries no information
        if fields[0] == "0" {
            fields[0].clear();
        }

        for (i, field) in fields.iter_mut().enumerate() {
            // An every-1-unit interval is a wildcard
            if field == "*/1" {
                *field = "*".to_string();
            }

            // Rewrite a bare "start/step" into the equivalent bounded
            // "start-max/step" for the fields with a fixed upper bound, so
            // rendering can treat it as a range with a step.
            if field.contains('/') && !field.contains(['*', '-', ',']) {
                let upper_bound = match i {
                    4 => "12",
                    5 => "6",
                    6 => "9999",
                    _ => continue,
                };
                if let Some((start, step)) = field.split_once('/') {
                    *field = format!("{}-{}/{}", start, upper_bound, step);
                }
            }
        }
    }
}

/// True when the token ends in four ASCII digits (year form)
fn ends_with_four_digits(token: &str) -> bool {
    token.len() >= 4 && token.as_bytes()[token.len() - 4..]
        .iter()
        .all(u8::is_ascii_digit)
}

/// Decrement every bare digit in a one-based day-of-week field
///
/// A digit right after `#` (occurrence ordinal) or `/` (step operand) keeps
/// its value. Operates on single characters; multi-digit runs are shifted
/// digit by digit, not re-parsed as whole numbers.
fn decrement_day_of_week_digits(field: &str) -> String {
    let mut characters: Vec<char> = field.chars().collect();
    for i in 0..characters.len() {
        if i > 0 && (characters[i - 1] == '#' || characters[i - 1] == '/') {
            continue;
        }
        if let Some(digit) = characters[i].to_digit(10) {
            characters[i] = char::from_digit(digit.saturating_sub(1), 10).unwrap_or(characters[i]);
        }
    }
    characters.into_iter().collect()
}

/// Replace every occurrence of an ASCII needle, ignoring case
fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(haystack.len());
    let mut rest = haystack;
    let lower_haystack = haystack.to_ascii_lowercase();
    let lower_needle = needle.to_ascii_lowercase();
    let mut offset = 0;
    while let Some(position) = lower_haystack[offset..].find(&lower_needle) {
        result.push_str(&rest[..position]);
        result.push_str(replacement);
        rest = &rest[position + needle.len()..];
        offset += position + needle.len();
    }
    result.push_str(rest);
    result
}
