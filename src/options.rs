//! Output formatting options

use serde::{Deserialize, Serialize};

/// Locales whose two-letter language code defaults to 24-hour clock output
/// when [`Options::use_24_hour_time_format`] is left unset.
const TWENTY_FOUR_HOUR_LANGUAGES: &[&str] = &[
    "ru", "uk", "de", "it", "tr", "pl", "ro", "da", "sl",
];

/// Options controlling how a description is rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Locale tag selecting the phrase table (e.g. "en-US", "de-DE")
    pub locale: String,

    /// Force 12- or 24-hour clock output. When unset, 24-hour output is used
    /// only for the locales in the fixed allow list.
    pub use_24_hour_time_format: Option<bool>,

    /// Keep "every minute" / "every hour" / "every day" boilerplate clauses
    pub verbose: bool,

    /// Propagate generation failures instead of returning their message as
    /// the description
    pub throw_on_parse_error: bool,

    /// Whether day-of-week values are 0-based (Sunday = 0). When false, bare
    /// digits in the day-of-week field are shifted down by one during
    /// normalization.
    pub day_of_week_start_index_zero: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            use_24_hour_time_format: None,
            verbose: false,
            throw_on_parse_error: false,
            day_of_week_start_index_zero: true,
        }
    }
}

impl Options {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale tag
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Force 12- or 24-hour clock output
    pub fn with_24_hour_time_format(mut self, use_24_hour: bool) -> Self {
        self.use_24_hour_time_format = Some(use_24_hour);
        self
    }

    /// Keep verbose boilerplate clauses
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Propagate generation failures
    pub fn with_throw_on_parse_error(mut self, throw: bool) -> Self {
        self.throw_on_parse_error = throw;
        self
    }

    /// Set whether day-of-week values are 0-based
    pub fn with_day_of_week_start_index_zero(mut self, zero_based: bool) -> Self {
        self.day_of_week_start_index_zero = zero_based;
        self
    }

    /// Resolve the effective clock convention: an explicit setting wins,
    /// otherwise the locale's language code decides.
    pub fn resolved_24_hour_time_format(&self) -> bool {
        match self.use_24_hour_time_format {
            Some(use_24_hour) => use_24_hour,
            None => TWENTY_FOUR_HOUR_LANGUAGES.contains(&language_code(&self.locale).as_str()),
        }
    }
}

/// Two-letter language code of a locale tag ("de-DE" -> "de")
pub(crate) fn language_code(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}
