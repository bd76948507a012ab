//! End-to-end description scenarios against the public API

use cron_describe::{
    describe, describe_with_options, CronError, DescriptionType, ExpressionDescriptor,
    ExpressionParser, Options,
};

#[test]
fn normalization_always_yields_seven_fields() {
    let options = Options::default();
    for expression in [
        "* * * * *",
        "0 * * * * *",
        "15 10 * * 1 2026",
        "5 15 10 L * 1 2026",
    ] {
        let fields = ExpressionParser::new(expression, &options).parse().unwrap();
        assert_eq!(fields.len(), 7, "{}", expression);
    }
}

#[test]
fn structural_errors_propagate() {
    assert!(matches!(describe(""), Err(CronError::MissingField)));
    assert!(matches!(describe("* * * *"), Err(CronError::Format(_))));
    assert!(matches!(
        describe("* * * * * * * *"),
        Err(CronError::Format(_))
    ));
}

#[test]
fn exact_noon_with_silent_day_of_week() {
    assert_eq!(describe("0 0 12 * * ?").unwrap(), "At 12:00 PM");

    let descriptor = ExpressionDescriptor::new("0 0 12 * * ?", Options::default());
    assert_eq!(descriptor.description(DescriptionType::DayOfWeek).unwrap(), "");
}

#[test]
fn wildcard_fields_contribute_nothing() {
    assert_eq!(describe("*/5 * * * *").unwrap(), "Every 5 minutes");
}

#[test]
fn last_day_of_week_suffix() {
    let description = describe("0 15 10 ? * 6L").unwrap();
    assert_eq!(description, "At 10:15 AM, on the last Saturday of the month");
}

#[test]
fn verbosity_strips_boilerplate_only() {
    let expression = "0 0 12 * * ?";
    let verbose = describe_with_options(expression, &Options::new().with_verbose(true)).unwrap();
    let terse = describe(expression).unwrap();

    assert_eq!(verbose, "At 12:00 PM, every day");
    assert_eq!(terse, verbose.replace(", every day", ""));
}

#[test]
fn clock_convention_follows_locale_allow_list() {
    let german = describe_with_options("0 30 14 * * ?", &Options::new().with_locale("de-DE")).unwrap();
    assert_eq!(german, "At 14:30");
    assert!(!german.contains("PM"));

    let english = describe_with_options("0 30 14 * * ?", &Options::new().with_locale("en-US")).unwrap();
    assert_eq!(english, "At 02:30 PM");
}

#[test]
fn composed_sentence_combines_field_clauses() {
    let description = describe("0 0/5 14,18,3-39,52 * JAN,MAR,SEP MON-FRI 2002-2010").unwrap();

    // interval minutes clause leads the sentence
    assert!(description.starts_with("Every 5 minutes"), "{}", description);
    // list/range hours clause
    assert!(description.contains("02:00 PM"), "{}", description);
    assert!(description.contains("06:00 PM"), "{}", description);
    // weekday range clause
    assert!(description.contains("Monday through Friday"), "{}", description);
    // month list clause
    assert!(
        description.contains("only in January, March, and September"),
        "{}",
        description
    );
    // year range clause
    assert!(description.contains("2002 through 2010"), "{}", description);
}

#[test]
fn day_of_week_one_based_indexing() {
    let options = Options::new().with_day_of_week_start_index_zero(false);
    let description = describe_with_options("0 0 12 ? * 7", &options).unwrap();
    assert_eq!(description, "At 12:00 PM, only on Saturday");
}

#[test]
fn soft_failure_unless_throwing() {
    assert_eq!(
        describe("0 0 NOPE * * ?").unwrap(),
        "An error occured when generating the expression description, \
         check the cron expression syntax"
    );

    let options = Options::new().with_throw_on_parse_error(true);
    let result = describe_with_options("0 0 NOPE * * ?", &options);
    assert!(matches!(result, Err(CronError::Generation(_))));
}

#[test]
fn options_bind_from_json() {
    let options: Options =
        serde_json::from_str(r#"{"locale":"en-US","verbose":true,"dayOfWeekStartIndexZero":false}"#)
            .unwrap();
    assert!(options.verbose);
    assert!(!options.day_of_week_start_index_zero);
    assert_eq!(
        describe_with_options("* * * * *", &options).unwrap(),
        "Every minute, every hour, every day"
    );
}
