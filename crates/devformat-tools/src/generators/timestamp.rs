//! Unix timestamp converter

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolMode, ToolOptions, ToolResult};
use std::fmt::Display;

const INVALID_INPUT: &str = "Invalid date or timestamp. Enter a Unix timestamp (seconds or milliseconds) or a date string.";

/// Date-time layouts read as local time.
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Date-only layouts read as local midnight.
const LOCAL_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y"];

pub fn timestamp_converter() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "timestamp-converter",
            "Unix Timestamp Converter",
            ToolCategory::Generators,
            "timestamp",
        )
        .with_description(
            "Convert between Unix timestamps and human-readable dates. Enter a timestamp, date string, or leave empty for current time.",
        )
        .with_keywords(["timestamp", "unix", "epoch", "date", "time", "convert", "utc", "iso"])
        .with_mode(ToolMode::Generate),
        run,
    )
}

fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Interpret non-empty `text` as an instant.
fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if is_digits(text, 10) {
        return DateTime::from_timestamp(text.parse().ok()?, 0);
    }
    if is_digits(text, 13) {
        return DateTime::from_timestamp_millis(text.parse().ok()?);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    // ISO dates without a time are UTC midnight
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    if let Some(naive) = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return local_to_utc(naive);
    }
    LOCAL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(local_to_utc)
}

/// Render `instant`; calendar fields and the local string use `zone`.
fn render<Tz>(instant: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let millis = instant.timestamp_millis();
    let local = instant.with_timezone(zone);
    [
        "--- Current Conversion ---".to_string(),
        String::new(),
        format!("Unix Timestamp (seconds):      {}", millis.div_euclid(1000)),
        format!("Unix Timestamp (milliseconds): {millis}"),
        String::new(),
        format!("ISO 8601:      {}", instant.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
        format!("UTC String:    {}", instant.format("%a, %d %b %Y %H:%M:%S GMT")),
        format!("Local String:  {}", local.format("%-m/%-d/%Y, %-I:%M:%S %p")),
        String::new(),
        format!("Year:   {}", local.format("%Y")),
        format!("Month:  {} ({})", local.format("%-m"), local.format("%B")),
        format!("Day:    {} ({})", local.format("%-d"), local.format("%A")),
        format!("Hour:   {}", local.format("%H")),
        format!("Minute: {}", local.format("%M")),
        format!("Second: {}", local.format("%S")),
    ]
    .join("\n")
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    let trimmed = input.trim();
    let instant = if trimmed.is_empty() {
        Utc::now()
    } else {
        match parse_instant(trimmed) {
            Some(instant) => instant,
            None => return ToolResult::failure(INVALID_INPUT),
        }
    };
    ToolResult::success(render(instant, &Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1700000000", 1_700_000_000_000)]
    #[case("1700000000123", 1_700_000_000_123)]
    #[case("2023-11-14T22:13:20Z", 1_700_000_000_000)]
    #[case("2023-11-14T23:13:20+01:00", 1_700_000_000_000)]
    #[case("Tue, 14 Nov 2023 22:13:20 +0000", 1_700_000_000_000)]
    #[case("2024-01-01", 1_704_067_200_000)]
    fn test_parse_instant(#[case] input: &str, #[case] millis: i64) {
        assert_eq!(parse_instant(input).map(|dt| dt.timestamp_millis()), Some(millis));
    }

    #[rstest]
    #[case("yesterday")]
    #[case("12345")]
    #[case("2024-13-40")]
    fn test_rejects_garbage(#[case] input: &str) {
        assert_eq!(parse_instant(input), None);
        assert_eq!(run(input, &ToolOptions::default()).error(), Some(INVALID_INPUT));
    }

    #[test]
    fn test_render_in_utc() {
        let instant = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(
            render(instant, &Utc),
            "--- Current Conversion ---

Unix Timestamp (seconds):      1700000000
Unix Timestamp (milliseconds): 1700000000123

ISO 8601:      2023-11-14T22:13:20.123Z
UTC String:    Tue, 14 Nov 2023 22:13:20 GMT
Local String:  11/14/2023, 10:13:20 PM

Year:   2023
Month:  11 (November)
Day:    14 (Tuesday)
Hour:   22
Minute: 13
Second: 20"
        );
    }

    #[test]
    fn test_empty_input_is_now() {
        let before = Utc::now().timestamp();
        let result = run("", &ToolOptions::default());
        let seconds: i64 = result
            .output()
            .lines()
            .find_map(|l| l.strip_prefix("Unix Timestamp (seconds):"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap();
        assert!(seconds >= before && seconds <= Utc::now().timestamp());
    }
}
