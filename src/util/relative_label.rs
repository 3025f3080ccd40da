//! Parser for display-only relative time labels.
//!
//! Labels look like `2 minutes ago`, `1 hour ago`, `1 week ago`, `5 min ago`
//! or `just now`. They carry no timestamp, only an elapsed amount, which is
//! enough to order rows by recency.

use chrono::TimeDelta;

/// Error type for label parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeLabelError {
    pub input: String,
    pub message: String,
}

impl std::fmt::Display for RelativeLabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to parse relative label '{}': {}",
            self.input, self.message
        )
    }
}

impl std::error::Error for RelativeLabelError {}

/// Parse a relative label into the elapsed time it describes.
///
/// # Examples
///
/// ```
/// use adminboard::util::parse_relative_label;
///
/// let elapsed = parse_relative_label("3 hours ago").unwrap();
/// assert_eq!(elapsed.num_seconds(), 3 * 3600);
/// ```
pub fn parse_relative_label(input: &str) -> Result<TimeDelta, RelativeLabelError> {
    let normalized = input.trim().to_lowercase();

    if normalized == "just now" || normalized == "now" {
        return Ok(TimeDelta::zero());
    }

    let body = normalized
        .strip_suffix("ago")
        .map(str::trim_end)
        .unwrap_or(&normalized);

    let mut parts = body.split_whitespace();
    let (Some(number_str), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(RelativeLabelError {
            input: input.to_string(),
            message: "Expected '<number> <unit> ago'".to_string(),
        });
    };

    let number: i64 = match number_str {
        "a" | "an" | "one" => 1,
        other => other.parse().map_err(|_| RelativeLabelError {
            input: input.to_string(),
            message: format!("Invalid number '{}'", other),
        })?,
    };

    let unit_seconds = unit_seconds(unit).ok_or_else(|| RelativeLabelError {
        input: input.to_string(),
        message: format!("Unknown unit '{}'", unit),
    })?;

    number
        .checked_mul(unit_seconds)
        .and_then(TimeDelta::try_seconds)
        .ok_or(RelativeLabelError {
            input: input.to_string(),
            message: "Relative time overflow".to_string(),
        })
}

fn unit_seconds(unit: &str) -> Option<i64> {
    let seconds = match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3600,
        "d" | "day" | "days" => 86400,
        "w" | "week" | "weeks" => 604800,
        "month" | "months" => 30 * 86400,
        "y" | "year" | "years" => 365 * 86400,
        _ => return None,
    };
    Some(seconds)
}
