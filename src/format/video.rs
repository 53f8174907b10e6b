//! Video duration labels ("2:15", "8:55:43").

use super::FormatError;

/// Seconds in one day; durations wrap at this boundary like a clock.
const SECONDS_PER_DAY: u64 = 86_400;

/// Video-time label with the fallback the callers rely on: any error in
/// the fallible core renders as "0:00" and is never propagated.
pub fn video_time_label(seconds: f64) -> String {
    try_video_time_label(seconds).unwrap_or_else(|_| "0:00".to_string())
}

/// Fallible core of [`video_time_label`].
///
/// Renders the time of day `seconds mod 86400` as `H:MM:SS`, `MM:SS`, or
/// `M:SS`, with no leading zero on the leading unit. Negative and
/// non-finite durations are rejected.
pub fn try_video_time_label(seconds: f64) -> Result<String, FormatError> {
    if !seconds.is_finite() {
        return Err(FormatError::invalid(format!(
            "non-finite duration: {}",
            seconds
        )));
    }
    if seconds < 0.0 {
        return Err(FormatError::invalid(format!(
            "negative duration: {}",
            seconds
        )));
    }

    let total = (seconds.floor() as u64) % SECONDS_PER_DAY;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        Ok(format!("{}:{:02}:{:02}", hours, minutes, secs))
    } else if minutes >= 10 {
        Ok(format!("{:02}:{:02}", minutes, secs))
    } else {
        Ok(format!("{}:{:02}", minutes, secs))
    }
}
