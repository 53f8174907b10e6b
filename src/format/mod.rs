//! Display-label formatting
//!
//! Pure functions mapping a raw value (timestamp, count, byte size,
//! duration in seconds) to a human-readable string. No I/O, no shared
//! state; the clock is always passed in explicitly.

pub mod compact;
pub mod elapsed;
pub mod size;
pub mod video;

pub use compact::compact_number_label;
pub use elapsed::{elapsed_time_label, elapsed_time_label_now, parse_instant};
pub use size::file_size_label;
pub use video::{try_video_time_label, video_time_label};

use thiserror::Error;

/// Errors produced by the formatting functions
#[derive(Debug, Error)]
pub enum FormatError {
    /// The argument cannot be formatted (non-finite, negative, or unparseable)
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the argument
        reason: String,
    },
}

impl FormatError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        FormatError::InvalidInput {
            reason: reason.into(),
        }
    }
}
