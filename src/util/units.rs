//! Clock-face formatting
//!
//! Splits a millisecond count into hours/minutes/seconds/millis and renders
//! it as `HH:MM:SS.mmm`.

use std::fmt;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Largest value the two-digit hour field can show: 99:59:59.999
pub const MAX_DISPLAY_MILLIS: u64 = 100 * MILLIS_PER_HOUR - 1;

/// Elapsed time split into clock-face fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeParts {
    /// Whole hours; not wrapped at 24 or 100
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub millis: u16,
}

impl TimeParts {
    /// Decompose a millisecond count
    ///
    /// # Examples
    /// ```
    /// use swatch::util::units::TimeParts;
    ///
    /// let parts = TimeParts::from_millis(3_723_456);
    /// assert_eq!((parts.hours, parts.minutes, parts.seconds, parts.millis), (1, 2, 3, 456));
    /// ```
    pub fn from_millis(total: u64) -> Self {
        Self {
            hours: total / MILLIS_PER_HOUR,
            minutes: ((total / MILLIS_PER_MINUTE) % 60) as u8,
            seconds: ((total / MILLIS_PER_SECOND) % 60) as u8,
            millis: (total % MILLIS_PER_SECOND) as u16,
        }
    }

    /// Recombine the fields into a millisecond count
    pub fn total_millis(&self) -> u64 {
        self.hours
            .saturating_mul(MILLIS_PER_HOUR)
            .saturating_add(self.minutes as u64 * MILLIS_PER_MINUTE)
            .saturating_add(self.seconds as u64 * MILLIS_PER_SECOND)
            .saturating_add(self.millis as u64)
    }

    /// The same time pinned to what a two-digit hour field can show
    pub fn capped(&self) -> Self {
        if self.hours > 99 {
            Self::from_millis(MAX_DISPLAY_MILLIS)
        } else {
            *self
        }
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.capped();
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            shown.hours, shown.minutes, shown.seconds, shown.millis
        )
    }
}

/// Format milliseconds as a clock face
///
/// Values past 99 hours are shown as `99:59:59.999`.
///
/// # Examples
/// ```
/// use swatch::util::units::format_clock;
///
/// assert_eq!(format_clock(0), "00:00:00.000");
/// assert_eq!(format_clock(3_723_456), "01:02:03.456");
/// ```
pub fn format_clock(millis: u64) -> String {
    TimeParts::from_millis(millis).to_string()
}
