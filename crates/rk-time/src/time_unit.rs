//! `TimeUnit`: fixed-length units of time that durations are rounded to.

use crate::duration::SignedDuration;

/// A unit of time with an invariant length.
///
/// Days are always 86,400 seconds and weeks seven days. There are no
/// months or years here since their length depends on a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    /// Nanoseconds.
    Nanoseconds,
    /// Microseconds.
    Microseconds,
    /// Milliseconds.
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days of 24 hours.
    Days,
    /// Weeks of 7 days.
    Weeks,
}

impl TimeUnit {
    /// One of this unit as a duration.
    pub const fn duration(self) -> SignedDuration {
        match self {
            TimeUnit::Nanoseconds => SignedDuration::from_nanos(1),
            TimeUnit::Microseconds => SignedDuration::from_micros(1),
            TimeUnit::Milliseconds => SignedDuration::from_millis(1),
            TimeUnit::Seconds => SignedDuration::from_secs(1),
            TimeUnit::Minutes => SignedDuration::from_secs(60),
            TimeUnit::Hours => SignedDuration::from_secs(3_600),
            TimeUnit::Days => SignedDuration::from_secs(86_400),
            TimeUnit::Weeks => SignedDuration::from_secs(604_800),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Nanoseconds => write!(f, "Nanosecond(s)"),
            TimeUnit::Microseconds => write!(f, "Microsecond(s)"),
            TimeUnit::Milliseconds => write!(f, "Millisecond(s)"),
            TimeUnit::Seconds => write!(f, "Second(s)"),
            TimeUnit::Minutes => write!(f, "Minute(s)"),
            TimeUnit::Hours => write!(f, "Hour(s)"),
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_lengths() {
        assert_eq!(TimeUnit::Nanoseconds.duration().as_attos(), 1_000_000_000);
        assert_eq!(TimeUnit::Milliseconds.duration().subsec_nanos(), 1_000_000);
        assert_eq!(TimeUnit::Weeks.duration(), TimeUnit::Days.duration() * 7);
        assert_eq!(TimeUnit::Hours.duration(), TimeUnit::Minutes.duration() * 60);
        assert!(TimeUnit::Seconds < TimeUnit::Minutes);
    }
}
