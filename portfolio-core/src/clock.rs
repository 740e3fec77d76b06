//! Wall clock display
use std::fmt;

/// Local time of day as shown in the header clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockReading {
    #[must_use]
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Build a reading from the `u32` components a date API hands back.
    ///
    /// Out-of-range components (which a well-behaved clock never produces)
    /// saturate instead of wrapping.
    #[must_use]
    pub fn from_components(hours: u32, minutes: u32, seconds: u32) -> Self {
        let clamp = |value: u32, max: u8| u8::try_from(value).unwrap_or(u8::MAX).min(max);
        Self::new(clamp(hours, 23), clamp(minutes, 59), clamp(seconds, 59))
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
