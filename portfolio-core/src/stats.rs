//! Stats counter animation
//!
//! Each `.stat-value` counts up from zero to the number embedded in its text,
//! then shows its original text again (so `"150+"` ends as `"150+"`, not
//! `"150"`).
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::numbers::{floor_f64_to_i64, usize_to_f64};

/// ASCII digits only; other scripts' numerals are stripped like punctuation.
static NON_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("static regex is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatParseError {
    #[error("stat text `{0}` contains no digits")]
    NoDigits(String),
}

/// What a stat display should show after one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatTick {
    /// Intermediate floored value; keep ticking.
    Counting(String),
    /// Target reached: original text restored, stop the timer.
    Finished(String),
}

/// Count-up state for a single stat display.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    original: String,
    target: f64,
    increment: f64,
    current: f64,
}

impl StatCounter {
    /// Prepare a counter for `text`, advancing in `steps` equal increments.
    ///
    /// # Errors
    ///
    /// Returns [`StatParseError::NoDigits`] when `text` carries no number, in
    /// which case only this display skips its animation.
    pub fn new(text: &str, steps: usize) -> Result<Self, StatParseError> {
        let target = parse_stat_value(text)?;
        let increment = target / usize_to_f64(steps.max(1));
        Ok(Self {
            original: text.to_string(),
            target,
            increment,
            current: 0.0,
        })
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Advance one increment.
    pub fn tick(&mut self) -> StatTick {
        self.current += self.increment;
        if self.current >= self.target {
            StatTick::Finished(self.original.clone())
        } else {
            StatTick::Counting(floor_f64_to_i64(self.current).to_string())
        }
    }
}

/// Every decimal digit of `text`, concatenated and read as one number.
///
/// # Errors
///
/// Returns [`StatParseError::NoDigits`] when nothing is left after stripping.
pub fn parse_stat_value(text: &str) -> Result<f64, StatParseError> {
    let digits = NON_DIGITS.replace_all(text, "");
    digits
        .parse::<f64>()
        .map_err(|_| StatParseError::NoDigits(text.to_string()))
}

/// Permanent one-shot gate for the stats animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsGate {
    fired: bool,
}

impl StatsGate {
    /// Claim the single run. Returns `true` only the first time.
    pub fn try_fire(&mut self) -> bool {
        if self.fired {
            false
        } else {
            self.fired = true;
            true
        }
    }

    #[must_use]
    pub const fn has_fired(self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_concatenated() {
        assert!((parse_stat_value("150+").unwrap() - 150.0).abs() < f64::EPSILON);
        assert!((parse_stat_value("1,234 users").unwrap() - 1234.0).abs() < f64::EPSILON);
        assert!((parse_stat_value("v2.0").unwrap() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_ascii_digits_are_stripped() {
        assert_eq!(parse_stat_value("٣50+").ok(), Some(50.0));
        assert_eq!(
            parse_stat_value("٣٤"),
            Err(StatParseError::NoDigits(String::from("٣٤")))
        );
    }

    #[test]
    fn text_without_digits_is_rejected() {
        assert_eq!(
            parse_stat_value("∞"),
            Err(StatParseError::NoDigits(String::from("∞")))
        );
        assert!(StatCounter::new("", 50).is_err());
    }

    #[test]
    fn counter_restores_original_text() {
        let mut counter = StatCounter::new("150+", 50).unwrap();
        let mut shown = Vec::new();
        let finished = loop {
            match counter.tick() {
                StatTick::Counting(text) => shown.push(text),
                StatTick::Finished(text) => break text,
            }
        };
        assert_eq!(finished, "150+");
        assert_eq!(shown.first().map(String::as_str), Some("3"));
        assert_eq!(shown.last().map(String::as_str), Some("147"));
        assert_eq!(shown.len(), 49);
    }

    #[test]
    fn small_targets_show_floored_zeroes_first() {
        let mut counter = StatCounter::new("5", 50).unwrap();
        assert_eq!(counter.tick(), StatTick::Counting(String::from("0")));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = StatCounter::new("0 bugs", 50).unwrap();
        assert_eq!(counter.tick(), StatTick::Finished(String::from("0 bugs")));
    }

    #[test]
    fn gate_fires_once() {
        let mut gate = StatsGate::default();
        assert!(!gate.has_fired());
        assert!(gate.try_fire());
        assert!(!gate.try_fire());
        assert!(gate.has_fired());
    }
}
