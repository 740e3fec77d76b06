//! Keyboard shortcuts
//!
//! Digits select navigation triggers by document order; `h` opens help.

/// Action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Select the navigation trigger at this zero-based position.
    SelectTrigger(usize),
    ShowHelp,
}

impl Shortcut {
    /// Decode a `KeyboardEvent.key` value.
    ///
    /// `max_triggers` bounds the digit range: with the default five pages
    /// only `1`..=`5` are bound.
    #[must_use]
    pub fn from_key(key: &str, max_triggers: usize) -> Option<Self> {
        let mut chars = key.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match first {
            'h' | 'H' => Some(Self::ShowHelp),
            digit @ '1'..='9' => {
                let position = digit.to_digit(10).and_then(|d| usize::try_from(d).ok())?;
                (position <= max_triggers).then(|| Self::SelectTrigger(position - 1))
            }
            _ => None,
        }
    }
}
