//! Poll cursor

use chrono::Utc;

/// Lower bound (Unix seconds) of the next fetch window
///
/// The cursor only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(i64);

impl Cursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Cursor positioned at the current wall-clock time
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Value to send as `from_date`
    ///
    /// An unset (zero) cursor means "from now".
    pub fn from_date(&self) -> i64 {
        if self.0 == 0 {
            Utc::now().timestamp()
        } else {
            self.0
        }
    }

    /// Moves the cursor to `candidate` unless that would move it backwards
    pub fn advance(&mut self, candidate: i64) {
        if candidate > self.0 {
            self.0 = candidate;
        }
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_forward() {
        let mut cursor = Cursor::new(1000);
        cursor.advance(1500);
        assert_eq!(cursor.timestamp(), 1500);
    }

    #[test]
    fn test_advance_never_decreases() {
        let mut cursor = Cursor::new(1000);
        cursor.advance(999);
        cursor.advance(0);
        assert_eq!(cursor.timestamp(), 1000);
    }

    #[test]
    fn test_zero_cursor_uses_current_time() {
        let before = Utc::now().timestamp();
        let from_date = Cursor::new(0).from_date();
        assert!(from_date >= before);
    }

    #[test]
    fn test_from_date_passes_through_set_cursor() {
        assert_eq!(Cursor::new(42).from_date(), 42);
    }
}
