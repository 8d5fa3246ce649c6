//! Turn countdown
//!
//! The machine owns no clock. Callers feed it one tick per elapsed second and
//! every tick carries the [`TurnId`] it was scheduled for, so a tick that
//! arrives after the turn changed is dropped instead of draining the next turn.

/// Identifies one player's turn; changes on every hand-off, new round and new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnId(pub(crate) u64);

/// Result of a single countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No countdown running, stale id, or turn already over
    Ignored,
    /// Seconds left after this tick
    Ticked(u32),
    /// Time ran out; the turn was forced complete
    Expired,
}

/// How close the countdown is to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Relaxed,
    Warning,
    Critical,
}

impl Urgency {
    #[must_use]
    pub const fn from_remaining(seconds: u32) -> Self {
        match seconds {
            0..=10 => Self::Critical,
            11..=30 => Self::Warning,
            _ => Self::Relaxed,
        }
    }
}

/// Render seconds as `m:ss`
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(90), "1:30");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn urgency_thresholds() {
        assert_eq!(Urgency::from_remaining(60), Urgency::Relaxed);
        assert_eq!(Urgency::from_remaining(31), Urgency::Relaxed);
        assert_eq!(Urgency::from_remaining(30), Urgency::Warning);
        assert_eq!(Urgency::from_remaining(10), Urgency::Critical);
    }
}
