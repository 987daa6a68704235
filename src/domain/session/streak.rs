//! Consecutive-day prayer streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many consecutive days the user has held a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrayerStreak {
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_prayer_date: Option<NaiveDate>,
}

impl PrayerStreak {
    /// Returns the streak after a session held on `today`.
    ///
    /// A second session on the same day leaves the streak unchanged, a
    /// session the day after the last one extends it, anything else
    /// restarts it at one.
    pub fn record(self, today: NaiveDate) -> Self {
        let count = match self.last_prayer_date {
            Some(last) if last == today => self.count.max(1),
            Some(last) if last.succ_opt() == Some(today) => self.count.saturating_add(1),
            _ => 1,
        };
        Self {
            count,
            last_prayer_date: Some(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn first_session_starts_streak() {
        let streak = PrayerStreak::default().record(day(1));
        assert_eq!(streak.count, 1);
        assert_eq!(streak.last_prayer_date, Some(day(1)));
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let streak = PrayerStreak::default().record(day(1)).record(day(2)).record(day(3));
        assert_eq!(streak.count, 3);
    }

    #[test]
    fn same_day_keeps_streak() {
        let streak = PrayerStreak::default().record(day(1)).record(day(2)).record(day(2));
        assert_eq!(streak.count, 2);
    }

    #[test]
    fn gap_resets_streak() {
        let streak = PrayerStreak::default().record(day(1)).record(day(2)).record(day(5));
        assert_eq!(streak.count, 1);
    }
}
