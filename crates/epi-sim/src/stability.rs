//! Burnout detection.

use epi_core::Day;

/// Decides when an outbreak has burned out.
///
/// Fires on the first day after the grace period that closes a run of
/// `window` consecutive zero-infection days.  With the defaults (14, 2) this
/// is: `day > 14 && infected[day] == 0 && infected[day - 1] == 0`.
///
/// [`observe`](Self::observe) must be called once for every recorded day, in
/// order.
#[derive(Clone, Debug)]
pub struct StabilityDetector {
    grace_days:  u32,
    window:      u32,
    zero_streak: u32,
}

impl Default for StabilityDetector {
    fn default() -> Self {
        Self::new(14, 2)
    }
}

impl StabilityDetector {
    pub fn new(grace_days: u32, window: u32) -> Self {
        Self { grace_days, window: window.max(1), zero_streak: 0 }
    }

    /// Feed one day's infected fraction; `true` means stop recording.
    pub fn observe(&mut self, day: Day, infected_fraction: f64) -> bool {
        if infected_fraction == 0.0 {
            self.zero_streak += 1;
        } else {
            self.zero_streak = 0;
        }
        day.0 > self.grace_days && self.zero_streak >= self.window
    }

    pub fn grace_days(&self) -> u32 {
        self.grace_days
    }

    pub fn window(&self) -> u32 {
        self.window
    }
}
