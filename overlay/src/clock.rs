use coarsetime::Instant;
use lift_common::{drawing_support::MAX_STRINGABLE_SECS, view_state::AthleteCountdown};

/// Wall-clock countdown for the athlete on the platform. Precision is whatever
/// a frame gives us; the engine owns the official time.
#[derive(Debug, Clone, Copy)]
pub struct AthleteClock {
    allowance_secs: u32,
    pending_allowance: Option<u32>,
    started: Option<Instant>,
}

impl AthleteClock {
    pub fn new(allowance_secs: u32) -> Self {
        Self {
            allowance_secs,
            pending_allowance: None,
            started: None,
        }
    }

    /// Takes effect at the next reset if the clock is running
    pub fn set_allowance(&mut self, allowance_secs: u32) {
        if self.is_running() {
            self.pending_allowance = Some(allowance_secs);
        } else {
            self.allowance_secs = allowance_secs;
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn remaining_secs(&self) -> u32 {
        let elapsed = self
            .started
            .map(|started| started.elapsed().as_secs())
            .unwrap_or(0);
        self.remaining_after(elapsed)
    }

    fn remaining_after(&self, elapsed_secs: u64) -> u32 {
        let elapsed = u32::try_from(elapsed_secs).unwrap_or(u32::MAX);
        self.allowance_secs.saturating_sub(elapsed)
    }
}

impl AthleteCountdown for AthleteClock {
    fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    fn reset(&mut self) {
        self.started = None;
        if let Some(allowance_secs) = self.pending_allowance.take() {
            self.allowance_secs = allowance_secs;
        }
    }
}

/// `m:ss`, clamped to what fits in the timer box
pub fn secs_to_string(secs: u32) -> String {
    let secs = secs.min(MAX_STRINGABLE_SECS);
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_countdown() {
        let mut clock = AthleteClock::new(60);
        assert!(!clock.is_running());
        assert_eq!(clock.remaining_secs(), 60);

        clock.start();
        assert!(clock.is_running());
        assert!(clock.remaining_secs() <= 60);
        assert_eq!(clock.remaining_after(45), 15);
        assert_eq!(clock.remaining_after(90), 0);

        clock.reset();
        assert!(!clock.is_running());
        clock.set_allowance(120);
        assert_eq!(clock.remaining_secs(), 120);
    }

    #[test]
    fn test_allowance_change_waits_for_reset() {
        let mut clock = AthleteClock::new(60);
        clock.start();
        clock.set_allowance(120);
        assert_eq!(clock.remaining_after(0), 60);
        clock.set_allowance(90);

        clock.reset();
        assert_eq!(clock.remaining_secs(), 90);
        clock.set_allowance(45);
        assert_eq!(clock.remaining_secs(), 45);
    }

    #[test]
    fn test_start_twice_keeps_first_start() {
        let mut clock = AthleteClock::new(60);
        clock.start();
        let first = clock.started;
        clock.start();
        assert_eq!(clock.started, first);
    }

    #[test]
    fn test_secs_to_string() {
        assert_eq!(secs_to_string(0), "0:00");
        assert_eq!(secs_to_string(61), "1:01");
        assert_eq!(secs_to_string(120), "2:00");
        assert_eq!(secs_to_string(100_000), "99:59");
    }
}
