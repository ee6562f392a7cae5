use serde::{Deserialize, Serialize};

/// How the elapsed time is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerFormat {
    /// `HH:MM:SS`
    #[default]
    Clock,
    /// Plain number of seconds
    Seconds,
}

/// Elapsed presentation time, advanced once per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    elapsed: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn tick(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }

    pub fn format(&self, format: TimerFormat) -> String {
        match format {
            TimerFormat::Seconds => self.elapsed.to_string(),
            TimerFormat::Clock => {
                let delta = i64::try_from(self.elapsed)
                    .ok()
                    .and_then(chrono::TimeDelta::try_seconds)
                    .unwrap_or(chrono::TimeDelta::MAX);
                format!(
                    "{:02}:{:02}:{:02}",
                    delta.num_hours(),
                    delta.num_minutes() % 60,
                    delta.num_seconds() % 60
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        let clock = Clock::new();
        assert_eq!(clock.elapsed(), 0);
        assert_eq!(clock.format(TimerFormat::Seconds), "0");
        assert_eq!(clock.format(TimerFormat::Clock), "00:00:00");
    }

    #[test]
    fn test_clock_tick_and_format() {
        let mut clock = Clock::new();
        for _ in 0..3725 {
            clock.tick();
        }
        assert_eq!(clock.elapsed(), 3725);
        assert_eq!(clock.format(TimerFormat::Seconds), "3725");
        assert_eq!(clock.format(TimerFormat::Clock), "01:02:05");
    }
}
