//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock Timer implementation
///
/// Uses simulated time: delays advance the counter instead of sleeping.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
}

impl MockTimer {
    /// Create a new mock timer starting at zero
    pub fn new() -> Self {
        Self { now_us: 0 }
    }

    /// Advance simulated time without a delay call
    pub fn advance(&mut self, us: u64) {
        self.now_us = self.now_us.wrapping_add(us);
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.advance(us as u64);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.advance(ms as u64 * 1000);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_us() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_us(500).unwrap();
        assert_eq!(timer.now_us(), 1500);
    }

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();
        timer.delay_ms(5).unwrap();
        assert_eq!(timer.now_us(), 5000);
        assert_eq!(timer.now_ms(), 5);
    }

    #[test]
    fn test_mock_timer_elapsed_since() {
        let mut timer = MockTimer::new();
        timer.advance(3500);
        assert_eq!(timer.elapsed_since(1000), 2500);
        assert_eq!(timer.elapsed_since(10_000), 0);
    }
}
