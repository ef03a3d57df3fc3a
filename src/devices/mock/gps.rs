//! Mock GPS receiver

use crate::devices::{
    traits::{Gps, GpsFix},
    DeviceError, Result,
};

/// Queue depth for scripted fixes
const FIX_QUEUE_SIZE: usize = 16;

/// Mock GPS for testing
///
/// Pops queued fixes first, then keeps returning the last fix (or the
/// default one).
#[derive(Debug, Clone)]
pub struct MockGps {
    queued: heapless::Deque<GpsFix, FIX_QUEUE_SIZE>,
    current: GpsFix,
    error: Option<DeviceError>,
    calls: u32,
}

impl Default for MockGps {
    fn default() -> Self {
        Self::new(GpsFix::default())
    }
}

impl MockGps {
    /// Create a mock that always returns `fix`
    pub fn new(fix: GpsFix) -> Self {
        Self {
            queued: heapless::Deque::new(),
            current: fix,
            error: None,
            calls: 0,
        }
    }

    /// Create a mock that returns `fixes` in order
    ///
    /// Fixes beyond the queue capacity are dropped.
    pub fn with_fixes(fixes: &[GpsFix]) -> Self {
        let mut gps = Self::default();
        for fix in fixes.iter().take(FIX_QUEUE_SIZE) {
            let _ = gps.queued.push_back(*fix);
        }
        gps
    }

    /// Replace the fix returned once the queue is empty
    pub fn set_fix(&mut self, fix: GpsFix) {
        self.current = fix;
    }

    /// Make `read` fail (None restores normal operation)
    pub fn fail(&mut self, error: Option<DeviceError>) {
        self.error = error;
    }

    /// Number of `read` calls
    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl Gps for MockGps {
    fn read(&mut self) -> Result<GpsFix> {
        self.calls += 1;
        if let Some(e) = self.error {
            return Err(e);
        }
        if let Some(fix) = self.queued.pop_front() {
            self.current = fix;
        }
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(time: u32) -> GpsFix {
        GpsFix {
            time,
            latitude: 37.0,
            longitude: -122.0,
            satellites_used: 8,
            altitude: 10.0,
        }
    }

    #[test]
    fn test_mock_gps_sequence_then_holds_last() {
        let mut gps = MockGps::with_fixes(&[fix(1), fix(2)]);
        assert_eq!(gps.read().unwrap().time, 1);
        assert_eq!(gps.read().unwrap().time, 2);
        assert_eq!(gps.read().unwrap().time, 2);
        assert_eq!(gps.calls(), 3);
    }

    #[test]
    fn test_mock_gps_failure() {
        let mut gps = MockGps::new(fix(5));
        gps.fail(Some(DeviceError::NotReady));
        assert_eq!(gps.read(), Err(DeviceError::NotReady));
        assert_eq!(gps.calls(), 1);
    }
}
