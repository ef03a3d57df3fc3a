//! Application cycle
//!
//! One pass of the main loop: record a snapshot, format it, send it over the
//! radio and hand it to storage. The loop itself (rate, what to do after a
//! failed record) belongs to the firmware binary.
//!
//! ## Usage
//!
//! ```ignore
//! let mut cycle = TelemetryCycle::new();
//! loop {
//!     match cycle.run(&mut recorder, &hw.counter)? {
//!         CycleOutcome::Recorded(_) => {}
//!         CycleOutcome::RecordFailed(e) => log_warn!("{}", e.step.name()),
//!     }
//!     hw.counter.delay_ms(100);
//! }
//! ```

use crate::devices::traits::{Barometer, Gps, Imu, Radio, Storage};
use crate::devices::DeviceError;
use crate::platform::TimerInterface;
use crate::recorder::{
    format_telemetry, RecordError, TelemetryData, TelemetryRecorder, TELEMETRY_LINE_CAPACITY,
};

/// Result of one cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    /// Snapshot recorded and forwarded
    Recorded(TelemetryData),
    /// Record stopped early; nothing was sent
    RecordFailed(RecordError),
}

/// Cycle counters and timing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleStats {
    /// Cycles started
    pub cycles: u32,
    /// Cycles whose record step failed
    pub record_failures: u32,
    /// Duration of the most recent cycle
    pub last_execution_us: u32,
    /// Longest cycle seen
    pub max_execution_us: u32,
}

/// Drives the recorder once per call and keeps statistics
#[derive(Debug, Default)]
pub struct TelemetryCycle {
    stats: CycleStats,
}

impl TelemetryCycle {
    pub const fn new() -> Self {
        Self {
            stats: CycleStats {
                cycles: 0,
                record_failures: 0,
                last_execution_us: 0,
                max_execution_us: 0,
            },
        }
    }

    /// Run record, format, transmit and store once
    ///
    /// A failed record is reported as [`CycleOutcome::RecordFailed`], not as
    /// an error. `Err` is returned only when formatting fails or when a
    /// strict transmit or enabled store fails.
    pub fn run<I, G, B, S, R, T>(
        &mut self,
        recorder: &mut TelemetryRecorder<'_, I, G, B, S, R>,
        timer: &T,
    ) -> Result<CycleOutcome, DeviceError>
    where
        I: Imu,
        G: Gps,
        B: Barometer,
        S: Storage,
        R: Radio,
        T: TimerInterface,
    {
        let start_us = timer.now_us();
        self.stats.cycles = self.stats.cycles.wrapping_add(1);

        let result = Self::forward(recorder);

        let elapsed = timer.elapsed_since(start_us);
        let elapsed_us = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.stats.last_execution_us = elapsed_us;
        if elapsed_us > self.stats.max_execution_us {
            self.stats.max_execution_us = elapsed_us;
        }

        if let Ok(CycleOutcome::RecordFailed(_)) = result {
            self.stats.record_failures = self.stats.record_failures.wrapping_add(1);
        }
        result
    }

    fn forward<I, G, B, S, R>(
        recorder: &mut TelemetryRecorder<'_, I, G, B, S, R>,
    ) -> Result<CycleOutcome, DeviceError>
    where
        I: Imu,
        G: Gps,
        B: Barometer,
        S: Storage,
        R: Radio,
    {
        let data = match recorder.record() {
            Ok(data) => data,
            Err(e) => return Ok(CycleOutcome::RecordFailed(e)),
        };

        let line = format_telemetry::<TELEMETRY_LINE_CAPACITY>(&data)?;
        recorder.transmit(&line)?;
        recorder.store(&line)?;

        Ok(CycleOutcome::Recorded(data))
    }

    /// Counters so far
    pub fn stats(&self) -> CycleStats {
        self.stats
    }
}
