//! Telemetry aggregator
//!
//! [`TelemetryRecorder`] borrows the five peripheral facades for its whole
//! lifetime and performs one ordered, fail-fast pass over the sensors per
//! [`record`](TelemetryRecorder::record) call.
//!
//! ## Record sequence
//!
//! 1. IMU acceleration
//! 2. IMU angular rate
//! 3. IMU temperature
//! 4. GPS fix
//! 5. Barometer temperature
//! 6. Barometer pressure
//! 7. Barometer altitude
//!
//! Each result is written into the snapshot slot as soon as it arrives. The
//! first failure ends the call: later steps are not attempted and their
//! fields keep the values from the previous call.
//!
//! ## Usage
//!
//! ```ignore
//! use telemetry_recorder::recorder::TelemetryRecorder;
//!
//! let mut recorder =
//!     TelemetryRecorder::create(&mut imu, &mut gps, &mut baro, &mut storage, &mut radio)?;
//! let data = recorder.record()?;
//! recorder.transmit("hello")?;
//! ```

use super::config::{RecorderConfig, StorePolicy, TransmitPolicy};
use super::data::TelemetryData;
use super::error::{RecordError, RecordStep};
use crate::devices::traits::{Barometer, Gps, Imu, Radio, Storage};
use crate::devices::DeviceError;

/// Aggregates IMU, GPS and barometer readings and talks to the radio
///
/// The recorder holds exclusive borrows of its peripherals, so nothing else
/// can drive them while it exists, and it can never outlive them.
pub struct TelemetryRecorder<'a, I, G, B, S, R> {
    imu: &'a mut I,
    gps: &'a mut G,
    barometer: &'a mut B,
    storage: &'a mut S,
    radio: &'a mut R,
    data: TelemetryData,
    config: RecorderConfig,
}

impl<'a, I, G, B, S, R> TelemetryRecorder<'a, I, G, B, S, R>
where
    I: Imu,
    G: Gps,
    B: Barometer,
    S: Storage,
    R: Radio,
{
    /// Bind the peripherals with the default configuration
    ///
    /// Performs no I/O. The snapshot slot starts zeroed.
    pub fn create(
        imu: &'a mut I,
        gps: &'a mut G,
        barometer: &'a mut B,
        storage: &'a mut S,
        radio: &'a mut R,
    ) -> Result<Self, DeviceError> {
        Self::create_with_config(imu, gps, barometer, storage, radio, RecorderConfig::default())
    }

    /// Bind the peripherals with an explicit configuration
    pub fn create_with_config(
        imu: &'a mut I,
        gps: &'a mut G,
        barometer: &'a mut B,
        storage: &'a mut S,
        radio: &'a mut R,
        config: RecorderConfig,
    ) -> Result<Self, DeviceError> {
        crate::log_info!(
            "Telemetry recorder created (transmit: {:?}, store: {:?})",
            config.transmit,
            config.store
        );

        Ok(Self {
            imu,
            gps,
            barometer,
            storage,
            radio,
            data: TelemetryData::default(),
            config,
        })
    }

    /// Read every sensor once and return the updated snapshot
    ///
    /// On failure the returned error names the step that failed. Fields
    /// written before that step stay updated; see [`snapshot`](Self::snapshot).
    pub fn record(&mut self) -> Result<TelemetryData, RecordError> {
        match self.sample() {
            Ok(()) => {
                crate::log_debug!(
                    "Recorded telemetry (gps time {}, sats {})",
                    self.data.gps_time,
                    self.data.gps_satellites
                );
                Ok(self.data)
            }
            Err(e) => {
                crate::log_warn!("Record failed at {}: {:?}", e.step.name(), e.cause);
                Err(e)
            }
        }
    }

    fn sample(&mut self) -> Result<(), RecordError> {
        self.data.acceleration = self
            .imu
            .read_acceleration()
            .map_err(RecordError::at(RecordStep::ImuAcceleration))?;
        self.data.angular_rate = self
            .imu
            .read_angular_rate()
            .map_err(RecordError::at(RecordStep::ImuAngularRate))?;
        self.data.imu_temperature = self
            .imu
            .read_temperature()
            .map_err(RecordError::at(RecordStep::ImuTemperature))?;

        let fix = self.gps.read().map_err(RecordError::at(RecordStep::Gps))?;
        self.data.set_gps_fix(&fix);

        self.data.baro_temperature = self
            .barometer
            .read_temperature()
            .map_err(RecordError::at(RecordStep::BarometerTemperature))?;
        self.data.baro_pressure = self
            .barometer
            .read_pressure()
            .map_err(RecordError::at(RecordStep::BarometerPressure))?;
        self.data.baro_altitude = self
            .barometer
            .read_altitude()
            .map_err(RecordError::at(RecordStep::BarometerAltitude))?;

        Ok(())
    }

    /// Copy of the current snapshot slot
    pub fn snapshot(&self) -> TelemetryData {
        self.data
    }

    /// Bytes pending on the radio link, exactly as the radio returned them
    ///
    /// The slice is valid until the next call on the recorder.
    pub fn receive(&mut self) -> Result<&[u8], DeviceError> {
        self.radio.read()
    }

    /// Send `message` over the radio
    ///
    /// With [`TransmitPolicy::Lenient`] a radio failure is logged and this
    /// still returns `Ok(())`.
    pub fn transmit(&mut self, message: &str) -> Result<(), DeviceError> {
        match self.radio.write(message.as_bytes()) {
            Ok(()) => Ok(()),
            Err(e) => match self.config.transmit {
                TransmitPolicy::Lenient => {
                    crate::log_warn!("Radio write of {} bytes dropped: {:?}", message.len(), e);
                    Ok(())
                }
                TransmitPolicy::Strict => {
                    crate::log_error!("Radio write failed: {:?}", e);
                    Err(e)
                }
            },
        }
    }

    /// Append `message` to storage
    ///
    /// With [`StorePolicy::Disabled`] storage is not touched and this returns
    /// `Ok(())`.
    pub fn store(&mut self, message: &str) -> Result<(), DeviceError> {
        match self.config.store {
            StorePolicy::Disabled => {
                crate::log_trace!("Storage disabled, skipped {} bytes", message.len());
                Ok(())
            }
            StorePolicy::Enabled => self.storage.write(message.as_bytes()).map_err(|e| {
                crate::log_error!("Storage write failed: {:?}", e);
                e
            }),
        }
    }

    /// Active configuration
    pub fn config(&self) -> RecorderConfig {
        self.config
    }
}
