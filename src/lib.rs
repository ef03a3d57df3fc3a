#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! telemetry_recorder - Flight telemetry recorder firmware library
//!
//! Polls an IMU, a GPS receiver and a barometer, aggregates their readings
//! into one telemetry snapshot and forwards it over a radio link.
//!
//! The recorder borrows its peripherals through the facades in
//! [`devices::traits`]; board bring-up lives behind [`platform`].

// Platform abstraction layer (UART, I2C, timer, bootstrap)
pub mod platform;

// Device facades and drivers
pub mod devices;

// Logging macros
pub mod core;

// Telemetry aggregation
pub mod recorder;

// Main loop step
pub mod app;

pub use app::{CycleOutcome, CycleStats, TelemetryCycle};
pub use devices::{DeviceError, Result};
pub use recorder::{
    format_telemetry, RecordError, RecordStep, RecorderConfig, StorePolicy, TelemetryData,
    TelemetryRecorder, TransmitPolicy,
};
