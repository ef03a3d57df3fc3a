//! Telemetry recorder
//!
//! Aggregates one IMU, one GPS receiver and one barometer into a single
//! [`TelemetryData`] snapshot and forwards text over the radio link.
//!
//! ## Modules
//!
//! - `aggregator`: [`TelemetryRecorder`], the borrowed-handle aggregator
//! - `config`: transmit and store policies
//! - `data`: the snapshot record
//! - `error`: [`RecordError`] and the [`RecordStep`] it stopped at
//! - `format`: CSV line formatting for transmission and storage

pub mod aggregator;
pub mod config;
pub mod data;
pub mod error;
pub mod format;

pub use aggregator::TelemetryRecorder;
pub use config::{RecorderConfig, StorePolicy, TransmitPolicy};
pub use data::TelemetryData;
pub use error::{RecordError, RecordStep};
pub use format::{format_telemetry, TELEMETRY_LINE_CAPACITY};
