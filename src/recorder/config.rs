//! Recorder configuration
//!
//! The defaults keep `transmit` and `store` infallible from the caller's
//! point of view: a radio write failure is logged and dropped, and storage
//! writes are skipped entirely. Switch to [`TransmitPolicy::Strict`] or
//! [`StorePolicy::Enabled`] to see those failures.

/// What `transmit` does when the radio write fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitPolicy {
    /// Log the failure and report success
    #[default]
    Lenient,
    /// Return the radio's failure
    Strict,
}

/// Whether `store` reaches the storage facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorePolicy {
    /// Report success without writing
    #[default]
    Disabled,
    /// Append to storage and return its result
    Enabled,
}

/// Recorder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RecorderConfig {
    pub transmit: TransmitPolicy,
    pub store: StorePolicy,
}

impl RecorderConfig {
    /// Surface every transmit and store failure
    pub const fn strict() -> Self {
        Self {
            transmit: TransmitPolicy::Strict,
            store: StorePolicy::Enabled,
        }
    }

    pub const fn with_transmit(mut self, transmit: TransmitPolicy) -> Self {
        self.transmit = transmit;
        self
    }

    pub const fn with_store(mut self, store: StorePolicy) -> Self {
        self.store = store;
        self
    }
}
