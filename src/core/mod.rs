//! Core services shared by every layer
//!
//! - `logging`: `log_*!` macros (defmt on target, stdout in host tests)

pub mod logging;
