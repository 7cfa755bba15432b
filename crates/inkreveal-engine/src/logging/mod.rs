//! Logging setup.
//!
//! Engine and UI code log through the `log` facade only; hosts call
//! [`init_logging`] once to install the `env_logger` backend.
//!
//! Targets worth filtering on:
//! - `inkreveal_engine::session`: stroke lifecycle, rejected pointer events
//! - `inkreveal_engine::reveal`: reveal state transitions
//! - `inkreveal_engine::decay`: grace period and erosion

mod init;

pub use init::{init_logging, LoggingConfig};
