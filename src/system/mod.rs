//! System-level modules

#[cfg(feature = "logging")]
pub mod logging;
