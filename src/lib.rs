//! Shortlinker core - short code allocation, lookup and click accounting
//!
//! This library is the engine behind a URL shortener: it issues unique
//! short codes, resolves them back to their destination while honoring
//! expiry, and keeps per-link click counts plus an append-only click log.
//! HTTP routing, UI and persistence technology live outside this crate.
//!
//! # Features
//! - **logging**: tracing subscriber setup and colored error output (default)
//!
//! # Architecture
//! - `storage`: Record/ledger models, repository traits, in-memory backend
//! - `services`: Code generation, link management, redirects, analytics
//! - `analytics`: Click context captured from the caller
//! - `config`: Configuration loading (TOML + environment)
//! - `system`: Logging initialization
//! - `utils`: Code helpers and the clock abstraction

pub mod analytics;
pub mod config;
pub mod errors;
pub mod services;
mod shortener;
pub mod storage;
pub mod system;
pub mod utils;

pub use shortener::ShortenerCore;
