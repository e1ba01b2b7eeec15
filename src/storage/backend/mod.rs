//! Storage backends
//!
//! Only the in-memory backend ships with the core. Persistent backends
//! implement [`UrlRepository`](crate::storage::UrlRepository) and
//! [`ClickRepository`](crate::storage::ClickRepository) outside this crate.

pub mod memory;

pub use memory::{MemoryClickLedger, MemoryUrlStore};
