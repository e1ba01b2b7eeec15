pub mod backend;
pub mod models;
pub mod traits;

pub use backend::{MemoryClickLedger, MemoryUrlStore};
pub use models::{ClickLogEntry, NewClickLog, UrlRecord, UrlStats, UrlWithClickLogs};
pub use traits::{ClickRepository, UrlRepository};
