//! 内存存储后端
//!
//! - `MemoryUrlStore`: 主表（id → 记录）与短码索引（code → id）由同一把
//!   读写锁保护，插入时“检查 + 写入”在写锁内完成
//! - 点击数使用每条记录独立的 `AtomicU64`，读锁下即可自增，不丢计数
//! - `MemoryClickLedger`: 只追加的点击日志
//!
//! 过期记录不会被清理，进程存活期间一直占用内存。

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;

use crate::errors::{Result, ShortlinkerError};
use crate::storage::models::{ClickLogEntry, NewClickLog, UrlRecord};
use crate::storage::traits::{ClickRepository, UrlRepository};
use crate::utils::Clock;

struct StoredUrl {
    record: UrlRecord,
    clicks: AtomicU64,
    /// 插入序号，created_at 相同时用于排序
    seq: u64,
}

impl StoredUrl {
    fn snapshot(&self) -> UrlRecord {
        UrlRecord {
            click_count: self.clicks.load(Ordering::Acquire),
            ..self.record.clone()
        }
    }
}

#[derive(Default)]
struct UrlTables {
    by_id: HashMap<String, StoredUrl>,
    by_code: HashMap<String, String>,
    next_seq: u64,
}

#[derive(Default)]
pub struct MemoryUrlStore {
    inner: RwLock<UrlTables>,
}

impl MemoryUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlStore {
    async fn insert(&self, record: UrlRecord) -> Result<()> {
        let mut tables = self.inner.write();

        if tables.by_code.contains_key(&record.short_code) {
            return Err(ShortlinkerError::duplicate_short_code(format!(
                "Short code '{}' already exists",
                record.short_code
            )));
        }
        if tables.by_id.contains_key(&record.id) {
            return Err(ShortlinkerError::storage(format!(
                "Record id '{}' already exists",
                record.id
            )));
        }

        let seq = tables.next_seq;
        tables.next_seq += 1;
        tables
            .by_code
            .insert(record.short_code.clone(), record.id.clone());
        let clicks = AtomicU64::new(record.click_count);
        tables.by_id.insert(
            record.id.clone(),
            StoredUrl {
                record,
                clicks,
                seq,
            },
        );
        Ok(())
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<UrlRecord>> {
        let tables = self.inner.read();
        let found = tables
            .by_code
            .get(code)
            .and_then(|id| tables.by_id.get(id))
            .map(StoredUrl::snapshot);
        trace!("MemoryUrlStore: lookup '{}' hit={}", code, found.is_some());
        Ok(found)
    }

    async fn exists(&self, code: &str) -> Result<bool> {
        Ok(self.inner.read().by_code.contains_key(code))
    }

    async fn list(&self) -> Result<Vec<UrlRecord>> {
        let tables = self.inner.read();
        let mut stored: Vec<&StoredUrl> = tables.by_id.values().collect();
        stored.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(stored.into_iter().map(StoredUrl::snapshot).collect())
    }

    async fn increment_click(&self, id: &str) -> Result<bool> {
        let tables = self.inner.read();
        match tables.by_id.get(id) {
            Some(stored) => {
                stored.clicks.fetch_add(1, Ordering::AcqRel);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct MemoryClickLedger {
    entries: RwLock<Vec<ClickLogEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryClickLedger {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 倒序遍历后按时间稳定排序：同一时间戳时后写入的排在前面
    fn newest_first<'a, I>(entries: I) -> Vec<ClickLogEntry>
    where
        I: DoubleEndedIterator<Item = &'a ClickLogEntry>,
    {
        let mut out: Vec<ClickLogEntry> = entries.rev().cloned().collect();
        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        out
    }
}

#[async_trait]
impl ClickRepository for MemoryClickLedger {
    async fn append(&self, log: NewClickLog) -> Result<ClickLogEntry> {
        let entry = ClickLogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            url_id: log.url_id,
            timestamp: self.clock.now(),
            source_ip: log.source_ip,
            user_agent: log.user_agent,
            referrer: log.referrer,
            location: log.location,
        };
        self.entries.write().push(entry.clone());
        Ok(entry)
    }

    async fn list_by_url(&self, url_id: &str) -> Result<Vec<ClickLogEntry>> {
        let entries = self.entries.read();
        let matching: Vec<&ClickLogEntry> =
            entries.iter().filter(|e| e.url_id == url_id).collect();
        Ok(Self::newest_first(matching.into_iter()))
    }

    async fn list(&self) -> Result<Vec<ClickLogEntry>> {
        let entries = self.entries.read();
        Ok(Self::newest_first(entries.iter()))
    }
}
