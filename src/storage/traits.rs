use async_trait::async_trait;

use crate::errors::Result;
use crate::storage::models::{ClickLogEntry, NewClickLog, UrlRecord};

/// URL 记录存储
///
/// 主键为 `id`，另有 `short_code` 二级索引。短码一经写入永不复用，
/// 过期记录仍保留在存储中。
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// 原子地插入记录：短码已存在时返回 `DuplicateShortCode`，存储保持不变
    async fn insert(&self, record: UrlRecord) -> Result<()>;

    /// 按短码查找，不做过期判断
    async fn get_by_code(&self, code: &str) -> Result<Option<UrlRecord>>;

    /// 短码是否已被占用（含已过期记录）
    async fn exists(&self, code: &str) -> Result<bool>;

    /// 所有记录的快照，按 `created_at` 降序
    async fn list(&self) -> Result<Vec<UrlRecord>>;

    /// 点击数原子加一，`id` 不存在时返回 `false`
    async fn increment_click(&self, id: &str) -> Result<bool>;
}

/// 点击日志存储（只追加）
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// 分配 id 与时间戳后写入
    async fn append(&self, log: NewClickLog) -> Result<ClickLogEntry>;

    /// 指定链接的点击日志，按时间降序
    async fn list_by_url(&self, url_id: &str) -> Result<Vec<ClickLogEntry>>;

    /// 全部点击日志，按时间降序
    async fn list(&self) -> Result<Vec<ClickLogEntry>>;
}
