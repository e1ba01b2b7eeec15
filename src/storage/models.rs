use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 短链接记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub id: String,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,

    #[serde(default)]
    pub click_count: u64,
}

impl UrlRecord {
    /// Expired once `now` reaches `expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Counted as active in stats: flagged active and not yet expired
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at.is_none_or(|expires_at| expires_at > now)
    }
}

/// 点击日志条目（只追加，不可变）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickLogEntry {
    pub id: String,
    pub url_id: String,
    pub timestamp: DateTime<Utc>,
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub location: Option<String>,
}

/// Click log payload before the ledger assigns an id and timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClickLog {
    pub url_id: String,
    pub source_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub location: Option<String>,
}

/// 链接统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlStats {
    pub total_urls: u64,
    pub total_clicks: u64,
    pub active_urls: u64,
    pub expired_urls: u64,
}

/// 带点击记录的链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlWithClickLogs {
    #[serde(flatten)]
    pub url: UrlRecord,
    pub click_logs: Vec<ClickLogEntry>,
}
