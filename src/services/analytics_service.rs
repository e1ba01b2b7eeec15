//! Analytics service layer
//!
//! 只读聚合：把链接列表与各自的点击日志拼在一起，并透传统计结果。
//! 不持有任何自己的状态。

use std::sync::Arc;

use tracing::debug;

use crate::errors::Result;
use crate::services::LinkService;
use crate::storage::{ClickLogEntry, ClickRepository, UrlStats, UrlWithClickLogs};

/// Analytics 服务
pub struct AnalyticsService {
    links: Arc<LinkService>,
    clicks: Arc<dyn ClickRepository>,
}

impl AnalyticsService {
    pub fn new(links: Arc<LinkService>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// 所有链接（最新在前）及各自的点击日志（最新在前）
    pub async fn get_urls_with_click_logs(&self) -> Result<Vec<UrlWithClickLogs>> {
        let urls = self.links.get_all().await?;
        let mut result = Vec::with_capacity(urls.len());

        for url in urls {
            let click_logs = self.clicks.list_by_url(&url.id).await?;
            result.push(UrlWithClickLogs { url, click_logs });
        }

        debug!("AnalyticsService: built detailed view of {} urls", result.len());
        Ok(result)
    }

    /// 链接统计（直接透传）
    pub async fn get_url_stats(&self) -> Result<UrlStats> {
        self.links.get_stats().await
    }

    /// 全部点击日志，最新在前
    pub async fn get_all_click_logs(&self) -> Result<Vec<ClickLogEntry>> {
        self.clicks.list().await
    }
}
