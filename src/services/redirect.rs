//! 短码跳转解析
//!
//! 查找（已应用过期判断）→ 写点击日志 → 点击数加一 → 返回目标地址。
//! 后两步是尽力而为的记账：任一步失败只记录日志，不回滚另一步，也不影响跳转。

use std::sync::Arc;

use tracing::{debug, error, trace};

use crate::analytics::ClickContext;
use crate::config::AnalyticsConfig;
use crate::errors::{Result, ShortlinkerError};
use crate::services::LinkService;
use crate::storage::ClickRepository;

/// 跳转解析器，持有链接服务与点击日志存储
pub struct RedirectService {
    links: Arc<LinkService>,
    clicks: Arc<dyn ClickRepository>,
    defaults: AnalyticsConfig,
}

impl RedirectService {
    pub fn new(
        links: Arc<LinkService>,
        clicks: Arc<dyn ClickRepository>,
        defaults: AnalyticsConfig,
    ) -> Self {
        Self {
            links,
            clicks,
            defaults,
        }
    }

    /// 解析短码并记录点击
    ///
    /// 不存在与已过期都返回同一个 `NotFound`，调用方无法区分。
    pub async fn resolve(&self, code: &str, context: ClickContext) -> Result<String> {
        let Some(record) = self.links.get_by_short_code(code).await? else {
            debug!("Redirect: '{}' not found or expired", code);
            return Err(ShortlinkerError::not_found(format!(
                "Short code '{}' not found or expired",
                code
            )));
        };

        let log = context.into_click_log(&record.id, &self.defaults);
        match self.clicks.append(log).await {
            Ok(entry) => trace!("Redirect: click log '{}' for '{}'", entry.id, code),
            Err(e) => error!("Redirect: failed to append click log for '{}': {}", code, e),
        }

        if let Err(e) = self.links.increment_click_count(&record.id).await {
            error!("Redirect: failed to increment clicks for '{}': {}", code, e);
        }

        debug!("Redirect: '{}' -> '{}'", code, record.long_url);
        Ok(record.long_url)
    }
}
