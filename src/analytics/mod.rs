use crate::config::AnalyticsConfig;
use crate::storage::NewClickLog;

/// 点击上下文，由调用方（HTTP 层）从请求中提取
///
/// 核心不校验也不解析这些字段，原样写入点击日志。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickContext {
    /// 客户端 IP 地址
    pub source_ip: Option<String>,
    /// 用户代理 (User-Agent header)
    pub user_agent: Option<String>,
    /// 来源页面 (Referer header)
    pub referrer: Option<String>,
    /// 位置描述
    pub location: Option<String>,
}

impl ClickContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_ip(mut self, ip: impl Into<String>) -> Self {
        self.source_ip = Some(ip.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// 转换为待写入的点击日志，缺失的 referrer / location 使用配置中的默认值
    pub fn into_click_log(self, url_id: &str, defaults: &AnalyticsConfig) -> NewClickLog {
        NewClickLog {
            url_id: url_id.to_string(),
            source_ip: self.source_ip,
            user_agent: self.user_agent,
            referrer: self.referrer.or_else(|| non_empty(&defaults.default_referrer)),
            location: self.location.or_else(|| non_empty(&defaults.default_location)),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_referrer_and_location() {
        let log = ClickContext::new()
            .with_source_ip("10.0.0.1")
            .into_click_log("url-1", &AnalyticsConfig::default());

        assert_eq!(log.url_id, "url-1");
        assert_eq!(log.source_ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(log.user_agent, None);
        assert_eq!(log.referrer.as_deref(), Some("Direct"));
        assert_eq!(log.location.as_deref(), Some("Unknown"));
    }

    #[test]
    fn test_supplied_values_win_over_defaults() {
        let log = ClickContext::new()
            .with_referrer("https://news.example")
            .with_location("Berlin")
            .into_click_log("url-1", &AnalyticsConfig::default());

        assert_eq!(log.referrer.as_deref(), Some("https://news.example"));
        assert_eq!(log.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_empty_default_disables_fallback() {
        let defaults = AnalyticsConfig {
            default_referrer: String::new(),
            default_location: String::new(),
        };
        let log = ClickContext::new().into_click_log("url-1", &defaults);
        assert_eq!(log.referrer, None);
        assert_eq!(log.location, None);
    }
}
