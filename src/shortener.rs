//! Facade wiring the store, ledger and services together
//!
//! `ShortenerCore` is built explicitly and handed to whatever boundary layer
//! serves requests; there is no process-wide store.

use std::sync::Arc;

use tracing::debug;

use crate::analytics::ClickContext;
use crate::config::StaticConfig;
use crate::errors::Result;
use crate::services::{AnalyticsService, CreateUrlRequest, LinkService, RedirectService};
use crate::storage::{
    ClickLogEntry, ClickRepository, MemoryClickLedger, MemoryUrlStore, UrlRecord, UrlRepository,
    UrlStats, UrlWithClickLogs,
};
use crate::utils::{Clock, SystemClock};

#[derive(Clone)]
pub struct ShortenerCore {
    links: Arc<LinkService>,
    redirects: Arc<RedirectService>,
    analytics: Arc<AnalyticsService>,
}

impl ShortenerCore {
    /// In-memory store and ledger, wall-clock time
    pub fn new(config: &StaticConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self::with_parts(
            config,
            Arc::new(MemoryUrlStore::new()),
            Arc::new(MemoryClickLedger::new(clock.clone())),
            clock,
        )
    }

    /// Build from caller-supplied backends and clock
    pub fn with_parts(
        config: &StaticConfig,
        urls: Arc<dyn UrlRepository>,
        clicks: Arc<dyn ClickRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let links = Arc::new(LinkService::new(urls, clock, &config.shortener));
        let redirects = Arc::new(RedirectService::new(
            links.clone(),
            clicks.clone(),
            config.analytics.clone(),
        ));
        let analytics = Arc::new(AnalyticsService::new(links.clone(), clicks));
        debug!(
            "ShortenerCore: initialized (code length {}, max attempts {})",
            config.shortener.code_length, config.shortener.max_generate_attempts
        );

        Self {
            links,
            redirects,
            analytics,
        }
    }

    pub fn links(&self) -> &Arc<LinkService> {
        &self.links
    }

    pub fn redirects(&self) -> &Arc<RedirectService> {
        &self.redirects
    }

    pub fn analytics(&self) -> &Arc<AnalyticsService> {
        &self.analytics
    }

    pub async fn create_url(
        &self,
        long_url: &str,
        short_code: Option<&str>,
        validity_minutes: Option<i64>,
    ) -> Result<UrlRecord> {
        self.links
            .create_url(CreateUrlRequest {
                long_url: long_url.to_string(),
                short_code: short_code.map(str::to_string),
                validity_minutes,
            })
            .await
    }

    pub async fn create_urls(&self, reqs: Vec<CreateUrlRequest>) -> Result<Vec<UrlRecord>> {
        self.links.create_urls(reqs).await
    }

    pub async fn get_url_by_short_code(&self, code: &str) -> Result<Option<UrlRecord>> {
        self.links.get_by_short_code(code).await
    }

    pub async fn get_all_urls(&self) -> Result<Vec<UrlRecord>> {
        self.links.get_all().await
    }

    pub async fn get_url_stats(&self) -> Result<UrlStats> {
        self.analytics.get_url_stats().await
    }

    pub async fn get_urls_with_click_logs(&self) -> Result<Vec<UrlWithClickLogs>> {
        self.analytics.get_urls_with_click_logs().await
    }

    pub async fn resolve_redirect(&self, code: &str, context: ClickContext) -> Result<String> {
        self.redirects.resolve(code, context).await
    }

    pub async fn get_all_click_logs(&self) -> Result<Vec<ClickLogEntry>> {
        self.analytics.get_all_click_logs().await
    }
}
