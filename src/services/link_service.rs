//! Link management service
//!
//! Owns short-code allocation, the expiration predicate and the stats
//! computation on top of a [`UrlRepository`].

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, trace, warn};

use crate::config::ShortenerConfig;
use crate::errors::{Result, ShortlinkerError};
use crate::services::CodeGenerator;
use crate::storage::{UrlRecord, UrlRepository, UrlStats};
use crate::utils::{Clock, is_valid_short_code};

// ============ Request DTOs ============

/// Request to create a new short URL
#[derive(Debug, Clone, Default)]
pub struct CreateUrlRequest {
    /// Destination URL, already validated by the caller
    pub long_url: String,
    /// Custom short code (optional, generated if absent or empty)
    pub short_code: Option<String>,
    /// Validity in minutes; absent or non-positive means never expires
    pub validity_minutes: Option<i64>,
}

impl CreateUrlRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            ..Default::default()
        }
    }

    pub fn with_short_code(mut self, code: impl Into<String>) -> Self {
        self.short_code = Some(code.into());
        self
    }

    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.validity_minutes = Some(minutes);
        self
    }
}

// ============ LinkService Implementation ============

/// Service for short URL records
pub struct LinkService {
    repo: Arc<dyn UrlRepository>,
    clock: Arc<dyn Clock>,
    generator: CodeGenerator,
    max_validity_minutes: i64,
}

impl LinkService {
    pub fn new(
        repo: Arc<dyn UrlRepository>,
        clock: Arc<dyn Clock>,
        config: &ShortenerConfig,
    ) -> Self {
        Self {
            repo,
            clock,
            generator: CodeGenerator::from_config(config),
            max_validity_minutes: config.max_validity_minutes,
        }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Compute `expires_at` from an optional validity window
    fn expires_at(
        &self,
        created_at: DateTime<Utc>,
        validity_minutes: Option<i64>,
    ) -> Result<Option<DateTime<Utc>>> {
        match validity_minutes {
            Some(minutes) if minutes > self.max_validity_minutes => {
                Err(ShortlinkerError::validation(format!(
                    "Validity of {} minutes exceeds the maximum of {} minutes",
                    minutes, self.max_validity_minutes
                )))
            }
            Some(minutes) if minutes > 0 => TimeDelta::try_minutes(minutes)
                .and_then(|delta| created_at.checked_add_signed(delta))
                .map(Some)
                .ok_or_else(|| {
                    ShortlinkerError::validation(format!(
                        "Validity of {} minutes is out of the representable time range",
                        minutes
                    ))
                }),
            _ => Ok(None),
        }
    }

    fn build_record(
        &self,
        code: String,
        long_url: &str,
        validity_minutes: Option<i64>,
    ) -> Result<UrlRecord> {
        let created_at = self.clock.now();
        Ok(UrlRecord {
            id: uuid::Uuid::new_v4().to_string(),
            short_code: code,
            long_url: long_url.to_string(),
            created_at,
            expires_at: self.expires_at(created_at, validity_minutes)?,
            is_active: true,
            click_count: 0,
        })
    }

    // ============ Operations ============

    /// Create a new short URL
    ///
    /// A custom code goes straight to the uniqueness check and fails with
    /// `DuplicateShortCode` if it is already indexed, expired records
    /// included. Generated codes that lose an insert race are redrawn.
    pub async fn create_url(&self, req: CreateUrlRequest) -> Result<UrlRecord> {
        if req.long_url.trim().is_empty() {
            return Err(ShortlinkerError::validation("Long URL must not be empty"));
        }

        let record = match req.short_code.filter(|c| !c.is_empty()) {
            Some(code) => {
                if !is_valid_short_code(&code) {
                    return Err(ShortlinkerError::invalid_short_code(format!(
                        "Invalid short code '{}'. Must be 6-10 alphanumeric characters.",
                        code
                    )));
                }
                let record = self.build_record(code, &req.long_url, req.validity_minutes)?;
                self.repo.insert(record.clone()).await?;
                record
            }
            None => self.insert_generated(&req.long_url, req.validity_minutes).await?,
        };

        info!(
            "LinkService: created '{}' -> '{}' (expires: {:?})",
            record.short_code, record.long_url, record.expires_at
        );
        Ok(record)
    }

    async fn insert_generated(
        &self,
        long_url: &str,
        validity_minutes: Option<i64>,
    ) -> Result<UrlRecord> {
        for _ in 0..self.generator.max_attempts() {
            let code = self.generator.generate(self.repo.as_ref()).await?;
            let record = self.build_record(code, long_url, validity_minutes)?;
            match self.repo.insert(record.clone()).await {
                Ok(()) => return Ok(record),
                Err(ShortlinkerError::DuplicateShortCode(_)) => {
                    debug!(
                        "LinkService: generated code '{}' taken concurrently, redrawing",
                        record.short_code
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(ShortlinkerError::exhausted_keyspace(format!(
            "Generated codes kept colliding after {} attempts",
            self.generator.max_attempts()
        )))
    }

    /// Create several short URLs in order, stopping at the first failure
    ///
    /// Records created before the failing item are kept.
    pub async fn create_urls(&self, reqs: Vec<CreateUrlRequest>) -> Result<Vec<UrlRecord>> {
        let mut created = Vec::with_capacity(reqs.len());
        for req in reqs {
            created.push(self.create_url(req).await?);
        }
        Ok(created)
    }

    /// Look up a code, treating expired records as absent
    pub async fn get_by_short_code(&self, code: &str) -> Result<Option<UrlRecord>> {
        let Some(record) = self.repo.get_by_code(code).await? else {
            trace!("LinkService: '{}' not indexed", code);
            return Ok(None);
        };

        if record.is_expired_at(self.clock.now()) {
            debug!("LinkService: '{}' is expired", code);
            return Ok(None);
        }
        Ok(Some(record))
    }

    /// All records, expired or not, newest first
    pub async fn get_all(&self) -> Result<Vec<UrlRecord>> {
        self.repo.list().await
    }

    /// Add one click to a record
    ///
    /// An unknown id is logged and ignored: the caller checked existence
    /// moments earlier, so this is a harmless race.
    pub async fn increment_click_count(&self, id: &str) -> Result<()> {
        if !self.repo.increment_click(id).await? {
            warn!("LinkService: click increment for unknown id '{}' ignored", id);
        }
        Ok(())
    }

    /// Summary counts over the current store
    ///
    /// `active_urls` and `expired_urls` are independent predicates: an
    /// inactive record without expiry is counted in neither.
    pub async fn get_stats(&self) -> Result<UrlStats> {
        let records = self.repo.list().await?;
        let now = self.clock.now();

        Ok(records.iter().fold(UrlStats::default(), |mut stats, r| {
            stats.total_urls += 1;
            stats.total_clicks += r.click_count;
            if r.is_active_at(now) {
                stats.active_urls += 1;
            }
            if r.is_expired_at(now) {
                stats.expired_urls += 1;
            }
            stats
        }))
    }
}
