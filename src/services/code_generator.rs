//! Random short code allocation
//!
//! Draws candidates uniformly from the 62-character alphabet and skips any
//! candidate already present in the short-code index. The generator only
//! queries existence; the caller's insert is what actually claims the code.

use tracing::{trace, warn};

use crate::config::ShortenerConfig;
use crate::errors::{Result, ShortlinkerError};
use crate::storage::UrlRepository;
use crate::utils::generate_random_code;

#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: usize,
    max_attempts: u32,
}

impl CodeGenerator {
    pub fn new(length: usize, max_attempts: u32) -> Self {
        Self {
            length,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn from_config(config: &ShortenerConfig) -> Self {
        Self::new(config.code_length, config.max_generate_attempts)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draw a code that is not currently indexed
    ///
    /// Fails with `ExhaustedKeyspace` once `max_attempts` candidates in a row
    /// have collided.
    pub async fn generate(&self, repo: &dyn UrlRepository) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            let candidate = generate_random_code(self.length);
            if !repo.exists(&candidate).await? {
                trace!(
                    "CodeGenerator: '{}' accepted on attempt {}",
                    candidate, attempt
                );
                return Ok(candidate);
            }
            trace!("CodeGenerator: collision on '{}'", candidate);
        }

        warn!(
            "CodeGenerator: no free code after {} attempts (length {})",
            self.max_attempts, self.length
        );
        Err(ShortlinkerError::exhausted_keyspace(format!(
            "No free short code of length {} after {} attempts",
            self.length, self.max_attempts
        )))
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::from_config(&ShortenerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryUrlStore, UrlRecord};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// 所有短码都“已存在”的存储
    struct FullRepo {
        probes: AtomicU32,
    }

    #[async_trait]
    impl UrlRepository for FullRepo {
        async fn insert(&self, _record: UrlRecord) -> Result<()> {
            unreachable!()
        }
        async fn get_by_code(&self, _code: &str) -> Result<Option<UrlRecord>> {
            Ok(None)
        }
        async fn exists(&self, _code: &str) -> Result<bool> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }
        async fn list(&self) -> Result<Vec<UrlRecord>> {
            Ok(vec![])
        }
        async fn increment_click(&self, _id: &str) -> Result<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_generate_shape() {
        let store = MemoryUrlStore::new();
        let generator = CodeGenerator::default();
        for _ in 0..200 {
            let code = generator.generate(&store).await.unwrap();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[tokio::test]
    async fn test_generate_respects_configured_length() {
        let store = MemoryUrlStore::new();
        let generator = CodeGenerator::new(10, 4);
        assert_eq!(generator.generate(&store).await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_exhausted_after_max_attempts() {
        let repo = FullRepo {
            probes: AtomicU32::new(0),
        };
        let generator = CodeGenerator::new(6, 5);

        let err = generator.generate(&repo).await.unwrap_err();
        assert!(matches!(err, ShortlinkerError::ExhaustedKeyspace(_)));
        assert_eq!(repo.probes.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        assert_eq!(CodeGenerator::new(6, 0).max_attempts(), 1);
    }
}
