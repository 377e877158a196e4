use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::quiz_result::QuizResultRecord;

/// Destination for finished results.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn save(&self, record: &QuizResultRecord) -> Result<()>;
}

#[derive(Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn save(&self, record: &QuizResultRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO quiz_results (
                id, user_id, skill, score, total_questions,
                percentage, passed, certificate_id, user_name, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id)
        .bind(&record.user_id)
        .bind(&record.skill)
        .bind(record.score)
        .bind(record.total_questions)
        .bind(record.percentage)
        .bind(record.passed)
        .bind(&record.certificate_id)
        .bind(&record.user_name)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// Used when no database is configured.
#[derive(Clone, Default)]
pub struct NoopResultStore;

#[async_trait]
impl ResultStore for NoopResultStore {
    async fn save(&self, record: &QuizResultRecord) -> Result<()> {
        tracing::debug!(
            result_id = %record.id,
            skill = %record.skill,
            "No result store configured, dropping record"
        );
        Ok(())
    }
}

#[derive(Clone)]
pub struct ResultService {
    store: Arc<dyn ResultStore>,
}

impl ResultService {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    /// Saves on a detached task. Failures are logged and never reach the
    /// caller.
    pub fn record_in_background(&self, record: QuizResultRecord) -> tokio::task::JoinHandle<()> {
        let store = self.store.clone();
        tokio::spawn(async move {
            match store.save(&record).await {
                Ok(()) => tracing::info!(
                    result_id = %record.id,
                    skill = %record.skill,
                    score = record.score,
                    "Quiz result saved"
                ),
                Err(e) => tracing::error!(
                    result_id = %record.id,
                    error = ?e,
                    "Failed to save quiz result"
                ),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::quiz_result::QuizResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingStore {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ResultStore for CountingStore {
        async fn save(&self, _record: &QuizResultRecord) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }
    }

    fn record() -> QuizResultRecord {
        let result = QuizResult {
            score: 4,
            total_questions: 5,
            percentage: 80,
            passed: true,
            certificate_id: "CERT-JAV-123456-AB12".into(),
        };
        QuizResultRecord::new(Some("user-1".into()), "JavaScript", "Ada", &result)
    }

    #[tokio::test]
    async fn background_save_reaches_store() {
        let store = Arc::new(CountingStore::default());
        let svc = ResultService::new(store.clone());
        svc.record_in_background(record()).await.unwrap();
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn store_failure_does_not_propagate() {
        let store = Arc::new(CountingStore {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let svc = ResultService::new(store.clone());
        assert!(svc.record_in_background(record()).await.is_ok());
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn record_copies_result_fields() {
        let r = record();
        assert_eq!(r.score, 4);
        assert_eq!(r.percentage, 80);
        assert_eq!(r.user_id.as_deref(), Some("user-1"));
        assert_eq!(r.certificate_id, "CERT-JAV-123456-AB12");
    }
}
