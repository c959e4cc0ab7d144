use async_trait::async_trait;
use tracing::info;

use crate::error::Result;

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Writes each email to the log instead of delivering it.
pub struct LogNotifier;

#[async_trait]
impl NotificationService for LogNotifier {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(to, subject, body, "email notification");
        Ok(())
    }
}

pub struct NoopNotifier;

#[async_trait]
impl NotificationService for NoopNotifier {
    async fn send_email(&self, _to: &str, _subject: &str, _body: &str) -> Result<()> {
        Ok(())
    }
}
