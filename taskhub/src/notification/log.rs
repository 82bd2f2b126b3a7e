use async_trait::async_trait;
use tracing::info;

use super::{MailMessage, Mailer};

/// Mail receiver that records outgoing mail in the log.
///
/// Default for deployments without a configured mail transport.
#[derive(Debug, Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        LogMailer {}
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> anyhow::Result<()> {
        info!(
            "New mail for {}: {} / {}",
            message.to, message.subject, message.body
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_mailer_always_succeeds() {
        let mailer = LogMailer::new();
        let message = MailMessage::welcome("johndoe@example.com");

        assert!(mailer.send(&message).await.is_ok());
        assert_eq!(message.subject, "Welcome!");
    }
}
