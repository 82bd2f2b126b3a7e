pub mod log;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

/// Outgoing mail payload handed to the mail collaborator.
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailMessage {
    /// Welcome mail sent after a successful registration.
    pub fn welcome(to: &str) -> Self {
        MailMessage {
            to: to.to_string(),
            subject: "Welcome!".to_string(),
            body: "Thank you for registering!".to_string(),
        }
    }
}

/// Mail delivery collaborator.
///
/// Delivery itself is outside this layer; implementations adapt whatever
/// transport a deployment uses. [`log::LogMailer`] ships as the default.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    async fn send(&self, message: &MailMessage) -> anyhow::Result<()>;
}

/// Dispatch a mail without blocking the request.
///
/// Failures are logged, never surfaced to the client; registration does
/// not fail because a mail bounced.
pub fn send_in_background(mailer: Arc<dyn Mailer>, message: MailMessage) {
    tokio::spawn(async move {
        if let Err(err) = mailer.send(&message).await {
            error!("Failed to send mail to {}: {}", message.to, err);
        }
    });
}
