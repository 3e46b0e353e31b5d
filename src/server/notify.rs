use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use super::config::{ConfigError, SmtpConfig};
use super::inbox::StoredMessage;

/// A rendered notification for the site owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

impl From<&StoredMessage> for Notice {
    fn from(stored: &StoredMessage) -> Self {
        let msg = &stored.message;
        let body = format!(
            "New message from your portfolio website!\n\n\
             Name:    {}\n\
             Email:   {}\n\
             Subject: {}\n\
             Received: {} (#{})\n\n\
             Message:\n{}\n",
            msg.name,
            msg.email,
            msg.subject,
            stored.received_at.to_rfc3339(),
            stored.id,
            msg.message,
        );
        Self {
            reply_to: msg.email.clone(),
            subject: format!("Portfolio Contact: {}", msg.subject),
            body,
        }
    }
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("could not build notification: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError>;
}

/// Mails notices to the owner through an authenticated STARTTLS relay.
pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, ConfigError> {
        let from = parse_mailbox(&config.username)?;
        let to = parse_mailbox(&config.recipient)?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| ConfigError::InvalidSmtpHost {
                host: config.host.clone(),
                reason: e.to_string(),
            })?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self { mailer, from, to })
    }
}

fn parse_mailbox(addr: &str) -> Result<Mailbox, ConfigError> {
    addr.parse()
        .map_err(|_| ConfigError::InvalidAddress(addr.to_string()))
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(notice.subject.as_str())
            .header(ContentType::TEXT_PLAIN);
        // a malformed sender address only loses the reply shortcut
        if let Ok(reply_to) = notice.reply_to.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }
        let email = builder.body(notice.body.clone())?;
        self.mailer.send(email).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::contact::ContactMessage;

    fn stored() -> StoredMessage {
        StoredMessage {
            id: 7,
            message: ContactMessage {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello there".to_string(),
            },
            received_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_notice_from_stored_message() {
        let notice = Notice::from(&stored());
        assert_eq!(notice.subject, "Portfolio Contact: Hi");
        assert_eq!(notice.reply_to, "jane@x.com");
        assert!(notice.body.contains("Name:    Jane\n"));
        assert!(notice.body.contains("Email:   jane@x.com\n"));
        assert!(notice.body.contains("Subject: Hi\n"));
        assert!(notice.body.contains("2024-05-01T12:00:00+00:00 (#7)"));
        assert!(notice.body.ends_with("Message:\nHello there\n"));
    }

    #[test]
    fn test_smtp_notifier_rejects_bad_recipient() {
        let config = SmtpConfig {
            username: "me@gmail.com".to_string(),
            password: "app-pass".to_string(),
            recipient: "not an address".to_string(),
            host: "smtp.gmail.com".to_string(),
        };
        assert!(matches!(
            SmtpNotifier::new(&config),
            Err(ConfigError::InvalidAddress(addr)) if addr == "not an address"
        ));
    }
}
