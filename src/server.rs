mod config;
mod inbox;
mod notify;

use std::sync::Arc;

pub use config::{ConfigError, ServerConfig, SmtpConfig};
pub use inbox::{Inbox, InboxPoisoned, StoredMessage};
pub use notify::{Notice, Notifier, NotifyError, SmtpNotifier};

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use email_address::EmailAddress;
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::contact::ContactMessage;

const MAX_NAME_CHARS: usize = 256;
const MAX_SUBJECT_CHARS: usize = 256;
const MAX_MESSAGE_CHARS: usize = 4096;

pub const RECEIVED_REPLY: &str = "Message received! I'll get back to you soon.";

#[derive(Clone)]
pub struct ApiState {
    pub inbox: Inbox,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ApiState {
    /// Mails the owner only when SMTP credentials are configured.
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        let state = Self {
            inbox: Inbox::new(config.inbox_capacity),
            notifier: None,
        };
        Ok(match &config.smtp {
            Some(smtp) => state.with_notifier(Arc::new(SmtpNotifier::new(smtp)?)),
            None => state,
        })
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Internal(String),
}

impl From<InboxPoisoned> for ApiError {
    fn from(err: InboxPoisoned) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        let status = match self {
            ApiError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
struct Receipt {
    success: bool,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

/// API routes served next to the Leptos pages. State is already applied, so
/// the router merges into any parent.
pub fn api_routes<S>(state: ApiState, config: &ServerConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(health))
        .route("/contact", post(receive_contact))
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        message: "Portfolio API is running",
    })
}

async fn receive_contact(
    State(state): State<ApiState>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<Receipt>, ApiError> {
    validate(&message)?;
    let stored = state.inbox.record(message)?;
    tracing::info!(
        id = stored.id,
        name = %stored.message.name,
        email = %stored.message.email,
        subject = %stored.message.subject,
        "contact message received"
    );
    match &state.notifier {
        // delivery problems never fail the visitor's request
        Some(notifier) => {
            if let Err(e) = notifier.notify(&Notice::from(&stored)).await {
                tracing::error!(id = stored.id, "failed to notify owner: {e}");
            }
        }
        None => tracing::debug!(id = stored.id, "no SMTP credentials, notification skipped"),
    }
    Ok(Json(Receipt {
        success: true,
        message: RECEIVED_REPLY,
    }))
}

fn validate(message: &ContactMessage) -> Result<(), ApiError> {
    let required = [
        ("name", &message.name),
        ("email", &message.email),
        ("subject", &message.subject),
        ("message", &message.message),
    ];
    if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(ApiError::Invalid(format!("{field} is required")));
    }
    if !EmailAddress::is_valid(message.email.trim()) {
        return Err(ApiError::Invalid("email is not a valid address".to_string()));
    }
    let limits = [
        ("name", &message.name, MAX_NAME_CHARS),
        ("subject", &message.subject, MAX_SUBJECT_CHARS),
        ("message", &message.message, MAX_MESSAGE_CHARS),
    ];
    for (field, value, max) in limits {
        if value.chars().count() > max {
            return Err(ApiError::Invalid(format!(
                "{field} must be at most {max} characters"
            )));
        }
    }
    Ok(())
}
