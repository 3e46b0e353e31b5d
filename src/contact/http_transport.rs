use gloo_net::http::Request;
use http::StatusCode;

use super::{contact_endpoint, ContactError, ContactMessage, ContactTransport};

/// Posts contact messages from the browser with `fetch`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: contact_endpoint(base_url),
        }
    }
}

impl ContactTransport for HttpTransport {
    async fn send(&self, message: &ContactMessage) -> Result<StatusCode, ContactError> {
        let res = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(message)
            .map_err(|e| ContactError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;
        // the body is ignored, only the status decides the outcome
        StatusCode::from_u16(res.status()).map_err(|e| ContactError::Network(e.to_string()))
    }
}
