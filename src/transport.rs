//! Delivery of a submitted form to the chat endpoint.
//!
//! [`MessageTransport`] is the composer's only suspension point. The HTTP
//! implementation posts the form once and returns the confirmed message; it
//! never retries and sets no timeout.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Result, SendError};
use crate::message::{FormPayload, SentMessage};

/// Body encoding used for the outgoing form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormEncoding {
    /// `application/x-www-form-urlencoded`.
    #[default]
    UrlEncoded,
    /// `multipart/form-data`, as a browser sends a `FormData` body.
    Multipart,
}

/// Sends one form payload and yields the server-confirmed message.
///
/// The composer runs on a single thread, so implementations need not be
/// `Send`.
#[async_trait(?Send)]
pub trait MessageTransport {
    async fn send(&self, payload: &FormPayload) -> Result<SentMessage>;
}

/// Posts to the chat message endpoint over HTTP.
///
/// # Example
///
/// ```rust,no_run
/// use chat_composer::message::FormPayload;
/// use chat_composer::transport::{HttpTransport, MessageTransport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new("http://localhost:8080/chat")?;
/// let mut payload = FormPayload::new();
/// payload.push("chatID", "c1");
/// payload.push("content", "Hello!");
/// let sent = transport.send(&payload).await?;
/// println!("{} at {}", sent.content, sent.created_at);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: Url,
    encoding: FormEncoding,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport posting url-encoded forms to `endpoint`.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a transport with a custom reqwest client.
    pub fn with_client(endpoint: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self {
            endpoint,
            encoding: FormEncoding::default(),
            http,
        })
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: FormEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn encoding(&self) -> FormEncoding {
        self.encoding
    }

    fn multipart(payload: &FormPayload) -> reqwest::multipart::Form {
        payload
            .fields()
            .iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            })
    }

    async fn handle_response(response: reqwest::Response) -> Result<SentMessage> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(SendError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait(?Send)]
impl MessageTransport for HttpTransport {
    async fn send(&self, payload: &FormPayload) -> Result<SentMessage> {
        debug!(
            name: "transport.http.post",
            endpoint = %self.endpoint,
            fields = payload.fields().len(),
            encoding = ?self.encoding,
            "Posting chat message"
        );

        let request = self.http.post(self.endpoint.clone());
        let request = match self.encoding {
            FormEncoding::UrlEncoded => request.form(payload.fields()),
            FormEncoding::Multipart => request.multipart(Self::multipart(payload)),
        };

        let response = request.send().await?;
        Self::handle_response(response).await
    }
}
