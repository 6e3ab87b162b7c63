use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::FormPayload;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ClientError::Status {
                status: status.as_u16(),
            }
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

/// Method of a request carrying a multipart body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Post,
    Put,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMethod::Post => "POST",
            FormMethod::Put => "PUT",
        }
    }
}

/// REST backend seam. Paths are absolute (`/clubs/3/courts`).
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// GET a JSON document; any non-2xx status is [`ClientError::Status`].
    async fn get_json(&self, path: &str) -> Result<Value, ClientError>;

    /// Send a multipart form and return the response status.
    async fn send_form(
        &self,
        method: FormMethod,
        path: &str,
        payload: &FormPayload,
    ) -> Result<u16, ClientError>;

    /// DELETE without a body and return the response status.
    async fn delete(&self, path: &str) -> Result<u16, ClientError>;
}
