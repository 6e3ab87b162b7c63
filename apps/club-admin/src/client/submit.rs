//! Maps a write request to the outcome the views act on.

use tracing::{error, warn};

use super::api::{ApiClient, FormMethod};
use crate::domain::FormPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    Post,
    Put,
    Delete,
}

impl SubmitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitMethod::Post => "POST",
            SubmitMethod::Put => "PUT",
            SubmitMethod::Delete => "DELETE",
        }
    }

    /// POST and PUT succeed on exactly 200, DELETE on any 2xx.
    pub fn accepts(&self, status: u16) -> bool {
        match self {
            SubmitMethod::Post | SubmitMethod::Put => status == 200,
            SubmitMethod::Delete => (200..300).contains(&status),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub method: SubmitMethod,
    pub path: String,
    /// Ignored for DELETE.
    pub payload: FormPayload,
}

impl SubmitRequest {
    pub fn post(path: String, payload: FormPayload) -> Self {
        Self {
            method: SubmitMethod::Post,
            path,
            payload,
        }
    }

    pub fn put(path: String, payload: FormPayload) -> Self {
        Self {
            method: SubmitMethod::Put,
            path,
            payload,
        }
    }

    pub fn delete(path: String) -> Self {
        Self {
            method: SubmitMethod::Delete,
            path,
            payload: FormPayload::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// The backend answered with a status the method does not accept.
    Rejected { status: u16 },
    /// The request did not complete.
    Failed { detail: String },
}

pub async fn submit(api: &dyn ApiClient, request: SubmitRequest) -> SubmitOutcome {
    let result = match request.method {
        SubmitMethod::Post => {
            api.send_form(FormMethod::Post, &request.path, &request.payload)
                .await
        }
        SubmitMethod::Put => {
            api.send_form(FormMethod::Put, &request.path, &request.payload)
                .await
        }
        SubmitMethod::Delete => api.delete(&request.path).await,
    };

    match result {
        Ok(status) if request.method.accepts(status) => SubmitOutcome::Accepted,
        Ok(status) => {
            warn!(
                method = request.method.as_str(),
                path = %request.path,
                status,
                "backend rejected submission"
            );
            SubmitOutcome::Rejected { status }
        }
        Err(e) => {
            error!(
                method = request.method.as_str(),
                path = %request.path,
                error = %e,
                "submission failed"
            );
            SubmitOutcome::Failed {
                detail: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_require_exactly_ok() {
        assert!(SubmitMethod::Post.accepts(200));
        assert!(!SubmitMethod::Post.accepts(201));
        assert!(!SubmitMethod::Put.accepts(204));
        assert!(SubmitMethod::Delete.accepts(204));
        assert!(!SubmitMethod::Delete.accepts(404));
    }
}
