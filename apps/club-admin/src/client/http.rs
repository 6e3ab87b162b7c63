use async_trait::async_trait;
use reqwest::multipart::Form;
use serde_json::Value;
use tracing::debug;

use super::api::{ApiClient, ClientError, FormMethod};
use crate::domain::FormPayload;
use crate::error::AppError;

/// [`ApiClient`] over `reqwest`, writes sent as `multipart/form-data`.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("club-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::config(format!("could not build http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn multipart(payload: &FormPayload) -> Form {
        payload
            .parts()
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        debug!(path, "GET");
        let resp = self.http.get(self.url(path)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn send_form(
        &self,
        method: FormMethod,
        path: &str,
        payload: &FormPayload,
    ) -> Result<u16, ClientError> {
        debug!(path, method = method.as_str(), parts = payload.parts().len(), "send form");
        let builder = match method {
            FormMethod::Post => self.http.post(self.url(path)),
            FormMethod::Put => self.http.put(self.url(path)),
        };
        let resp = builder.multipart(Self::multipart(payload)).send().await?;
        Ok(resp.status().as_u16())
    }

    async fn delete(&self, path: &str) -> Result<u16, ClientError> {
        debug!(path, "DELETE");
        let resp = self.http.delete(self.url(path)).send().await?;
        Ok(resp.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = HttpApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/clubs/1"), "http://localhost:8080/clubs/1");
    }
}
