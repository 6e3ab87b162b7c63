use std::sync::Arc;

use crate::client::{ApiClient, HttpApiClient};
use crate::config::AdminConfig;
use crate::error::AppError;
use crate::views::Renderer;

/// Application state shared by all workers through `web::Data`.
pub struct AppState {
    /// REST backend access
    pub api: Arc<dyn ApiClient>,
    /// Compiled page templates
    pub renderer: Renderer,
    pub config: AdminConfig,
}

impl AppState {
    pub fn new(api: Arc<dyn ApiClient>, config: AdminConfig) -> Result<Self, AppError> {
        Ok(Self {
            api,
            renderer: Renderer::new()?,
            config,
        })
    }

    /// Production state talking to the configured backend over HTTP.
    pub fn from_config(config: AdminConfig) -> Result<Self, AppError> {
        let api = HttpApiClient::new(config.api_base_url.clone())?;
        Self::new(Arc::new(api), config)
    }
}
