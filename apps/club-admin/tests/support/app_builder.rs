use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use club_admin::config::AdminConfig;
use club_admin::middleware::request_trace::RequestTrace;
use club_admin::middleware::structured_logger::StructuredLogger;
use club_admin::middleware::trace_span::TraceSpan;
use club_admin::routes;
use club_admin::state::app_state::AppState;
use club_admin::AppError;

use super::fake_api::FakeApi;

/// Builder for test services wired exactly like `main.rs`, but backed by a
/// [`FakeApi`].
pub struct TestAppBuilder {
    api: Arc<FakeApi>,
    config: AdminConfig,
}

impl TestAppBuilder {
    pub fn new(api: Arc<FakeApi>) -> Self {
        Self {
            api,
            config: AdminConfig::default(),
        }
    }

    pub fn with_edit_prefill(mut self) -> Self {
        self.config.edit_prefill = true;
        self
    }

    pub async fn build(
        self,
    ) -> Result<impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>, AppError>
    {
        let state = AppState::new(self.api, self.config)?;
        let data = web::Data::new(state);

        let service = test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(routes::configure),
        )
        .await;

        Ok(service)
    }
}

pub fn create_test_app(api: Arc<FakeApi>) -> TestAppBuilder {
    TestAppBuilder::new(api)
}
