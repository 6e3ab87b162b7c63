use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

use crate::web::trace_ctx;

pub const TRACE_HEADER: &str = "x-trace-id";

/// Assigns every request a trace id and echoes it in `x-trace-id`.
///
/// An inbound `x-trace-id` is kept when it is a UUID, so a proxy in front of
/// the admin can correlate its own logs; anything else gets a fresh v4 id.
/// The id is stored in request extensions and scoped through [`trace_ctx`]
/// for the rest of the request.
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

fn inbound_trace_id(req: &ServiceRequest) -> Option<String> {
    let raw = req.headers().get(TRACE_HEADER)?.to_str().ok()?;
    Uuid::parse_str(raw.trim()).ok().map(|id| id.to_string())
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = inbound_trace_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());

        req.extensions_mut().insert(trace_id.clone());

        let fut = self.service.call(req);

        Box::pin(trace_ctx::with_trace_id(trace_id.clone(), async move {
            let mut res = fut.await?;

            // Problem responses already carry the header.
            let name = HeaderName::from_static(TRACE_HEADER);
            if !res.headers().contains_key(&name) {
                if let Ok(value) = HeaderValue::from_str(&trace_id) {
                    res.headers_mut().insert(name, value);
                }
            }

            Ok(res)
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    #[actix_web::test]
    async fn fresh_id_is_echoed() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().body(trace_ctx::trace_id()) })),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = resp.headers().get(TRACE_HEADER).unwrap().to_str().unwrap().to_string();
        let body = test::read_body(resp).await;

        assert!(Uuid::parse_str(&header).is_ok());
        assert_eq!(body, header.as_bytes());
    }

    #[actix_web::test]
    async fn inbound_uuid_is_kept_and_garbage_replaced() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let inbound = "0b5c2a47-3f7e-4d0e-9c55-1f0d1c0ad2f1";
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((TRACE_HEADER, inbound))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get(TRACE_HEADER).unwrap(), inbound);

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((TRACE_HEADER, "not-a-uuid"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_ne!(resp.headers().get(TRACE_HEADER).unwrap(), "not-a-uuid");
    }
}
