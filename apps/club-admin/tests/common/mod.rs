#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    admin_test_support::logging::init();
}

/// Owned name/value pairs, as the browser form extractor produces them.
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(n, v)| (n.to_string(), v.to_string()))
        .collect()
}

/// Read an HTML page body, asserting a 200 with an HTML content type.
pub async fn read_html(resp: ServiceResponse<BoxBody>) -> String {
    assert_eq!(resp.status().as_u16(), 200, "expected an HTML page");
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "unexpected content type {content_type}"
    );
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("page should be valid UTF-8")
}
