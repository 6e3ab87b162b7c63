//! `HttpApiClient` against a throwaway actix server on an ephemeral port.

mod common;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use club_admin::client::{submit, ApiClient, ClientError, FormMethod, SubmitOutcome, SubmitRequest};
use club_admin::domain::FormPayload;
use club_admin::HttpApiClient;
use serde_json::json;

async fn list_clubs() -> HttpResponse {
    HttpResponse::Ok().json(json!([{ "clubId": 1, "name": "Mladost" }]))
}

/// Echo back 200 only for a multipart body carrying every expected part.
async fn create_club(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let is_multipart = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));
    let text = String::from_utf8_lossy(&body);
    if is_multipart && text.contains("name=\"name\"") && text.contains("Mladost") {
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::BadRequest().finish()
    }
}

async fn delete_club() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn start_stub() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/clubs", web::get().to(list_clubs))
            .route("/clubs", web::post().to(create_club))
            .route("/clubs/{id}", web::delete().to(delete_club))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

#[actix_web::test]
async fn get_json_decodes_body() {
    let client = HttpApiClient::new(start_stub()).unwrap();

    let value = client.get_json("/clubs").await.unwrap();

    assert_eq!(value[0]["name"], "Mladost");
}

#[actix_web::test]
async fn get_json_surfaces_status() {
    let client = HttpApiClient::new(start_stub()).unwrap();

    let err = client.get_json("/nowhere").await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 404 }));
}

#[actix_web::test]
async fn multipart_post_is_accepted() {
    let client = HttpApiClient::new(start_stub()).unwrap();
    let mut payload = FormPayload::default();
    payload.push("name", "Mladost".to_string());
    payload.push("placeName", "Zagreb".to_string());

    let status = client
        .send_form(FormMethod::Post, "/clubs", &payload)
        .await
        .unwrap();

    assert_eq!(status, 200);
}

#[actix_web::test]
async fn delete_with_no_content_is_accepted() {
    let client = HttpApiClient::new(start_stub()).unwrap();

    let outcome = submit(&client, SubmitRequest::delete("/clubs/1".to_string())).await;

    assert_eq!(outcome, SubmitOutcome::Accepted);
}

#[actix_web::test]
async fn unreachable_backend_is_a_failed_submission() {
    let client = HttpApiClient::new("http://127.0.0.1:1").unwrap();

    let outcome = submit(
        &client,
        SubmitRequest::post("/clubs".to_string(), FormPayload::default()),
    )
    .await;

    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
}
