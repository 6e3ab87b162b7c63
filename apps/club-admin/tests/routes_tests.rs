mod common;
mod support;

use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::test;
use admin_test_support::problem_details::assert_problem_details_from_service_response;
use club_admin::domain::records::{Club, Coach, Pair, Player, Tournament};
use club_admin::domain::Entity;
use serde_json::{json, Value};
use support::{create_test_app, FakeApi};

use crate::common::read_html;

fn seeded_api() -> std::sync::Arc<FakeApi> {
    let api = FakeApi::new();
    api.serve(
        "/clubs",
        json!([
            { "clubId": 7, "name": "Mladost", "placeName": "Zagreb" },
            { "clubId": 8, "name": "<Bedem>", "placeName": "Osijek" }
        ]),
    );
    api.serve(
        "/clubs/7",
        json!({ "clubId": 7, "name": "Mladost", "placeName": "Zagreb" }),
    );
    api
}

#[actix_web::test]
async fn health_reports_backend_url() {
    let app = create_test_app(FakeApi::new()).build().await.unwrap();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend_url"], "http://localhost:8080");
}

#[actix_web::test]
async fn home_links_top_level_collections() {
    let app = create_test_app(FakeApi::new()).build().await.unwrap();

    let req = test::TestRequest::get().uri("/").to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    for spec in [Club::SPEC, Coach::SPEC, Player::SPEC, Pair::SPEC, Tournament::SPEC] {
        assert!(html.contains(spec.title), "missing {}", spec.title);
    }
}

#[actix_web::test]
async fn unknown_path_is_problem_details_404() {
    let app = create_test_app(FakeApi::new()).build().await.unwrap();

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("/nowhere"),
    )
    .await;
}

#[actix_web::test]
async fn non_numeric_id_is_rejected() {
    let app = create_test_app(FakeApi::new()).build().await.unwrap();

    let req = test::TestRequest::get().uri("/clubs/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_ID",
        StatusCode::BAD_REQUEST,
        Some("abc"),
    )
    .await;
}

#[actix_web::test]
async fn list_page_renders_escaped_rows() {
    let api = seeded_api();
    let app = create_test_app(api.clone()).build().await.unwrap();

    let req = test::TestRequest::get().uri("/clubs").to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert!(html.contains("Mladost"));
    assert!(html.contains("&lt;Bedem&gt;"));
    assert_eq!(api.gets_of("/clubs"), 1);
}

#[actix_web::test]
async fn list_filter_comes_from_query_string() {
    let app = create_test_app(seeded_api()).build().await.unwrap();

    let req = test::TestRequest::get()
        .uri("/clubs?filter.placeName=osij")
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert!(html.contains("&lt;Bedem&gt;"));
    assert!(!html.contains("Mladost"));
}

#[actix_web::test]
async fn list_forms_carry_sort_state() {
    let app = create_test_app(seeded_api()).build().await.unwrap();

    let req = test::TestRequest::get()
        .uri("/clubs?sort=budget&order=desc")
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    // Filter form resubmits the current sort.
    assert!(html.contains(r#"name="sort" value="budget""#));
    assert!(html.contains(r#"name="order" value="desc""#));
    // Create form posts back to the same list state.
    assert!(html.contains(r#"sort=budget&amp;order=desc""#));
}

#[actix_web::test]
async fn create_keeps_filters_from_query_string() {
    let api = seeded_api();
    let app = create_test_app(api.clone()).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs?filter.placeName=osij&sort=name&order=asc")
        .set_form([("name", "Jug"), ("action", "submit")])
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert!(html.contains("are required!"));
    assert!(html.contains("&lt;Bedem&gt;"));
    assert!(!html.contains("Mladost"));
    assert!(html.contains(r#"name="filter.placeName" value="osij""#));
    assert!(api.writes().is_empty());
}

#[actix_web::test]
async fn cancel_clears_create_form_without_request() {
    let api = seeded_api();
    let app = create_test_app(api.clone()).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs")
        .set_form([("name", "Mladost"), ("action", "cancel")])
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert!(api.writes().is_empty());
    assert!(!html.contains("are required!"));
    // "Mladost" is still listed as a row, but no longer an input value.
    assert!(!html.contains(r#"value="Mladost""#));
    assert!(html.contains(r#"name="name" value="""#));
}

#[actix_web::test]
async fn invalid_create_renders_message_without_request() {
    let api = seeded_api();
    let app = create_test_app(api.clone()).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs")
        .set_form([("name", "Mladost"), ("action", "submit")])
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert!(html.contains("are required!"));
    assert!(api.writes().is_empty());
}

#[actix_web::test]
async fn accepted_create_renders_success_notice() {
    let api = seeded_api();
    let app = create_test_app(api.clone()).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs")
        .set_form([
            ("name", "Jug"),
            ("email", "info@jug.hr"),
            ("phoneNumber", "021123456"),
            ("zipCode", "21000"),
            ("placeName", "Split"),
            ("action", "submit"),
        ])
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert_eq!(html.matches("Club added successfully!").count(), 1);
    assert_eq!(api.writes().len(), 1);
    assert_eq!(api.gets_of("/clubs"), 2);
}

#[actix_web::test]
async fn unknown_form_action_is_bad_request() {
    let app = create_test_app(seeded_api()).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs")
        .set_form([("action", "explode")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_ACTION",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn add_entry_on_single_field_is_rejected() {
    let app = create_test_app(seeded_api()).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs")
        .set_form([("action", "add:name")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_FORM_FIELD",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn detail_page_shows_mode_controls() {
    let app = create_test_app(seeded_api()).build().await.unwrap();

    let req = test::TestRequest::get().uri("/clubs/7").to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("Mladost"));
    assert!(!html.contains("Confirm delete"));

    let req = test::TestRequest::get()
        .uri("/clubs/7?mode=delete")
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("Confirm delete"));
    assert!(!html.contains("Save changes"));
}

#[actix_web::test]
async fn confirmed_delete_redirects_to_list() {
    let api = seeded_api();
    api.reply_to_writes(204);
    let app = create_test_app(api.clone()).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs/7/delete")
        .set_form([("mode", "delete")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        "/clubs?done=deleted"
    );
    assert_eq!(api.writes()[0].path, "/clubs/7");
}

#[actix_web::test]
async fn delete_without_delete_mode_is_conflict() {
    let api = seeded_api();
    let app = create_test_app(api.clone()).build().await.unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs/7/delete")
        .set_form([("mode", "change")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "DELETE_MODE_REQUIRED",
        StatusCode::CONFLICT,
        None,
    )
    .await;
    assert!(api.writes().is_empty());
}

#[actix_web::test]
async fn redirected_list_shows_completion_notice() {
    let app = create_test_app(seeded_api()).build().await.unwrap();

    let req = test::TestRequest::get()
        .uri("/clubs?done=deleted")
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert!(html.contains("Club deleted successfully!"));
}

#[actix_web::test]
async fn accepted_edit_redirects_to_list() {
    let api = seeded_api();
    let app = create_test_app(api.clone())
        .with_edit_prefill()
        .build()
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/clubs/7")
        .set_form([
            ("mode", "change"),
            ("name", "Mladost"),
            ("email", "info@mladost.hr"),
            ("phoneNumber", "0911234567"),
            ("zipCode", "10000"),
            ("placeName", "Zagreb"),
            ("action", "submit"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        "/clubs?done=updated"
    );
    assert_eq!(api.writes()[0].method, "PUT");
}

#[actix_web::test]
async fn nested_routes_resolve_parent_scope() {
    let api = FakeApi::new();
    api.serve(
        "/clubs/3/courts",
        json!([{ "courtId": 1, "name": "Centralni", "surface": "CLAY" }]),
    );
    let app = create_test_app(api.clone()).build().await.unwrap();

    let req = test::TestRequest::get().uri("/clubs/3/courts").to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert!(html.contains("Centralni"));
    assert_eq!(api.gets_of("/clubs/3/courts"), 1);
}

#[actix_web::test]
async fn singles_history_renders_rows() {
    let api = FakeApi::new();
    api.serve(
        "/players/5",
        json!({ "playerId": 5, "name": "Ana", "surname": "Horvat" }),
    );
    api.serve(
        "/tournaments",
        json!([{ "tournamentId": 2, "name": "Zagreb Open" }]),
    );
    api.serve(
        "/players/5/singles-matches",
        json!([{ "matchId": 11, "tournamentName": "Zagreb Open", "matchResult": "2-1" }]),
    );
    let app = create_test_app(api).build().await.unwrap();

    let req = test::TestRequest::get()
        .uri("/players/5/singles-matches")
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;

    assert!(html.contains("Zagreb Open"));
    assert!(html.contains("2-1"));
}

#[actix_web::test]
async fn responses_carry_trace_id() {
    let app = create_test_app(FakeApi::new()).build().await.unwrap();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().get("x-trace-id").is_some());
}
