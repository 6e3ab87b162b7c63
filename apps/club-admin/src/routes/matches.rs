use actix_web::{web, HttpResponse};

use super::html_response;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::AppState;
use crate::views::{HistorySubject, MatchHistoryView};

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| {
        AppError::invalid(ErrorCode::InvalidId, format!("'{raw}' is not a valid id"))
    })
}

async fn render_history(
    app_state: &AppState,
    subject: HistorySubject,
) -> Result<HttpResponse, AppError> {
    let view = MatchHistoryView::mount(app_state.api.as_ref(), subject).await;
    html_response(app_state, "matches.html", view.page())
}

/// GET /players/{id}/singles-matches
async fn singles(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    render_history(&app_state, HistorySubject::Player(id)).await
}

/// GET /doubles/{id}/doubles-matches
async fn doubles(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    render_history(&app_state, HistorySubject::Pair(id)).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/players/{id}/singles-matches", web::get().to(singles))
        .route("/doubles/{id}/doubles-matches", web::get().to(doubles));
}
