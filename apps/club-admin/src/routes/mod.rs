use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::records::{
    Club, Coach, Court, Equipment, Match, Meeting, Pair, Player, Tournament, Training, Transaction,
};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::AppState;

pub mod entities;
pub mod health;
pub mod home;
pub mod matches;

/// Register every admin route. Entity routes mirror the backend's REST paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(home::configure_routes);
    cfg.configure(health::configure_routes);
    cfg.configure(matches::configure_routes);

    entities::register::<Club>(cfg);
    entities::register::<Coach>(cfg);
    entities::register::<Player>(cfg);
    entities::register::<Pair>(cfg);
    entities::register::<Tournament>(cfg);
    entities::register::<Match>(cfg);
    entities::register::<Equipment>(cfg);
    entities::register::<Court>(cfg);
    entities::register::<Meeting>(cfg);
    entities::register::<Training>(cfg);
    entities::register::<Transaction>(cfg);

    cfg.default_service(web::route().to(not_found));
}

/// Render `template` into an HTML 200 response.
pub(crate) fn html_response<S: Serialize>(
    app_state: &AppState,
    template: &str,
    ctx: S,
) -> Result<HttpResponse, AppError> {
    let html = app_state.renderer.render(template, ctx)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

async fn not_found(req: actix_web::HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("no page at {}", req.path()),
    ))
}
