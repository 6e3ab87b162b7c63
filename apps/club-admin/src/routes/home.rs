use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::html_response;
use crate::domain::records::{Club, Coach, Pair, Player, Tournament};
use crate::domain::Entity;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
struct HomePage {
    sections: Vec<(&'static str, String)>,
}

async fn home(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let sections = [Club::SPEC, Coach::SPEC, Player::SPEC, Pair::SPEC, Tournament::SPEC]
        .into_iter()
        .map(|spec| (spec.title, format!("/{}", spec.collection)))
        .collect();
    html_response(&app_state, "home.html", HomePage { sections })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home));
}
