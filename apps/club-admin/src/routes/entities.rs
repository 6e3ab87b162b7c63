//! Generic list and detail routes, registered once per entity.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use super::html_response;
use crate::domain::{DetailMode, Entity, FormState, ListQuery, Scope};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::AppState;
use crate::views::{EntityDetailView, EntityListView, Notice};

type Pairs = Vec<(String, String)>;

/// `GET|POST <collection>`, `GET|POST <collection>/{id}` and
/// `POST <collection>/{id}/delete`, nested under `{parent_id}` when the
/// entity has a parent.
pub fn register<E: Entity>(cfg: &mut web::ServiceConfig) {
    let base = E::SPEC.route_pattern();
    cfg.service(
        web::resource(base.clone())
            .route(web::get().to(list_page::<E>))
            .route(web::post().to(list_action::<E>)),
    );
    cfg.service(
        web::resource(format!("{base}/{{id}}"))
            .route(web::get().to(detail_page::<E>))
            .route(web::post().to(detail_action::<E>)),
    );
    cfg.service(
        web::resource(format!("{base}/{{id}}/delete")).route(web::post().to(delete_action::<E>)),
    );
}

#[derive(Debug, PartialEq, Eq)]
enum FormAction {
    Submit,
    Cancel,
    AddEntry(String),
}

fn form_action(pairs: &Pairs) -> Result<FormAction, AppError> {
    match pair_value(pairs, "action") {
        None | Some("submit") => Ok(FormAction::Submit),
        Some("cancel") => Ok(FormAction::Cancel),
        Some(other) => match other.strip_prefix("add:") {
            Some(field) => Ok(FormAction::AddEntry(field.to_string())),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidAction,
                format!("unknown form action '{other}'"),
            )),
        },
    }
}

fn pair_value<'a>(pairs: &'a Pairs, name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

fn path_id(req: &HttpRequest, name: &str) -> Result<i64, AppError> {
    let raw = req.match_info().get(name).unwrap_or_default();
    raw.parse::<i64>().map_err(|_| {
        AppError::invalid(ErrorCode::InvalidId, format!("'{raw}' is not a valid id"))
    })
}

fn scope_of<E: Entity>(req: &HttpRequest) -> Result<Scope, AppError> {
    match E::SPEC.parent {
        Some(_) => Ok(Scope::nested(path_id(req, "parent_id")?)),
        None => Ok(Scope::TOP),
    }
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Acknowledgment carried over a redirect from the detail page.
fn completed_notice<E: Entity>(pairs: &Pairs) -> Option<Notice> {
    match pair_value(pairs, "done") {
        Some("updated") => Some(Notice::success(E::SPEC.updated_message())),
        Some("deleted") => Some(Notice::success(E::SPEC.deleted_message())),
        _ => None,
    }
}

async fn list_page<E: Entity>(
    req: HttpRequest,
    query: web::Query<Pairs>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scope = scope_of::<E>(&req)?;
    let pairs = query.into_inner();
    let list_query = ListQuery::from_pairs(E::SPEC, &pairs);

    let mut view = EntityListView::<E>::mount(app_state.api.as_ref(), scope, list_query).await;
    if let Some(notice) = completed_notice::<E>(&pairs) {
        view.push_notice(notice);
    }

    html_response(&app_state, "list.html", view.page())
}

async fn list_action<E: Entity>(
    req: HttpRequest,
    query: web::Query<Pairs>,
    form: web::Form<Pairs>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scope = scope_of::<E>(&req)?;
    let list_query = ListQuery::from_pairs(E::SPEC, &query.into_inner());
    let pairs = form.into_inner();
    let action = form_action(&pairs)?;
    let api = app_state.api.as_ref();

    let mut view = EntityListView::<E>::mount(api, scope, list_query).await;
    view.bind(FormState::from_pairs(E::SPEC.fields, &pairs));

    match action {
        FormAction::Submit => {
            view.submit(api).await;
        }
        FormAction::Cancel => view.cancel(),
        FormAction::AddEntry(field) => view.add_entry(&field)?,
    }

    html_response(&app_state, "list.html", view.page())
}

async fn detail_page<E: Entity>(
    req: HttpRequest,
    query: web::Query<Pairs>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scope = scope_of::<E>(&req)?;
    let id = path_id(&req, "id")?;
    let pairs = query.into_inner();

    let mut view = EntityDetailView::<E>::mount(
        app_state.api.as_ref(),
        scope,
        id,
        app_state.config.edit_prefill,
    )
    .await;
    view.select_mode(DetailMode::parse(pair_value(&pairs, "mode")));

    html_response(&app_state, "detail.html", view.page())
}

async fn detail_action<E: Entity>(
    req: HttpRequest,
    form: web::Form<Pairs>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scope = scope_of::<E>(&req)?;
    let id = path_id(&req, "id")?;
    let pairs = form.into_inner();
    let action = form_action(&pairs)?;
    let api = app_state.api.as_ref();

    let mut view = EntityDetailView::<E>::mount(api, scope, id, app_state.config.edit_prefill).await;
    view.select_mode(DetailMode::parse(pair_value(&pairs, "mode")));
    view.bind(FormState::from_pairs(E::SPEC.fields, &pairs));

    match action {
        FormAction::Submit => {
            view.submit_edit(api).await?;
        }
        FormAction::Cancel => view.cancel(),
        FormAction::AddEntry(field) => view.add_entry(&field)?,
    }

    if let Some(target) = view.navigate_to() {
        return Ok(see_other(format!("{target}?done=updated")));
    }
    html_response(&app_state, "detail.html", view.page())
}

async fn delete_action<E: Entity>(
    req: HttpRequest,
    form: web::Form<Pairs>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let scope = scope_of::<E>(&req)?;
    let id = path_id(&req, "id")?;
    let pairs = form.into_inner();
    let api = app_state.api.as_ref();

    let mut view = EntityDetailView::<E>::mount(api, scope, id, app_state.config.edit_prefill).await;
    view.select_mode(DetailMode::parse(pair_value(&pairs, "mode")));
    view.confirm_delete(api).await?;

    if let Some(target) = view.navigate_to() {
        return Ok(see_other(format!("{target}?done=deleted")));
    }
    html_response(&app_state, "detail.html", view.page())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Pairs {
        items
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn form_action_defaults_to_submit() {
        assert_eq!(form_action(&pairs(&[])).unwrap(), FormAction::Submit);
        assert_eq!(
            form_action(&pairs(&[("action", "add:oibs")])).unwrap(),
            FormAction::AddEntry("oibs".to_string())
        );
        assert!(form_action(&pairs(&[("action", "explode")])).is_err());
    }
}
