//! Generic detail page: read-only record, change form and delete confirmation.

use tracing::warn;

use super::lookups::Lookups;
use super::notice::{Notice, ScrollTarget};
use super::page::{
    display_value, form_ctx, AttributeCtx, DetailPage, FormCtx, HistoryCtx, LinkCtx,
};
use super::{FormSubmission, ViewError};
use crate::client::fetch::fetch_item;
use crate::client::{submit, ApiClient, SubmitOutcome, SubmitRequest};
use crate::domain::{
    DetailMode, Entity, FieldValue, FormError, FormState, Scope, ValidationError,
};

pub struct EntityDetailView<E: Entity> {
    scope: Scope,
    id: i64,
    record: Option<E>,
    mode: DetailMode,
    form: FormState,
    prefill: bool,
    form_error: Option<ValidationError>,
    notices: Vec<Notice>,
    scroll: ScrollTarget,
    navigate_to: Option<String>,
    lookups: Lookups,
}

impl<E: Entity> EntityDetailView<E> {
    pub fn new(scope: Scope, id: i64, prefill: bool) -> Self {
        Self {
            scope,
            id,
            record: None,
            mode: DetailMode::View,
            form: FormState::blank(E::SPEC.fields),
            prefill,
            form_error: None,
            notices: Vec::new(),
            scroll: ScrollTarget::None,
            navigate_to: None,
            lookups: Lookups::default(),
        }
    }

    /// Fetch the record and picker options. A failed fetch is logged and the
    /// page renders without the record.
    pub async fn mount(api: &dyn ApiClient, scope: Scope, id: i64, prefill: bool) -> Self {
        let mut view = Self::new(scope, id, prefill);
        match fetch_item::<E>(api, scope, id).await {
            Ok(record) => view.record = Some(record),
            Err(e) => {
                let spec = E::SPEC;
                warn!(
                    entity = %spec.kind,
                    path = %spec.item_path(scope, id),
                    error = %e,
                    "detail fetch failed"
                );
            }
        }
        view.lookups = Lookups::load(api, E::SPEC, scope).await;
        view
    }

    pub fn record(&self) -> Option<&E> {
        self.record.as_ref()
    }

    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    /// Pick one of the two radio options; the other is implicitly deselected.
    pub fn select_mode(&mut self, mode: DetailMode) {
        self.mode = mode;
        if mode == DetailMode::Change && self.prefill && self.form.is_pristine() {
            if let Some(record) = &self.record {
                self.form.seed_from(|key| record.field(key));
            }
        }
    }

    pub fn shows_edit_form(&self) -> bool {
        self.mode.shows_edit_form()
    }

    pub fn shows_delete_confirmation(&self) -> bool {
        self.mode.shows_delete_confirmation()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_error(&self) -> Option<&ValidationError> {
        self.form_error.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Route to follow after a successful update or delete.
    pub fn navigate_to(&self) -> Option<&str> {
        self.navigate_to.as_deref()
    }

    pub fn update_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.form.update(key, value)
    }

    pub fn add_entry(&mut self, key: &str) -> Result<(), FormError> {
        self.form.add_entry(key)
    }

    pub fn bind(&mut self, form: FormState) {
        self.form = form;
    }

    pub fn cancel(&mut self) {
        self.form.reset();
        self.form_error = None;
    }

    /// Current server values shown as input placeholders.
    pub fn placeholder(&self, key: &str) -> Option<String> {
        let record = self.record.as_ref()?;
        record.field(key).display()
    }

    /// Items of the set-valued history attribute, empty when absent.
    pub fn history(&self) -> Vec<String> {
        match (E::SPEC.history, &self.record) {
            (Some(column), Some(record)) => match record.field(column.key) {
                FieldValue::List(items) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn list_path(&self) -> String {
        E::SPEC.collection_path(self.scope)
    }

    /// Validate and PUT the edit form. On success the view navigates to
    /// the owning list.
    pub async fn submit_edit(&mut self, api: &dyn ApiClient) -> Result<FormSubmission, ViewError> {
        if !self.mode.shows_edit_form() {
            return Err(ViewError::ChangeModeRequired);
        }
        let spec = E::SPEC;
        self.form_error = None;

        if let Err(e) = spec.rules.check(&self.form) {
            self.form_error = Some(e.clone());
            self.scroll = ScrollTarget::FormError;
            return Ok(FormSubmission::Invalid(e));
        }

        let payload = self.form.to_payload(spec.scope_field(self.scope));
        let request = SubmitRequest::put(spec.item_path(self.scope, self.id), payload);
        let outcome = submit(api, request).await;

        match &outcome {
            SubmitOutcome::Accepted => {
                self.notices.push(Notice::success(spec.updated_message()));
                self.navigate_to = Some(self.list_path());
            }
            SubmitOutcome::Rejected { status } => {
                self.notices
                    .push(Notice::failure(spec.update_rejected_message(*status)));
            }
            SubmitOutcome::Failed { .. } => {
                self.notices.push(Notice::failure(spec.update_error_message()));
            }
        }

        Ok(FormSubmission::Sent(outcome))
    }

    /// DELETE the record. On success the view navigates to the owning list;
    /// otherwise it stays with a failure notice.
    pub async fn confirm_delete(&mut self, api: &dyn ApiClient) -> Result<SubmitOutcome, ViewError> {
        if !self.mode.shows_delete_confirmation() {
            return Err(ViewError::DeleteModeRequired);
        }
        let spec = E::SPEC;
        let outcome = submit(api, SubmitRequest::delete(spec.item_path(self.scope, self.id))).await;

        match &outcome {
            SubmitOutcome::Accepted => {
                self.notices.push(Notice::success(spec.deleted_message()));
                self.navigate_to = Some(self.list_path());
            }
            SubmitOutcome::Rejected { status } => {
                self.notices
                    .push(Notice::failure(spec.delete_rejected_message(*status)));
            }
            SubmitOutcome::Failed { .. } => {
                self.notices.push(Notice::failure(spec.delete_error_message()));
            }
        }

        Ok(outcome)
    }

    pub fn page(&self) -> DetailPage {
        let spec = E::SPEC;
        let path = spec.item_path(self.scope, self.id);

        let attributes = match &self.record {
            Some(record) => spec
                .display
                .iter()
                .filter_map(|c| {
                    let value = record.field(c.key);
                    if value.is_absent() {
                        return None;
                    }
                    Some(AttributeCtx {
                        label: c.label,
                        value: display_value(spec, c.key, &value),
                    })
                })
                .collect(),
            None => Vec::new(),
        };

        let history = spec.history.and_then(|column| {
            let items = self.history();
            if items.is_empty() {
                None
            } else {
                Some(HistoryCtx {
                    label: column.label,
                    items,
                })
            }
        });

        let related = spec
            .related
            .iter()
            .map(|link| LinkCtx {
                label: link.label.to_string(),
                href: format!("{path}/{}", link.segment),
            })
            .collect();

        let form = self.mode.shows_edit_form().then(|| FormCtx {
            action: path.clone(),
            submit_label: "Save changes",
            fields: form_ctx(spec, &self.form, &self.lookups, |key| self.placeholder(key)),
            error: self.form_error.as_ref().map(|e| e.message().to_string()),
            hidden: vec![("mode", self.mode.as_str().to_string())],
        });

        DetailPage {
            title: self
                .record
                .as_ref()
                .map(|r| r.title())
                .unwrap_or_else(|| format!("{} {}", spec.noun, self.id)),
            noun: spec.noun,
            found: self.record.is_some(),
            list: LinkCtx {
                label: spec.title.to_string(),
                href: self.list_path(),
            },
            attributes,
            history,
            related,
            mode: self.mode.as_str(),
            form,
            delete_action: self
                .mode
                .shows_delete_confirmation()
                .then(|| format!("{path}/delete")),
            notices: self.notices.clone(),
            scroll: self.scroll,
            path,
        }
    }
}
