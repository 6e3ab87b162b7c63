//! Generic list page: fetched collection, filters, sort and create form.

use tracing::warn;

use super::lookups::Lookups;
use super::notice::{Notice, ScrollTarget};
use super::page::{
    display_value, form_ctx, FilterCtx, FormCtx, LinkCtx, ListPage, OptionCtx, RowCtx, SortLinkCtx,
};
use super::FormSubmission;
use crate::client::fetch::fetch_collection;
use crate::client::{submit, ApiClient, SubmitOutcome, SubmitRequest};
use crate::domain::entity::FilterSpec;
use crate::domain::{Entity, FormError, FormState, ListQuery, Scope, ValidationError};

pub struct EntityListView<E: Entity> {
    scope: Scope,
    records: Vec<E>,
    loaded: bool,
    query: ListQuery,
    form: FormState,
    form_error: Option<ValidationError>,
    notices: Vec<Notice>,
    scroll: ScrollTarget,
    lookups: Lookups,
}

impl<E: Entity> EntityListView<E> {
    /// Empty view; nothing fetched yet.
    pub fn new(scope: Scope, query: ListQuery) -> Self {
        Self {
            scope,
            records: Vec::new(),
            loaded: false,
            query,
            form: FormState::blank(E::SPEC.fields),
            form_error: None,
            notices: Vec::new(),
            scroll: ScrollTarget::None,
            lookups: Lookups::default(),
        }
    }

    /// Fetch the collection and picker options once.
    pub async fn mount(api: &dyn ApiClient, scope: Scope, query: ListQuery) -> Self {
        let mut view = Self::new(scope, query);
        view.refresh(api).await;
        view.lookups = Lookups::load(api, E::SPEC, scope).await;
        view
    }

    /// Refetch the collection. A failed fetch is logged and leaves the
    /// list empty.
    pub async fn refresh(&mut self, api: &dyn ApiClient) {
        let spec = E::SPEC;
        match fetch_collection::<E>(api, self.scope).await {
            Ok(records) => {
                self.records = records;
                self.loaded = true;
            }
            Err(e) => {
                warn!(
                    entity = %spec.kind,
                    path = %spec.collection_path(self.scope),
                    error = %e,
                    "list fetch failed"
                );
                self.records.clear();
                self.loaded = false;
            }
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// Records passing every active filter, in sort order.
    pub fn rows(&self) -> Vec<&E> {
        self.query.apply(&self.records)
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut ListQuery {
        &mut self.query
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

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn scroll(&self) -> ScrollTarget {
        self.scroll
    }

    pub fn set_lookups(&mut self, lookups: Lookups) {
        self.lookups = lookups;
    }

    pub fn update_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.form.update(key, value)
    }

    pub fn add_entry(&mut self, key: &str) -> Result<(), FormError> {
        self.form.add_entry(key)
    }

    /// Replace the bound values with a submitted browser form.
    pub fn bind(&mut self, form: FormState) {
        self.form = form;
    }

    pub fn cancel(&mut self) {
        self.form.reset();
        self.form_error = None;
    }

    /// Validate, POST and acknowledge.
    ///
    /// A validation failure issues no request. On success the form is reset
    /// and the collection refetched; otherwise the form is kept as is.
    pub async fn submit(&mut self, api: &dyn ApiClient) -> FormSubmission {
        let spec = E::SPEC;
        self.form_error = None;

        if let Err(e) = spec.rules.check(&self.form) {
            self.form_error = Some(e.clone());
            self.scroll = ScrollTarget::FormError;
            return FormSubmission::Invalid(e);
        }

        let payload = self.form.to_payload(spec.scope_field(self.scope));
        let request = SubmitRequest::post(spec.collection_path(self.scope), payload);
        let outcome = submit(api, request).await;

        match &outcome {
            SubmitOutcome::Accepted => {
                self.notices.push(Notice::success(spec.created_message()));
                self.form.reset();
                self.scroll = ScrollTarget::Top;
                self.refresh(api).await;
            }
            SubmitOutcome::Rejected { status } => {
                self.notices
                    .push(Notice::failure(spec.create_rejected_message(*status)));
            }
            SubmitOutcome::Failed { .. } => {
                self.notices.push(Notice::failure(spec.create_error_message()));
            }
        }

        FormSubmission::Sent(outcome)
    }

    pub fn page(&self) -> ListPage {
        let spec = E::SPEC;
        let path = spec.collection_path(self.scope);

        let rows = self
            .rows()
            .into_iter()
            .map(|record| RowCtx {
                href: spec.item_path(self.scope, record.id()),
                cells: spec
                    .columns
                    .iter()
                    .map(|c| display_value(spec, c.key, &record.field(c.key)))
                    .collect(),
            })
            .collect();

        let filters = spec
            .filters
            .iter()
            .map(|filter| match filter {
                FilterSpec::Text { key, label } => FilterCtx {
                    key: *key,
                    label: *label,
                    kind: "text",
                    value: self.query.filters.text(key).to_string(),
                    options: Vec::new(),
                },
                FilterSpec::Choice {
                    key,
                    label,
                    choices,
                } => FilterCtx {
                    key: *key,
                    label: *label,
                    kind: "choice",
                    value: String::new(),
                    options: choices
                        .iter()
                        .map(|c| OptionCtx {
                            value: c.value.to_string(),
                            label: c.label.to_string(),
                            selected: self.query.filters.is_selected(key, c.value),
                        })
                        .collect(),
                },
            })
            .collect();

        let sort_links = spec
            .sort_keys
            .iter()
            .map(|c| SortLinkCtx {
                label: c.label,
                href: format!("{path}?{}", self.query.select_link(spec, c.key)),
                active: c.key == self.query.sort.criteria(),
            })
            .collect();

        let parent = match (spec.parent, self.scope.parent_id) {
            (Some(parent), Some(parent_id)) => Some(LinkCtx {
                label: parent.label.to_string(),
                href: format!("/{}/{}", parent.collection, parent_id),
            }),
            _ => None,
        };

        ListPage {
            title: spec.title,
            path: path.clone(),
            parent,
            headers: spec.columns.iter().map(|c| c.label).collect(),
            rows,
            loaded: self.loaded,
            filters,
            sort_links,
            sort: self.query.sort.criteria(),
            order: self.query.sort.order().as_str(),
            toggle_order_href: format!("{path}?{}", self.query.toggle_order_link()),
            form: FormCtx {
                action: format!("{path}?{}", self.query.to_query_string()),
                submit_label: "Add",
                fields: form_ctx(spec, &self.form, &self.lookups, |_| None),
                error: self.form_error.as_ref().map(|e| e.message().to_string()),
                hidden: Vec::new(),
            },
            notices: self.notices.clone(),
            scroll: self.scroll,
        }
    }
}
