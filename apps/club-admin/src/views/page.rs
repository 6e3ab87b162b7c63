//! Template contexts.
//!
//! Plain serializable snapshots of a view, so templates never reach back
//! into domain types.

use serde::Serialize;

use super::lookups::{LookupOption, Lookups};
use super::notice::{Notice, ScrollTarget};
use crate::domain::fields::{choice_label, FieldKind, FieldSpec};
use crate::domain::{EntitySpec, FieldValue, FormState};

#[derive(Debug, Serialize)]
pub struct OptionCtx {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct FieldCtx {
    pub key: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    /// `text`, `choice`, `lookup` or `multi`.
    pub kind: &'static str,
    pub required: bool,
    pub value: String,
    pub entries: Vec<String>,
    pub options: Vec<OptionCtx>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FormCtx {
    pub action: String,
    pub submit_label: &'static str,
    pub fields: Vec<FieldCtx>,
    pub error: Option<String>,
    /// Hidden inputs carried back on every post (e.g. the detail mode).
    pub hidden: Vec<(&'static str, String)>,
}

#[derive(Debug, Serialize)]
pub struct LinkCtx {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct AttributeCtx {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SortLinkCtx {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct FilterCtx {
    pub key: &'static str,
    pub label: &'static str,
    /// `text` or `choice`.
    pub kind: &'static str,
    pub value: String,
    pub options: Vec<OptionCtx>,
}

#[derive(Debug, Serialize)]
pub struct RowCtx {
    pub href: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ListPage {
    pub title: &'static str,
    pub path: String,
    pub parent: Option<LinkCtx>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<RowCtx>,
    pub loaded: bool,
    pub filters: Vec<FilterCtx>,
    pub sort_links: Vec<SortLinkCtx>,
    pub sort: &'static str,
    pub order: &'static str,
    pub toggle_order_href: String,
    pub form: FormCtx,
    pub notices: Vec<Notice>,
    pub scroll: ScrollTarget,
}

#[derive(Debug, Serialize)]
pub struct DetailPage {
    pub title: String,
    pub noun: &'static str,
    pub found: bool,
    pub path: String,
    pub list: LinkCtx,
    pub attributes: Vec<AttributeCtx>,
    pub history: Option<HistoryCtx>,
    pub related: Vec<LinkCtx>,
    pub mode: &'static str,
    pub form: Option<FormCtx>,
    pub delete_action: Option<String>,
    pub notices: Vec<Notice>,
    pub scroll: ScrollTarget,
}

#[derive(Debug, Serialize)]
pub struct HistoryCtx {
    pub label: &'static str,
    pub items: Vec<String>,
}

/// Display string for a record attribute, enumerations shown by label.
pub fn display_value(spec: &EntitySpec, key: &str, value: &FieldValue) -> String {
    let raw = value.display().unwrap_or_default();
    match spec.field(key).map(|f| f.kind) {
        Some(FieldKind::Choice(choices)) if !raw.is_empty() => choice_label(choices, &raw),
        _ => raw,
    }
}

fn kind_name(field: &FieldSpec, lookups: &Lookups) -> &'static str {
    match field.kind {
        FieldKind::Text => "text",
        FieldKind::Choice(_) => "choice",
        FieldKind::Lookup(source) if lookups.options(source).is_some() => "lookup",
        FieldKind::Lookup(_) => "text",
        FieldKind::Multi(_) => "multi",
    }
}

fn options_for(field: &FieldSpec, lookups: &Lookups, current: &str) -> Vec<OptionCtx> {
    let from_lookup = |opts: &[LookupOption]| -> Vec<OptionCtx> {
        opts.iter()
            .map(|o| OptionCtx {
                value: o.value.clone(),
                label: o.label.clone(),
                selected: o.value == current,
            })
            .collect()
    };
    match field.kind {
        FieldKind::Choice(choices) => choices
            .iter()
            .map(|c| OptionCtx {
                value: c.value.to_string(),
                label: c.label.to_string(),
                selected: c.value == current,
            })
            .collect(),
        FieldKind::Lookup(_) | FieldKind::Multi(_) => field
            .lookup_source()
            .and_then(|s| lookups.options(s))
            .map(from_lookup)
            .unwrap_or_default(),
        FieldKind::Text => Vec::new(),
    }
}

pub fn form_ctx(
    spec: &EntitySpec,
    form: &FormState,
    lookups: &Lookups,
    placeholder: impl Fn(&str) -> Option<String>,
) -> Vec<FieldCtx> {
    form.fields()
        .iter()
        .map(|field| {
            let value = form.value(field.key).to_string();
            FieldCtx {
                key: field.key,
                label: field.label,
                hint: field.hint,
                kind: kind_name(field, lookups),
                required: spec.rules.is_required(field.key),
                options: options_for(field, lookups, &value),
                entries: form.entries(field.key).to_vec(),
                placeholder: placeholder(field.key),
                value,
            }
        })
        .collect()
}
