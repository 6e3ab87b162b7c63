//! Client-side filtering and sorting of a fetched collection.

use std::collections::{BTreeMap, BTreeSet};

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::entity::{Entity, EntitySpec, FilterSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Current sort criteria and direction.
///
/// Selecting a criteria always flips the direction as well, even when the
/// same criteria is selected again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    criteria: &'static str,
    order: SortOrder,
}

impl SortState {
    /// First sort key of the entity, ascending.
    pub fn for_spec(spec: &EntitySpec) -> Self {
        Self {
            criteria: spec.sort_keys.first().map(|c| c.key).unwrap_or(""),
            order: SortOrder::Asc,
        }
    }

    pub fn criteria(&self) -> &'static str {
        self.criteria
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Switch criteria (unknown keys are ignored) and flip the order.
    pub fn select(&mut self, spec: &EntitySpec, key: &str) {
        if let Some(column) = spec.sort_keys.iter().find(|c| c.key == key) {
            self.criteria = column.key;
            self.order = self.order.flipped();
        }
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.flipped();
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }
}

/// Active filter values keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    text: BTreeMap<&'static str, String>,
    choices: BTreeMap<&'static str, BTreeSet<String>>,
}

impl FilterSet {
    pub fn set_text(&mut self, spec: &EntitySpec, key: &str, value: impl Into<String>) {
        let value = value.into();
        for filter in spec.filters {
            if let FilterSpec::Text { key: k, .. } = filter {
                if *k == key {
                    if value.is_empty() {
                        self.text.remove(k);
                    } else {
                        self.text.insert(*k, value);
                    }
                    return;
                }
            }
        }
    }

    pub fn toggle_choice(&mut self, spec: &EntitySpec, key: &str, value: &str) {
        for filter in spec.filters {
            if let FilterSpec::Choice { key: k, choices, .. } = filter {
                if *k == key && choices.iter().any(|c| c.value == value) {
                    let selected = self.choices.entry(*k).or_default();
                    if !selected.remove(value) {
                        selected.insert(value.to_string());
                    }
                    if selected.is_empty() {
                        self.choices.remove(k);
                    }
                    return;
                }
            }
        }
    }

    pub fn text(&self, key: &str) -> &str {
        self.text.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.choices
            .get(key)
            .map(|s| s.contains(value))
            .unwrap_or(false)
    }

    /// All active filters hold for the record.
    pub fn matches<E: Entity>(&self, record: &E) -> bool {
        self.text
            .iter()
            .all(|(key, needle)| record.field(key).contains_ci(needle))
            && self.choices.iter().all(|(key, selected)| {
                let value = record.field(key);
                selected.iter().any(|candidate| value.equals(candidate))
            })
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.choices.is_empty()
    }
}

/// Filter and sort state of a list page, round-tripped through the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: FilterSet,
    pub sort: SortState,
}

impl ListQuery {
    pub fn new(spec: &EntitySpec) -> Self {
        Self {
            filters: FilterSet::default(),
            sort: SortState::for_spec(spec),
        }
    }

    /// Parse `filter.<key>`, `choice.<key>`, `sort` and `order` pairs.
    /// Unknown names and values are ignored.
    pub fn from_pairs(spec: &EntitySpec, pairs: &[(String, String)]) -> Self {
        let mut query = Self::new(spec);
        for (name, value) in pairs {
            if let Some(key) = name.strip_prefix("filter.") {
                query.filters.set_text(spec, key, value.as_str());
            } else if let Some(key) = name.strip_prefix("choice.") {
                if !query.filters.is_selected(key, value) {
                    query.filters.toggle_choice(spec, key, value);
                }
            } else if name == "sort" {
                if let Some(column) = spec.sort_keys.iter().find(|c| c.key == value) {
                    query.sort.criteria = column.key;
                }
            } else if name == "order" {
                if let Some(order) = SortOrder::parse(value) {
                    query.sort.set_order(order);
                }
            }
        }
        query
    }

    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        for (key, value) in &self.filters.text {
            parts.push(format!("filter.{key}={}", encode(value)));
        }
        for (key, selected) in &self.filters.choices {
            for value in selected {
                parts.push(format!("choice.{key}={}", encode(value)));
            }
        }
        parts.push(format!("sort={}", self.sort.criteria));
        parts.push(format!("order={}", self.sort.order.as_str()));
        parts.join("&")
    }

    /// Query string after selecting `key` as criteria (which also flips order).
    pub fn select_link(&self, spec: &EntitySpec, key: &str) -> String {
        let mut next = self.clone();
        next.sort.select(spec, key);
        next.to_query_string()
    }

    pub fn toggle_order_link(&self) -> String {
        let mut next = self.clone();
        next.sort.toggle_order();
        next.to_query_string()
    }

    /// Filter (all active filters ANDed) then stable-sort.
    pub fn apply<'a, E: Entity>(&self, records: &'a [E]) -> Vec<&'a E> {
        let mut rows: Vec<&E> = records.iter().filter(|r| self.filters.matches(*r)).collect();
        let criteria = self.sort.criteria;
        let order = self.sort.order;
        rows.sort_by(|a, b| {
            let ord = a.field(criteria).compare(&b.field(criteria));
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        rows
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
