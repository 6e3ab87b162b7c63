//! Entity descriptors.
//!
//! Every managed record type is described once by a static [`EntitySpec`]:
//! where it lives on the REST surface, which fields its forms carry, how
//! those fields are validated, which list filters and sort keys it offers
//! and what it says back to the user. The list and detail views are generic
//! over [`Entity`] and read everything they need from the descriptor.

use std::fmt;

use serde::de::DeserializeOwned;

use super::fields::{Choice, FieldSpec};
use super::validation::RuleSet;
use super::values::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Club,
    Coach,
    Player,
    Pair,
    Tournament,
    Match,
    Equipment,
    Court,
    Meeting,
    Training,
    Transaction,
}

impl EntityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Club => "club",
            Self::Coach => "coach",
            Self::Player => "player",
            Self::Pair => "pair",
            Self::Tournament => "tournament",
            Self::Match => "match",
            Self::Equipment => "equipment",
            Self::Court => "court",
            Self::Meeting => "meeting",
            Self::Training => "training",
            Self::Transaction => "transaction",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owning collection of a nested entity, e.g. the club of a court.
#[derive(Debug, Clone, Copy)]
pub struct ParentSpec {
    /// REST segment of the parent collection (`clubs`, `coaches`, ...).
    pub collection: &'static str,
    /// Form part carrying the parent id on create and update.
    pub id_field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum FilterSpec {
    /// Case-insensitive substring match on the display string.
    Text {
        key: &'static str,
        label: &'static str,
    },
    /// Set membership, rendered as checkboxes.
    Choice {
        key: &'static str,
        label: &'static str,
        choices: &'static [Choice],
    },
}

impl FilterSpec {
    pub fn key(&self) -> &'static str {
        match self {
            FilterSpec::Text { key, .. } | FilterSpec::Choice { key, .. } => key,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Sub-route reachable from a record's detail page.
#[derive(Debug, Clone, Copy)]
pub struct RelatedLink {
    pub segment: &'static str,
    pub label: &'static str,
}

impl RelatedLink {
    pub const fn new(segment: &'static str, label: &'static str) -> Self {
        Self { segment, label }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EntitySpec {
    pub kind: EntityKind,
    /// REST segment of this collection, relative to the parent item if any.
    pub collection: &'static str,
    pub parent: Option<ParentSpec>,
    /// Capitalised singular used in acknowledgments ("Club", "Court").
    pub noun: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    pub rules: RuleSet,
    pub filters: &'static [FilterSpec],
    /// Sortable keys; the first one is the default criteria.
    pub sort_keys: &'static [Column],
    /// Table columns on the list page.
    pub columns: &'static [Column],
    /// Read-only attributes on the detail page.
    pub display: &'static [Column],
    pub related: &'static [RelatedLink],
    /// Set-valued attribute rendered as an ordered list on the detail page.
    pub history: Option<Column>,
}

impl EntitySpec {
    /// REST and admin path of the collection.
    pub fn collection_path(&self, scope: Scope) -> String {
        match (self.parent, scope.parent_id) {
            (Some(parent), Some(parent_id)) => {
                format!("/{}/{}/{}", parent.collection, parent_id, self.collection)
            }
            _ => format!("/{}", self.collection),
        }
    }

    pub fn item_path(&self, scope: Scope, id: i64) -> String {
        format!("{}/{}", self.collection_path(scope), id)
    }

    /// actix route pattern of the collection, with `{parent_id}` when nested.
    pub fn route_pattern(&self) -> String {
        match self.parent {
            Some(parent) => format!("/{}/{{parent_id}}/{}", parent.collection, self.collection),
            None => format!("/{}", self.collection),
        }
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Parent id part appended to create and update payloads.
    pub fn scope_field(&self, scope: Scope) -> Option<(&'static str, String)> {
        match (self.parent, scope.parent_id) {
            (Some(parent), Some(parent_id)) => Some((parent.id_field, parent_id.to_string())),
            _ => None,
        }
    }

    pub fn created_message(&self) -> String {
        format!("{} added successfully!", self.noun)
    }

    pub fn create_rejected_message(&self, status: u16) -> String {
        format!("{} was not added! Status {status}", self.noun)
    }

    pub fn create_error_message(&self) -> String {
        format!("Error while adding {}!", self.noun.to_lowercase())
    }

    pub fn updated_message(&self) -> String {
        format!("{} details updated successfully!", self.noun)
    }

    pub fn update_rejected_message(&self, status: u16) -> String {
        format!("{} details were not updated! Status {status}", self.noun)
    }

    pub fn update_error_message(&self) -> String {
        format!("Error while updating {} details!", self.noun.to_lowercase())
    }

    pub fn deleted_message(&self) -> String {
        format!("{} deleted successfully!", self.noun)
    }

    pub fn delete_rejected_message(&self, status: u16) -> String {
        format!("{} was not deleted! Status {status}", self.noun)
    }

    pub fn delete_error_message(&self) -> String {
        format!("Error while deleting {}!", self.noun.to_lowercase())
    }
}

/// Parent id of the current route, `None` for top-level collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scope {
    pub parent_id: Option<i64>,
}

impl Scope {
    pub const TOP: Scope = Scope { parent_id: None };

    pub fn nested(parent_id: i64) -> Self {
        Self {
            parent_id: Some(parent_id),
        }
    }
}

/// A record type the admin can list, show, create, edit and delete.
pub trait Entity: DeserializeOwned + Clone + Send + Sync + 'static {
    const SPEC: &'static EntitySpec;

    fn id(&self) -> i64;

    /// Attribute value by wire name; unknown keys are `Absent`.
    fn field(&self, key: &str) -> FieldValue;

    fn title(&self) -> String;
}
