//! Entity model, form state, validation and list logic.
//!
//! Nothing in here performs I/O; the views drive it with data fetched
//! through [`crate::client`].

pub mod detail;
pub mod entity;
pub mod fields;
pub mod form;
pub mod listing;
pub mod records;
pub mod validation;
pub mod values;

pub use detail::DetailMode;
pub use entity::{Entity, EntityKind, EntitySpec, Scope};
pub use form::{FormError, FormPayload, FormState};
pub use listing::{ListQuery, SortOrder, SortState};
pub use validation::{RuleSet, ValidationError};
pub use values::FieldValue;
