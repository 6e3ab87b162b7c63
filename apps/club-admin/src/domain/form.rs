//! Form state for create and edit forms.
//!
//! A [`FormState`] holds the bound value of every field of one entity form.
//! All edits go through [`FormState::update`] (or the multi-value helpers),
//! so a form is a single value that can be reset, validated and turned into
//! a [`FormPayload`] without any per-field plumbing.

use thiserror::Error;

use super::fields::FieldSpec;
use super::values::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Single(String),
    Multi(Vec<String>),
}

impl Slot {
    fn blank(spec: &FieldSpec) -> Self {
        if spec.is_multi() {
            Slot::Multi(vec![String::new()])
        } else {
            Slot::Single(String::new())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("field {0} does not hold multiple values")]
    NotMultiValued(String),
    #[error("field {field} has no entry {index}")]
    EntryOutOfRange { field: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: &'static [FieldSpec],
    slots: Vec<Slot>,
}

impl FormState {
    /// Every field empty; multi-value fields start with one empty entry.
    pub fn blank(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            slots: fields.iter().map(Slot::blank).collect(),
        }
    }

    /// Build a form from submitted `(name, value)` pairs.
    ///
    /// Unknown names (buttons, hidden actions) are ignored. Repeated names
    /// accumulate for multi-value fields; for single fields the last one wins.
    pub fn from_pairs(fields: &'static [FieldSpec], pairs: &[(String, String)]) -> Self {
        let mut form = Self::blank(fields);
        let mut seen_multi = vec![false; fields.len()];

        for (name, value) in pairs {
            let Some(idx) = form.index_of(name) else {
                continue;
            };
            match &mut form.slots[idx] {
                Slot::Single(current) => *current = value.clone(),
                Slot::Multi(entries) => {
                    if !seen_multi[idx] {
                        entries.clear();
                        seen_multi[idx] = true;
                    }
                    entries.push(value.clone());
                }
            }
        }

        form
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    fn slot_mut(&mut self, key: &str) -> Result<&mut Slot, FormError> {
        let idx = self
            .index_of(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))?;
        Ok(&mut self.slots[idx])
    }

    /// Set the bound value of a field. On a multi-value field this replaces
    /// all entries with the single given value.
    pub fn update(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match self.slot_mut(key)? {
            Slot::Single(current) => *current = value,
            Slot::Multi(entries) => *entries = vec![value],
        }
        Ok(())
    }

    /// Append an empty entry to a multi-value field.
    pub fn add_entry(&mut self, key: &str) -> Result<(), FormError> {
        match self.slot_mut(key)? {
            Slot::Multi(entries) => {
                entries.push(String::new());
                Ok(())
            }
            Slot::Single(_) => Err(FormError::NotMultiValued(key.to_string())),
        }
    }

    pub fn set_entry(
        &mut self,
        key: &str,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        match self.slot_mut(key)? {
            Slot::Multi(entries) => match entries.get_mut(index) {
                Some(entry) => {
                    *entry = value.into();
                    Ok(())
                }
                None => Err(FormError::EntryOutOfRange {
                    field: key.to_string(),
                    index,
                }),
            },
            Slot::Single(_) => Err(FormError::NotMultiValued(key.to_string())),
        }
    }

    /// Bound value of a single field; empty for unknown or multi-value fields.
    pub fn value(&self, key: &str) -> &str {
        match self.index_of(key).map(|i| &self.slots[i]) {
            Some(Slot::Single(v)) => v,
            _ => "",
        }
    }

    /// Entries of a multi-value field; empty for anything else.
    pub fn entries(&self, key: &str) -> &[String] {
        match self.index_of(key).map(|i| &self.slots[i]) {
            Some(Slot::Multi(entries)) => entries,
            _ => &[],
        }
    }

    /// All values bound to a key, whatever the field kind.
    pub fn values_of(&self, key: &str) -> Vec<&str> {
        match self.index_of(key).map(|i| &self.slots[i]) {
            Some(Slot::Single(v)) => vec![v.as_str()],
            Some(Slot::Multi(entries)) => entries.iter().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// A single field is blank when empty; a multi-value field when it has
    /// no non-empty entry. Unknown fields count as blank.
    pub fn is_blank(&self, key: &str) -> bool {
        match self.index_of(key).map(|i| &self.slots[i]) {
            Some(Slot::Single(v)) => v.is_empty(),
            Some(Slot::Multi(entries)) => entries.iter().all(|e| e.is_empty()),
            None => true,
        }
    }

    pub fn is_pristine(&self) -> bool {
        self.fields.iter().all(|f| self.is_blank(f.key))
    }

    pub fn reset(&mut self) {
        self.slots = self.fields.iter().map(Slot::blank).collect();
    }

    /// Copy current record values into the bound values.
    pub fn seed_from(&mut self, current: impl Fn(&str) -> FieldValue) {
        for (spec, slot) in self.fields.iter().zip(self.slots.iter_mut()) {
            match (current(spec.key), slot) {
                (FieldValue::List(items), Slot::Multi(entries)) if !items.is_empty() => {
                    *entries = items;
                }
                (value, Slot::Single(v)) => {
                    if let Some(display) = value.display() {
                        *v = display;
                    }
                }
                _ => {}
            }
        }
    }

    /// Ordered payload: fields in declaration order, blank multi entries
    /// dropped, optional scope field (e.g. `clubId`) appended last.
    pub fn to_payload(&self, scope_field: Option<(&str, String)>) -> FormPayload {
        let mut payload = FormPayload::default();
        for (spec, slot) in self.fields.iter().zip(self.slots.iter()) {
            match slot {
                Slot::Single(v) => payload.push(spec.key, v.clone()),
                Slot::Multi(entries) => {
                    for entry in entries.iter().filter(|e| !e.is_empty()) {
                        payload.push(spec.key, entry.clone());
                    }
                }
            }
        }
        if let Some((key, value)) = scope_field {
            payload.push(key, value);
        }
        payload
    }
}

/// Ordered multipart body: `(name, value)` parts, repeated names allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    parts: Vec<(String, String)>,
}

impl FormPayload {
    pub fn push(&mut self, name: &str, value: String) {
        self.parts.push((name.to_string(), value));
    }

    pub fn parts(&self) -> &[(String, String)] {
        &self.parts
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::FieldSpec;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::text("agenda", "Agenda", ""),
        FieldSpec::multi("oibs", "Attendees", None, ""),
    ];

    #[test]
    fn update_rejects_unknown_fields() {
        let mut form = FormState::blank(FIELDS);
        assert_eq!(
            form.update("nope", "x"),
            Err(FormError::UnknownField("nope".to_string()))
        );
        form.update("agenda", "Budget").unwrap();
        assert_eq!(form.value("agenda"), "Budget");
    }

    #[test]
    fn multi_field_blank_until_one_entry_filled() {
        let mut form = FormState::blank(FIELDS);
        assert!(form.is_blank("oibs"));
        form.add_entry("oibs").unwrap();
        assert_eq!(form.entries("oibs").len(), 2);
        assert!(form.is_blank("oibs"));
        form.set_entry("oibs", 1, "12345678901").unwrap();
        assert!(!form.is_blank("oibs"));
    }

    #[test]
    fn payload_keeps_order_and_drops_blank_entries() {
        let pairs = vec![
            ("oibs".to_string(), "12345678901".to_string()),
            ("action".to_string(), "submit".to_string()),
            ("oibs".to_string(), String::new()),
            ("agenda".to_string(), "Budget".to_string()),
            ("oibs".to_string(), "10987654321".to_string()),
        ];
        let form = FormState::from_pairs(FIELDS, &pairs);
        let payload = form.to_payload(Some(("clubId", "4".to_string())));
        let names: Vec<&str> = payload.parts().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["agenda", "oibs", "oibs", "clubId"]);
        assert_eq!(payload.get_all("oibs"), vec!["12345678901", "10987654321"]);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = FormState::blank(FIELDS);
        form.update("agenda", "Budget").unwrap();
        form.update("oibs", "12345678901").unwrap();
        form.reset();
        assert!(form.is_pristine());
        assert_eq!(form.entries("oibs"), &[String::new()]);
    }
}
