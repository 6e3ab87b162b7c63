//! Scalar view of record fields used by filtering, sorting and display.

use std::cmp::Ordering;

/// A single field of a record, flattened to what the list and detail views need.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Absent,
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn opt_text(value: Option<&String>) -> Self {
        match value {
            Some(v) => FieldValue::Text(v.clone()),
            None => FieldValue::Absent,
        }
    }

    pub fn opt_number<N: Into<f64> + Copy>(value: Option<N>) -> Self {
        match value {
            Some(n) => FieldValue::Number(n.into()),
            None => FieldValue::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    /// Display string, `None` when there is nothing to show.
    pub fn display(&self) -> Option<String> {
        match self {
            FieldValue::Absent => None,
            FieldValue::Text(s) if s.is_empty() => None,
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::List(items) if items.is_empty() => None,
            FieldValue::List(items) => Some(items.join(", ")),
        }
    }

    /// Case-insensitive substring match against the display string.
    pub fn contains_ci(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        match self {
            FieldValue::List(items) => items.iter().any(|i| i.to_lowercase().contains(&needle)),
            other => other
                .display()
                .map(|s| s.to_lowercase().contains(&needle))
                .unwrap_or(false),
        }
    }

    /// Exact match used by enumeration (checkbox) filters.
    pub fn equals(&self, candidate: &str) -> bool {
        match self {
            FieldValue::Text(s) => s == candidate,
            FieldValue::Number(n) => format_number(*n) == candidate,
            FieldValue::List(items) => items.iter().any(|i| i == candidate),
            FieldValue::Absent => false,
        }
    }

    /// Total order for sorting. Absent values sort before present ones;
    /// numbers compare numerically, everything else by display string.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self.is_absent(), other.is_absent()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            _ => self
                .display()
                .unwrap_or_default()
                .cmp(&other.display().unwrap_or_default()),
        }
    }
}

/// Integers render without a fractional part (`1500`, not `1500.0`).
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
