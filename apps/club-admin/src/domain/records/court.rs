use serde::{Deserialize, Serialize};

use super::equipment::CLUB_PARENT;
use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec};
use crate::domain::fields::{FieldSpec, SURFACES};
use crate::domain::validation::RuleSet;
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    #[serde(default)]
    pub court_id: i64,
    pub name: Option<String>,
    pub club_name: Option<String>,
    pub surface: Option<String>,
}

impl Entity for Court {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Court,
        collection: "courts",
        parent: Some(CLUB_PARENT),
        noun: "Court",
        title: "Courts",
        fields: &[
            FieldSpec::text("clubName", "Club", ""),
            FieldSpec::choice("surface", "Surface", SURFACES),
            FieldSpec::text("name", "Court name", ""),
        ],
        rules: RuleSet {
            required: &["clubName", "surface", "name"],
            required_message: "Club, surface and court name are required!",
            formats: &[],
        },
        filters: &[
            FilterSpec::Text {
                key: "name",
                label: "Name",
            },
            FilterSpec::Choice {
                key: "surface",
                label: "Surface",
                choices: SURFACES,
            },
        ],
        sort_keys: &[Column::new("name", "Name"), Column::new("surface", "Surface")],
        columns: &[Column::new("name", "Name"), Column::new("surface", "Surface")],
        display: &[
            Column::new("name", "Name"),
            Column::new("surface", "Surface"),
            Column::new("clubName", "Club"),
        ],
        related: &[],
        history: None,
    };

    fn id(&self) -> i64 {
        self.court_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::opt_text(self.name.as_ref()),
            "clubName" => FieldValue::opt_text(self.club_name.as_ref()),
            "surface" => FieldValue::opt_text(self.surface.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Court {}", self.court_id))
    }
}
