use serde::{Deserialize, Serialize};

use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec, RelatedLink};
use crate::domain::fields::{FieldSpec, LookupSource, CATEGORY_TYPES, SEXES};
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(default)]
    pub tournament_id: i64,
    pub name: Option<String>,
    pub club_name: Option<String>,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
    pub age_limit: Option<String>,
    pub sex_limit: Option<String>,
}

impl Entity for Tournament {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Tournament,
        collection: "tournaments",
        parent: None,
        noun: "Tournament",
        title: "Tournaments",
        fields: &[
            FieldSpec::text("name", "Tournament name", ""),
            FieldSpec::choice("type", "Type", CATEGORY_TYPES),
            FieldSpec::text("ageLimit", "Age limit", "Digits only"),
            FieldSpec::choice("sexLimit", "Sex limit", SEXES),
            FieldSpec::lookup("clubName", "Hosting club", LookupSource::Clubs, ""),
        ],
        rules: RuleSet {
            required: &["name", "type", "clubName"],
            required_message: "Tournament name, type and hosting club are required!",
            formats: &[FormatRule::new(
                "ageLimit",
                Format::Digits,
                "Invalid age limit format!",
            )],
        },
        filters: &[
            FilterSpec::Text {
                key: "name",
                label: "Name",
            },
            FilterSpec::Text {
                key: "clubName",
                label: "Club",
            },
            FilterSpec::Text {
                key: "ageLimit",
                label: "Age limit",
            },
            FilterSpec::Choice {
                key: "sexLimit",
                label: "Sex limit",
                choices: SEXES,
            },
            FilterSpec::Choice {
                key: "type",
                label: "Type",
                choices: CATEGORY_TYPES,
            },
        ],
        sort_keys: &[
            Column::new("name", "Name"),
            Column::new("clubName", "Club"),
            Column::new("type", "Type"),
        ],
        columns: &[
            Column::new("name", "Name"),
            Column::new("clubName", "Club"),
            Column::new("type", "Type"),
            Column::new("ageLimit", "Age limit"),
            Column::new("sexLimit", "Sex limit"),
        ],
        display: &[
            Column::new("name", "Name"),
            Column::new("clubName", "Hosting club"),
            Column::new("type", "Type"),
            Column::new("ageLimit", "Age limit"),
            Column::new("sexLimit", "Sex limit"),
        ],
        related: &[RelatedLink::new("matches", "Matches")],
        history: None,
    };

    fn id(&self) -> i64 {
        self.tournament_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::opt_text(self.name.as_ref()),
            "clubName" => FieldValue::opt_text(self.club_name.as_ref()),
            "type" => FieldValue::opt_text(self.category_type.as_ref()),
            "ageLimit" => FieldValue::opt_text(self.age_limit.as_ref()),
            "sexLimit" => FieldValue::opt_text(self.sex_limit.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Tournament {}", self.tournament_id))
    }
}
