use serde::{Deserialize, Serialize};

use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec, ParentSpec};
use crate::domain::fields::{FieldSpec, LookupSource};
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    #[serde(default)]
    pub training_id: i64,
    pub training_timestamp: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub coach: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub players: Vec<String>,
}

impl Entity for Training {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Training,
        collection: "training-sessions",
        parent: Some(ParentSpec {
            collection: "coaches",
            id_field: "coachId",
            label: "Coach",
        }),
        noun: "Training",
        title: "Training sessions",
        fields: &[
            FieldSpec::text("trainingTimestamp", "Date and time", "YYYY-MM-DDTHH:MM"),
            FieldSpec::text("duration", "Duration", "HH:MM"),
            FieldSpec::text("description", "Description", ""),
            FieldSpec::text("notes", "Notes", ""),
            FieldSpec::text("coach", "Coach OIB", "11 digits"),
            FieldSpec::multi(
                "players",
                "Player OIB",
                Some(LookupSource::CoachPlayers),
                "11 digits",
            ),
        ],
        rules: RuleSet {
            required: &["trainingTimestamp", "description", "players", "coach"],
            required_message:
                "Training date and time, description, players and coach are required!",
            formats: &[FormatRule::new("players", Format::Oib, "Invalid OIB format!")],
        },
        filters: &[FilterSpec::Text {
            key: "description",
            label: "Description",
        }],
        sort_keys: &[
            Column::new("trainingTimestamp", "Date and time"),
            Column::new("duration", "Duration"),
        ],
        columns: &[
            Column::new("trainingTimestamp", "Date and time"),
            Column::new("duration", "Duration"),
            Column::new("description", "Description"),
        ],
        display: &[
            Column::new("trainingTimestamp", "Date and time"),
            Column::new("duration", "Duration"),
            Column::new("description", "Description"),
            Column::new("notes", "Notes"),
            Column::new("coach", "Coach"),
        ],
        related: &[],
        history: Some(Column::new("players", "Players")),
    };

    fn id(&self) -> i64 {
        self.training_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "trainingTimestamp" => FieldValue::opt_text(self.training_timestamp.as_ref()),
            "duration" => FieldValue::opt_text(self.duration.as_ref()),
            "description" => FieldValue::opt_text(self.description.as_ref()),
            "notes" => FieldValue::opt_text(self.notes.as_ref()),
            "coach" => FieldValue::opt_text(self.coach.as_ref()),
            "players" => FieldValue::List(self.players.clone()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Training {}", self.training_id))
    }
}
