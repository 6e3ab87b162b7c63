use serde::{Deserialize, Serialize};

use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec, ParentSpec};
use crate::domain::fields::{FieldSpec, CATEGORY_TYPES, STAGES};
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub match_id: i64,
    pub match_timestamp: Option<String>,
    pub match_result: Option<String>,
    pub duration: Option<String>,
    pub stage: Option<String>,
    pub opponent1: Option<String>,
    pub opponent2: Option<String>,
    pub court_name: Option<String>,
    pub tournament_name: Option<String>,
    pub club_id: Option<i64>,
    pub category_type: Option<String>,
    pub age_limit: Option<String>,
    pub sex_limit: Option<String>,
    /// 1 or 2, the winning opponent.
    pub winner: Option<i32>,
}

impl Entity for Match {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Match,
        collection: "matches",
        parent: Some(ParentSpec {
            collection: "tournaments",
            id_field: "tournamentId",
            label: "Tournament",
        }),
        noun: "Match",
        title: "Matches",
        fields: &[
            FieldSpec::text("tournamentName", "Tournament", ""),
            FieldSpec::choice("categoryType", "Category", CATEGORY_TYPES),
            FieldSpec::text("matchTimestamp", "Date and time", "YYYY-MM-DDTHH:MM"),
            FieldSpec::text("matchResult", "Result", "e.g. 3-1"),
            FieldSpec::text("duration", "Duration", "HH:MM"),
            FieldSpec::choice("stage", "Stage", STAGES),
            FieldSpec::text("opponent1", "First opponent", ""),
            FieldSpec::text("opponent2", "Second opponent", ""),
            FieldSpec::text("courtName", "Court", ""),
        ],
        rules: RuleSet {
            required: &[
                "tournamentName",
                "categoryType",
                "matchTimestamp",
                "matchResult",
                "duration",
                "stage",
                "opponent1",
                "opponent2",
                "courtName",
            ],
            required_message: "All match fields are required!",
            formats: &[FormatRule::new(
                "matchResult",
                Format::MatchResult,
                "Invalid match result! Allowed results are 3-0, 3-1, 3-2, 0-3, 1-3, 2-3, 2-0, 2-1, 1-2, 1-0, 0-2 and 0-1.",
            )],
        },
        filters: &[
            FilterSpec::Text {
                key: "opponent1",
                label: "First opponent",
            },
            FilterSpec::Text {
                key: "opponent2",
                label: "Second opponent",
            },
            FilterSpec::Choice {
                key: "stage",
                label: "Stage",
                choices: STAGES,
            },
        ],
        sort_keys: &[
            Column::new("matchTimestamp", "Date and time"),
            Column::new("stage", "Stage"),
        ],
        columns: &[
            Column::new("matchTimestamp", "Date and time"),
            Column::new("stage", "Stage"),
            Column::new("opponent1", "First opponent"),
            Column::new("opponent2", "Second opponent"),
            Column::new("matchResult", "Result"),
        ],
        display: &[
            Column::new("tournamentName", "Tournament"),
            Column::new("categoryType", "Category"),
            Column::new("matchTimestamp", "Date and time"),
            Column::new("matchResult", "Result"),
            Column::new("duration", "Duration"),
            Column::new("stage", "Stage"),
            Column::new("opponent1", "First opponent"),
            Column::new("opponent2", "Second opponent"),
            Column::new("courtName", "Court"),
            Column::new("winner", "Winner"),
        ],
        related: &[],
        history: None,
    };

    fn id(&self) -> i64 {
        self.match_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "matchTimestamp" => FieldValue::opt_text(self.match_timestamp.as_ref()),
            "matchResult" => FieldValue::opt_text(self.match_result.as_ref()),
            "duration" => FieldValue::opt_text(self.duration.as_ref()),
            "stage" => FieldValue::opt_text(self.stage.as_ref()),
            "opponent1" => FieldValue::opt_text(self.opponent1.as_ref()),
            "opponent2" => FieldValue::opt_text(self.opponent2.as_ref()),
            "courtName" => FieldValue::opt_text(self.court_name.as_ref()),
            "tournamentName" => FieldValue::opt_text(self.tournament_name.as_ref()),
            "categoryType" => FieldValue::opt_text(self.category_type.as_ref()),
            "ageLimit" => FieldValue::opt_text(self.age_limit.as_ref()),
            "sexLimit" => FieldValue::opt_text(self.sex_limit.as_ref()),
            "winner" => self.winner_name().map_or(FieldValue::Absent, FieldValue::text),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        match (&self.opponent1, &self.opponent2) {
            (Some(a), Some(b)) => format!("{a} vs {b}"),
            _ => format!("Match {}", self.match_id),
        }
    }
}

impl Match {
    pub fn winner_name(&self) -> Option<String> {
        match self.winner {
            Some(1) => self.opponent1.clone(),
            Some(2) => self.opponent2.clone(),
            _ => None,
        }
    }
}
