use serde::{Deserialize, Serialize};

use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec, RelatedLink};
use crate::domain::fields::{FieldSpec, LookupSource};
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

/// A doubles partnership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    #[serde(default)]
    pub pair_id: i64,
    pub player1oib: Option<String>,
    pub player1name: Option<String>,
    pub player1surname: Option<String>,
    pub player2oib: Option<String>,
    pub player2name: Option<String>,
    pub player2surname: Option<String>,
    pub rank: Option<i32>,
    pub date_of_termination: Option<String>,
}

impl Entity for Pair {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Pair,
        collection: "doubles",
        parent: None,
        noun: "Pair",
        title: "Doubles pairs",
        fields: &[
            FieldSpec::lookup("player1oib", "First player OIB", LookupSource::Players, "11 digits"),
            FieldSpec::text("player1name", "First player name", ""),
            FieldSpec::text("player1surname", "First player surname", ""),
            FieldSpec::lookup("player2oib", "Second player OIB", LookupSource::Players, "11 digits"),
            FieldSpec::text("player2name", "Second player name", ""),
            FieldSpec::text("player2surname", "Second player surname", ""),
            FieldSpec::text("rank", "Rank", ""),
            FieldSpec::text("dateOfTermination", "Date of termination", "YYYY-MM-DD"),
        ],
        rules: RuleSet {
            required: &[
                "player1oib",
                "player1name",
                "player1surname",
                "player2oib",
                "player2name",
                "player2surname",
            ],
            required_message: "OIB, name and surname of both players are required!",
            formats: &[
                FormatRule::new("player1oib", Format::Oib, "Invalid first player OIB format!"),
                FormatRule::new("player2oib", Format::Oib, "Invalid second player OIB format!"),
            ],
        },
        filters: &[
            FilterSpec::Text {
                key: "rank",
                label: "Rank",
            },
            FilterSpec::Text {
                key: "dateOfTermination",
                label: "Date of termination",
            },
        ],
        sort_keys: &[
            Column::new("rank", "Rank"),
            Column::new("dateOfTermination", "Date of termination"),
        ],
        columns: &[
            Column::new("player1surname", "First player"),
            Column::new("player2surname", "Second player"),
            Column::new("rank", "Rank"),
            Column::new("dateOfTermination", "Terminated"),
        ],
        display: &[
            Column::new("player1oib", "First player OIB"),
            Column::new("player1name", "First player name"),
            Column::new("player1surname", "First player surname"),
            Column::new("player2oib", "Second player OIB"),
            Column::new("player2name", "Second player name"),
            Column::new("player2surname", "Second player surname"),
            Column::new("rank", "Rank"),
            Column::new("dateOfTermination", "Date of termination"),
        ],
        related: &[RelatedLink::new("doubles-matches", "Doubles matches")],
        history: None,
    };

    fn id(&self) -> i64 {
        self.pair_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "player1oib" => FieldValue::opt_text(self.player1oib.as_ref()),
            "player1name" => FieldValue::opt_text(self.player1name.as_ref()),
            "player1surname" => FieldValue::opt_text(self.player1surname.as_ref()),
            "player2oib" => FieldValue::opt_text(self.player2oib.as_ref()),
            "player2name" => FieldValue::opt_text(self.player2name.as_ref()),
            "player2surname" => FieldValue::opt_text(self.player2surname.as_ref()),
            "rank" => FieldValue::opt_number(self.rank),
            "dateOfTermination" => FieldValue::opt_text(self.date_of_termination.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        match (&self.player1surname, &self.player2surname) {
            (Some(a), Some(b)) => format!("{a} / {b}"),
            _ => format!("Pair {}", self.pair_id),
        }
    }
}
