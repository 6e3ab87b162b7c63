use serde::{Deserialize, Serialize};

use super::coach::full_name;
use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec, RelatedLink};
use crate::domain::fields::{FieldSpec, LookupSource, HANDS, SEXES};
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub player_id: i64,
    pub oib: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub date_of_birth: Option<String>,
    pub sex: Option<String>,
    pub zip_code: Option<i32>,
    pub place_name: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub preferred_hand: Option<String>,
    pub rank: Option<i32>,
    pub injury: Option<String>,
    pub club_name: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub previous_clubs: Vec<String>,
}

impl Entity for Player {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Player,
        collection: "players",
        parent: None,
        noun: "Player",
        title: "Players",
        fields: &[
            FieldSpec::text("oib", "OIB", "11 digits"),
            FieldSpec::text("name", "Name", ""),
            FieldSpec::text("surname", "Surname", ""),
            FieldSpec::text("dateOfBirth", "Date of birth", "YYYY-MM-DD"),
            FieldSpec::choice("sex", "Sex", SEXES),
            FieldSpec::text("height", "Height", "cm"),
            FieldSpec::text("weight", "Weight", "kg"),
            FieldSpec::choice("preferredHand", "Preferred hand", HANDS),
            FieldSpec::text("rank", "Rank", ""),
            FieldSpec::text("injury", "Injury", ""),
            FieldSpec::text("zipCode", "Zip code", ""),
            FieldSpec::text("placeName", "Place", ""),
            FieldSpec::lookup("clubName", "Club", LookupSource::Clubs, ""),
            FieldSpec::text("from", "Member since", "YYYY-MM-DD"),
        ],
        rules: RuleSet {
            required: &[
                "oib",
                "name",
                "surname",
                "sex",
                "zipCode",
                "placeName",
                "clubName",
                "from",
            ],
            required_message:
                "OIB, name, surname, sex, zip code, place, club and membership start date are required!",
            formats: &[
                FormatRule::new("oib", Format::Oib, "Invalid OIB format!"),
                FormatRule::new("zipCode", Format::Digits, "Invalid zip code format!"),
            ],
        },
        filters: &[
            FilterSpec::Text {
                key: "name",
                label: "Name",
            },
            FilterSpec::Text {
                key: "surname",
                label: "Surname",
            },
            FilterSpec::Text {
                key: "rank",
                label: "Rank",
            },
            FilterSpec::Text {
                key: "placeName",
                label: "Place",
            },
            FilterSpec::Choice {
                key: "sex",
                label: "Sex",
                choices: SEXES,
            },
            FilterSpec::Choice {
                key: "preferredHand",
                label: "Preferred hand",
                choices: HANDS,
            },
        ],
        sort_keys: &[
            Column::new("surname", "Surname"),
            Column::new("name", "Name"),
            Column::new("dateOfBirth", "Date of birth"),
            Column::new("rank", "Rank"),
            Column::new("height", "Height"),
            Column::new("weight", "Weight"),
            Column::new("placeName", "Place"),
        ],
        columns: &[
            Column::new("name", "Name"),
            Column::new("surname", "Surname"),
            Column::new("rank", "Rank"),
            Column::new("sex", "Sex"),
            Column::new("placeName", "Place"),
            Column::new("clubName", "Club"),
        ],
        display: &[
            Column::new("oib", "OIB"),
            Column::new("name", "Name"),
            Column::new("surname", "Surname"),
            Column::new("dateOfBirth", "Date of birth"),
            Column::new("sex", "Sex"),
            Column::new("height", "Height"),
            Column::new("weight", "Weight"),
            Column::new("preferredHand", "Preferred hand"),
            Column::new("rank", "Rank"),
            Column::new("injury", "Injury"),
            Column::new("zipCode", "Zip code"),
            Column::new("placeName", "Place"),
            Column::new("clubName", "Club"),
        ],
        related: &[RelatedLink::new("singles-matches", "Singles matches")],
        history: Some(Column::new("previousClubs", "Previous clubs")),
    };

    fn id(&self) -> i64 {
        self.player_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "oib" => FieldValue::opt_text(self.oib.as_ref()),
            "name" => FieldValue::opt_text(self.name.as_ref()),
            "surname" => FieldValue::opt_text(self.surname.as_ref()),
            "dateOfBirth" => FieldValue::opt_text(self.date_of_birth.as_ref()),
            "sex" => FieldValue::opt_text(self.sex.as_ref()),
            "zipCode" => FieldValue::opt_number(self.zip_code),
            "placeName" => FieldValue::opt_text(self.place_name.as_ref()),
            "height" => FieldValue::opt_number(self.height),
            "weight" => FieldValue::opt_number(self.weight),
            "preferredHand" => FieldValue::opt_text(self.preferred_hand.as_ref()),
            "rank" => FieldValue::opt_number(self.rank),
            "injury" => FieldValue::opt_text(self.injury.as_ref()),
            "clubName" => FieldValue::opt_text(self.club_name.as_ref()),
            "previousClubs" => FieldValue::List(self.previous_clubs.clone()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        full_name(self.name.as_deref(), self.surname.as_deref())
            .unwrap_or_else(|| format!("Player {}", self.player_id))
    }
}
