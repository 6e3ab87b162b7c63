use serde::{Deserialize, Serialize};

use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec, RelatedLink};
use crate::domain::fields::{FieldSpec, LookupSource, SEXES};
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    #[serde(default)]
    pub coach_id: i64,
    pub oib: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub date_of_birth: Option<String>,
    pub sex: Option<String>,
    pub zip_code: Option<i32>,
    pub place_name: Option<String>,
    pub years_of_experience: Option<i32>,
    pub specialization: Option<String>,
    pub club_name: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub previous_clubs: Vec<String>,
}

impl Entity for Coach {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Coach,
        collection: "coaches",
        parent: None,
        noun: "Coach",
        title: "Coaches",
        fields: &[
            FieldSpec::text("oib", "OIB", "11 digits"),
            FieldSpec::text("name", "Name", ""),
            FieldSpec::text("surname", "Surname", ""),
            FieldSpec::text("dateOfBirth", "Date of birth", "YYYY-MM-DD"),
            FieldSpec::choice("sex", "Sex", SEXES),
            FieldSpec::text("specialization", "Specialization", ""),
            FieldSpec::text("yearsOfExperience", "Years of experience", ""),
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
                "zipCode",
                "placeName",
                "clubName",
                "from",
            ],
            required_message:
                "OIB, name, surname, zip code, place, club and membership start date are required!",
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
                key: "yearsOfExperience",
                label: "Years of experience",
            },
            FilterSpec::Text {
                key: "placeName",
                label: "Place",
            },
        ],
        sort_keys: &[
            Column::new("surname", "Surname"),
            Column::new("name", "Name"),
            Column::new("yearsOfExperience", "Years of experience"),
            Column::new("placeName", "Place"),
        ],
        columns: &[
            Column::new("name", "Name"),
            Column::new("surname", "Surname"),
            Column::new("yearsOfExperience", "Experience"),
            Column::new("placeName", "Place"),
            Column::new("clubName", "Club"),
        ],
        display: &[
            Column::new("oib", "OIB"),
            Column::new("name", "Name"),
            Column::new("surname", "Surname"),
            Column::new("dateOfBirth", "Date of birth"),
            Column::new("sex", "Sex"),
            Column::new("specialization", "Specialization"),
            Column::new("yearsOfExperience", "Years of experience"),
            Column::new("zipCode", "Zip code"),
            Column::new("placeName", "Place"),
            Column::new("clubName", "Club"),
        ],
        related: &[RelatedLink::new("training-sessions", "Training sessions")],
        history: Some(Column::new("previousClubs", "Previous clubs")),
    };

    fn id(&self) -> i64 {
        self.coach_id
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
            "yearsOfExperience" => FieldValue::opt_number(self.years_of_experience),
            "specialization" => FieldValue::opt_text(self.specialization.as_ref()),
            "clubName" => FieldValue::opt_text(self.club_name.as_ref()),
            "previousClubs" => FieldValue::List(self.previous_clubs.clone()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        full_name(self.name.as_deref(), self.surname.as_deref())
            .unwrap_or_else(|| format!("Coach {}", self.coach_id))
    }
}

/// "Name Surname" from whichever parts are present.
pub(crate) fn full_name(name: Option<&str>, surname: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [name, surname]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
