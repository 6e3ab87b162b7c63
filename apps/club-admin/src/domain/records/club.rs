use serde::{Deserialize, Serialize};

use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec, RelatedLink};
use crate::domain::fields::FieldSpec;
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(default)]
    pub club_id: i64,
    pub name: Option<String>,
    pub foundation_year: Option<i32>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub web_address: Option<String>,
    pub budget: Option<f64>,
    pub zip_code: Option<i32>,
    pub place_name: Option<String>,
}

impl Entity for Club {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Club,
        collection: "clubs",
        parent: None,
        noun: "Club",
        title: "Clubs",
        fields: &[
            FieldSpec::text("name", "Club name", ""),
            FieldSpec::text("foundationYear", "Foundation year", ""),
            FieldSpec::text("email", "Email", "name@example.com"),
            FieldSpec::text("phoneNumber", "Phone number", "Digits only"),
            FieldSpec::text("webAddress", "Web address", ""),
            FieldSpec::text("budget", "Budget", "e.g. 12500.50"),
            FieldSpec::text("zipCode", "Zip code", ""),
            FieldSpec::text("placeName", "Place", ""),
        ],
        rules: RuleSet {
            required: &["name", "email", "phoneNumber", "zipCode", "placeName"],
            required_message:
                "Club name, email, phone number, zip code and place name are required!",
            formats: &[
                FormatRule::new("email", Format::Email, "Invalid email format!"),
                FormatRule::new(
                    "phoneNumber",
                    Format::Digits,
                    "Invalid phone number format! Use digits only.",
                ),
                FormatRule::new("zipCode", Format::Digits, "Invalid zip code format!"),
                FormatRule::new("budget", Format::Decimal, "Invalid budget format!"),
            ],
        },
        filters: &[
            FilterSpec::Text {
                key: "name",
                label: "Name",
            },
            FilterSpec::Text {
                key: "foundationYear",
                label: "Foundation year",
            },
            FilterSpec::Text {
                key: "budget",
                label: "Budget",
            },
            FilterSpec::Text {
                key: "placeName",
                label: "Place",
            },
        ],
        sort_keys: &[
            Column::new("name", "Name"),
            Column::new("foundationYear", "Foundation year"),
            Column::new("budget", "Budget"),
            Column::new("placeName", "Place"),
        ],
        columns: &[
            Column::new("name", "Name"),
            Column::new("foundationYear", "Founded"),
            Column::new("budget", "Budget"),
            Column::new("placeName", "Place"),
        ],
        display: &[
            Column::new("name", "Name"),
            Column::new("foundationYear", "Foundation year"),
            Column::new("email", "Email"),
            Column::new("phoneNumber", "Phone number"),
            Column::new("webAddress", "Web address"),
            Column::new("budget", "Budget"),
            Column::new("zipCode", "Zip code"),
            Column::new("placeName", "Place"),
        ],
        related: &[
            RelatedLink::new("transactions", "Transactions"),
            RelatedLink::new("meetings", "Meetings"),
            RelatedLink::new("equipment", "Equipment"),
            RelatedLink::new("courts", "Courts"),
        ],
        history: None,
    };

    fn id(&self) -> i64 {
        self.club_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::opt_text(self.name.as_ref()),
            "foundationYear" => FieldValue::opt_number(self.foundation_year),
            "email" => FieldValue::opt_text(self.email.as_ref()),
            "phoneNumber" => FieldValue::opt_text(self.phone_number.as_ref()),
            "webAddress" => FieldValue::opt_text(self.web_address.as_ref()),
            "budget" => FieldValue::opt_number(self.budget),
            "zipCode" => FieldValue::opt_number(self.zip_code),
            "placeName" => FieldValue::opt_text(self.place_name.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        self.name.clone().unwrap_or_else(|| format!("Club {}", self.club_id))
    }
}
