use serde::{Deserialize, Serialize};

use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec, ParentSpec};
use crate::domain::fields::FieldSpec;
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

pub(crate) const CLUB_PARENT: ParentSpec = ParentSpec {
    collection: "clubs",
    id_field: "clubId",
    label: "Club",
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(default)]
    pub equipment_id: i64,
    pub club_name: Option<String>,
    pub quantity: Option<i32>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl Entity for Equipment {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Equipment,
        collection: "equipment",
        parent: Some(CLUB_PARENT),
        noun: "Equipment",
        title: "Equipment",
        fields: &[
            FieldSpec::text("name", "Name", ""),
            FieldSpec::text("quantity", "Quantity", "Digits only"),
            FieldSpec::text("price", "Price", "e.g. 49.99"),
        ],
        rules: RuleSet {
            required: &["name", "quantity", "price"],
            required_message: "Equipment name, quantity and price are required!",
            formats: &[
                FormatRule::new("quantity", Format::Digits, "Invalid quantity format!"),
                FormatRule::new("price", Format::Decimal, "Invalid price format!"),
            ],
        },
        filters: &[FilterSpec::Text {
            key: "name",
            label: "Name",
        }],
        sort_keys: &[
            Column::new("name", "Name"),
            Column::new("quantity", "Quantity"),
            Column::new("price", "Price"),
        ],
        columns: &[
            Column::new("name", "Name"),
            Column::new("quantity", "Quantity"),
            Column::new("price", "Price"),
        ],
        display: &[
            Column::new("name", "Name"),
            Column::new("quantity", "Quantity"),
            Column::new("price", "Price"),
            Column::new("clubName", "Club"),
        ],
        related: &[],
        history: None,
    };

    fn id(&self) -> i64 {
        self.equipment_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "clubName" => FieldValue::opt_text(self.club_name.as_ref()),
            "quantity" => FieldValue::opt_number(self.quantity),
            "name" => FieldValue::opt_text(self.name.as_ref()),
            "price" => FieldValue::opt_number(self.price),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Equipment {}", self.equipment_id))
    }
}
