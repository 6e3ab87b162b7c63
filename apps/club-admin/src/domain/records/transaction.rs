use serde::{Deserialize, Serialize};

use super::coach::full_name;
use super::equipment::CLUB_PARENT;
use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec};
use crate::domain::fields::{FieldSpec, LookupSource, PAYMENT_METHODS};
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub transaction_id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub oib: Option<String>,
    pub club_name: Option<String>,
    pub transaction_timestamp: Option<String>,
    pub price: Option<f64>,
    pub payment_method: Option<String>,
    pub description: Option<String>,
}

impl Entity for Transaction {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Transaction,
        collection: "transactions",
        parent: Some(CLUB_PARENT),
        noun: "Transaction",
        title: "Transactions",
        fields: &[
            FieldSpec::text("name", "Name", ""),
            FieldSpec::text("surname", "Surname", ""),
            FieldSpec::lookup("oib", "OIB", LookupSource::Persons, "11 digits"),
            FieldSpec::text("clubName", "Club", ""),
            FieldSpec::text("transactionTimestamp", "Date and time", "YYYY-MM-DDTHH:MM"),
            FieldSpec::text("price", "Price", "e.g. 120.50"),
            FieldSpec::choice("paymentMethod", "Payment method", PAYMENT_METHODS),
            FieldSpec::text("description", "Description", ""),
        ],
        rules: RuleSet {
            required: &[
                "name",
                "surname",
                "oib",
                "transactionTimestamp",
                "price",
                "paymentMethod",
                "description",
            ],
            required_message:
                "Name, surname, OIB, date and time, price, payment method and description are required!",
            formats: &[
                FormatRule::new("oib", Format::Oib, "Invalid OIB format!"),
                FormatRule::new("price", Format::Decimal, "Invalid price format!"),
            ],
        },
        filters: &[
            FilterSpec::Text {
                key: "surname",
                label: "Surname",
            },
            FilterSpec::Text {
                key: "oib",
                label: "OIB",
            },
            FilterSpec::Choice {
                key: "paymentMethod",
                label: "Payment method",
                choices: PAYMENT_METHODS,
            },
        ],
        sort_keys: &[
            Column::new("transactionTimestamp", "Date and time"),
            Column::new("price", "Price"),
            Column::new("surname", "Surname"),
        ],
        columns: &[
            Column::new("transactionTimestamp", "Date and time"),
            Column::new("name", "Name"),
            Column::new("surname", "Surname"),
            Column::new("price", "Price"),
            Column::new("paymentMethod", "Payment method"),
        ],
        display: &[
            Column::new("name", "Name"),
            Column::new("surname", "Surname"),
            Column::new("oib", "OIB"),
            Column::new("clubName", "Club"),
            Column::new("transactionTimestamp", "Date and time"),
            Column::new("price", "Price"),
            Column::new("paymentMethod", "Payment method"),
            Column::new("description", "Description"),
        ],
        related: &[],
        history: None,
    };

    fn id(&self) -> i64 {
        self.transaction_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::opt_text(self.name.as_ref()),
            "surname" => FieldValue::opt_text(self.surname.as_ref()),
            "oib" => FieldValue::opt_text(self.oib.as_ref()),
            "clubName" => FieldValue::opt_text(self.club_name.as_ref()),
            "transactionTimestamp" => FieldValue::opt_text(self.transaction_timestamp.as_ref()),
            "price" => FieldValue::opt_number(self.price),
            "paymentMethod" => FieldValue::opt_text(self.payment_method.as_ref()),
            "description" => FieldValue::opt_text(self.description.as_ref()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        full_name(self.name.as_deref(), self.surname.as_deref())
            .unwrap_or_else(|| format!("Transaction {}", self.transaction_id))
    }
}
