use serde::{Deserialize, Serialize};

use super::equipment::CLUB_PARENT;
use crate::domain::entity::{Column, Entity, EntityKind, EntitySpec, FilterSpec};
use crate::domain::fields::{FieldSpec, LookupSource};
use crate::domain::validation::{Format, FormatRule, RuleSet};
use crate::domain::values::FieldValue;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(default)]
    pub meeting_id: i64,
    pub meeting_timestamp: Option<String>,
    pub agenda: Option<String>,
    pub notes: Option<String>,
    pub club_name: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub attendees: Vec<String>,
}

impl Entity for Meeting {
    const SPEC: &'static EntitySpec = &EntitySpec {
        kind: EntityKind::Meeting,
        collection: "meetings",
        parent: Some(CLUB_PARENT),
        noun: "Meeting",
        title: "Meetings",
        fields: &[
            FieldSpec::text("meetingTimestamp", "Date and time", "YYYY-MM-DDTHH:MM"),
            FieldSpec::text("clubName", "Club", ""),
            FieldSpec::text("agenda", "Agenda", ""),
            FieldSpec::text("notes", "Notes", ""),
            FieldSpec::multi("oibs", "Attendee OIB", Some(LookupSource::Persons), "11 digits"),
        ],
        rules: RuleSet {
            required: &["meetingTimestamp", "clubName", "agenda", "oibs"],
            required_message: "Meeting date and time, agenda, attendees and club are required!",
            formats: &[FormatRule::new("oibs", Format::Oib, "Invalid OIB format!")],
        },
        filters: &[FilterSpec::Text {
            key: "agenda",
            label: "Agenda",
        }],
        sort_keys: &[Column::new("meetingTimestamp", "Date and time")],
        columns: &[
            Column::new("meetingTimestamp", "Date and time"),
            Column::new("agenda", "Agenda"),
        ],
        display: &[
            Column::new("meetingTimestamp", "Date and time"),
            Column::new("clubName", "Club"),
            Column::new("agenda", "Agenda"),
            Column::new("notes", "Notes"),
        ],
        related: &[],
        history: Some(Column::new("attendees", "Attendees")),
    };

    fn id(&self) -> i64 {
        self.meeting_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "meetingTimestamp" => FieldValue::opt_text(self.meeting_timestamp.as_ref()),
            "agenda" => FieldValue::opt_text(self.agenda.as_ref()),
            "notes" => FieldValue::opt_text(self.notes.as_ref()),
            "clubName" => FieldValue::opt_text(self.club_name.as_ref()),
            "attendees" => FieldValue::List(self.attendees.clone()),
            _ => FieldValue::Absent,
        }
    }

    fn title(&self) -> String {
        self.agenda
            .clone()
            .unwrap_or_else(|| format!("Meeting {}", self.meeting_id))
    }
}
