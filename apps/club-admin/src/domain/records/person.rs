use serde::{Deserialize, Serialize};

use super::coach::full_name;

/// Entry of the flattened person directory used by relation pickers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub person_id: i64,
    pub oib: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl Person {
    pub fn display_name(&self) -> String {
        full_name(self.name.as_deref(), self.surname.as_deref()).unwrap_or_default()
    }
}
