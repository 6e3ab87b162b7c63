//! Option lists for relation pickers.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::client::fetch::{
    fetch_clubs, fetch_coach_players, fetch_person_directory, fetch_players,
};
use crate::client::ApiClient;
use crate::domain::fields::LookupSource;
use crate::domain::records::Person;
use crate::domain::{EntitySpec, Scope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

/// Picker options per source; a source that failed to load is missing and
/// its fields render as free text.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    options: HashMap<LookupSource, Vec<LookupOption>>,
}

impl Lookups {
    pub async fn load(api: &dyn ApiClient, spec: &EntitySpec, scope: Scope) -> Self {
        let mut lookups = Self::default();
        for source in spec.fields.iter().filter_map(|f| f.lookup_source()) {
            if lookups.options.contains_key(&source) {
                continue;
            }
            if let Some(options) = load_source(api, source, scope).await {
                lookups.options.insert(source, options);
            }
        }
        lookups
    }

    pub fn options(&self, source: LookupSource) -> Option<&[LookupOption]> {
        self.options.get(&source).map(Vec::as_slice)
    }

    pub fn insert(&mut self, source: LookupSource, options: Vec<LookupOption>) {
        self.options.insert(source, options);
    }
}

async fn load_source(
    api: &dyn ApiClient,
    source: LookupSource,
    scope: Scope,
) -> Option<Vec<LookupOption>> {
    let result = match source {
        LookupSource::Clubs => fetch_clubs(api).await.map(|clubs| {
            clubs
                .into_iter()
                .filter_map(|c| c.name)
                .map(|name| LookupOption {
                    value: name.clone(),
                    label: name,
                })
                .collect()
        }),
        LookupSource::Players => fetch_players(api).await.map(|players| {
            players
                .into_iter()
                .filter_map(|p| {
                    let oib = p.oib.clone()?;
                    let label = match (&p.name, &p.surname) {
                        (Some(n), Some(s)) => format!("{n} {s} ({oib})"),
                        _ => oib.clone(),
                    };
                    Some(LookupOption { value: oib, label })
                })
                .collect()
        }),
        LookupSource::CoachPlayers => {
            let coach_id = scope.parent_id?;
            fetch_coach_players(api, coach_id).await.map(people_options)
        }
        LookupSource::Persons => fetch_person_directory(api).await.map(people_options),
    };

    match result {
        Ok(options) => Some(options),
        Err(e) => {
            warn!(source = ?source, error = %e, "lookup fetch failed");
            None
        }
    }
}

fn people_options(people: Vec<Person>) -> Vec<LookupOption> {
    people
        .into_iter()
        .filter_map(|p| {
            let name = p.display_name();
            let oib = p.oib?;
            let label = if name.is_empty() {
                oib.clone()
            } else {
                format!("{name} ({oib})")
            };
            Some(LookupOption { value: oib, label })
        })
        .collect()
}
