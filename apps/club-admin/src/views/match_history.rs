//! Read-only match history of a player (singles) or a pair (doubles).
//!
//! Tournaments are fetched first so every match can link to its
//! tournament's match list; the match fetch only starts once they are in.

use serde::Serialize;
use time::macros::format_description;
use time::PrimitiveDateTime;
use tracing::warn;

use crate::client::fetch::{
    fetch_doubles_matches, fetch_item, fetch_singles_matches, fetch_tournaments,
};
use crate::client::ApiClient;
use crate::domain::fields::{choice_label, STAGES};
use crate::domain::records::{Match, Pair, Player, Tournament};
use crate::domain::{Entity, Scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySubject {
    Player(i64),
    Pair(i64),
}

impl HistorySubject {
    fn owner_path(&self) -> String {
        match self {
            HistorySubject::Player(id) => Player::SPEC.item_path(Scope::TOP, *id),
            HistorySubject::Pair(id) => Pair::SPEC.item_path(Scope::TOP, *id),
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            HistorySubject::Player(_) => "Singles matches",
            HistorySubject::Pair(_) => "Doubles matches",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRow {
    pub when: String,
    pub tournament: String,
    /// Detail route of the match, when its tournament could be resolved.
    pub href: Option<String>,
    pub stage: String,
    pub opponents: String,
    pub result: String,
    pub winner: String,
}

#[derive(Debug, Serialize)]
pub struct MatchHistoryPage {
    pub title: String,
    pub heading: &'static str,
    pub owner_href: String,
    pub rows: Vec<MatchRow>,
}

pub struct MatchHistoryView {
    subject: HistorySubject,
    owner: Option<String>,
    rows: Vec<MatchRow>,
}

impl MatchHistoryView {
    pub async fn mount(api: &dyn ApiClient, subject: HistorySubject) -> Self {
        let owner = match subject {
            HistorySubject::Player(id) => fetch_item::<Player>(api, Scope::TOP, id)
                .await
                .map(|p| p.title()),
            HistorySubject::Pair(id) => fetch_item::<Pair>(api, Scope::TOP, id)
                .await
                .map(|p| p.title()),
        };
        let owner = match owner {
            Ok(title) => Some(title),
            Err(e) => {
                warn!(subject = ?subject, error = %e, "match history owner fetch failed");
                None
            }
        };

        let tournaments = match fetch_tournaments(api).await {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "tournament fetch failed");
                Vec::new()
            }
        };

        let matches = match subject {
            HistorySubject::Player(id) => fetch_singles_matches(api, id).await,
            HistorySubject::Pair(id) => fetch_doubles_matches(api, id).await,
        };
        let matches = match matches {
            Ok(m) => m,
            Err(e) => {
                warn!(subject = ?subject, error = %e, "match fetch failed");
                Vec::new()
            }
        };

        Self {
            subject,
            owner,
            rows: matches.iter().map(|m| match_row(m, &tournaments)).collect(),
        }
    }

    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    pub fn page(&self) -> MatchHistoryPage {
        MatchHistoryPage {
            title: self
                .owner
                .clone()
                .unwrap_or_else(|| self.subject.heading().to_string()),
            heading: self.subject.heading(),
            owner_href: self.subject.owner_path(),
            rows: self.rows.clone(),
        }
    }
}

fn tournament_id_by_name(tournaments: &[Tournament], name: &str) -> Option<i64> {
    tournaments
        .iter()
        .find(|t| t.name.as_deref() == Some(name))
        .map(|t| t.tournament_id)
}

fn match_row(m: &Match, tournaments: &[Tournament]) -> MatchRow {
    let tournament = m.tournament_name.clone().unwrap_or_default();
    let href = tournament_id_by_name(tournaments, &tournament)
        .map(|tid| Match::SPEC.item_path(Scope::nested(tid), m.match_id));
    MatchRow {
        when: m
            .match_timestamp
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default(),
        tournament,
        href,
        stage: m
            .stage
            .as_deref()
            .map(|s| choice_label(STAGES, s))
            .unwrap_or_default(),
        opponents: format!(
            "{} vs {}",
            m.opponent1.as_deref().unwrap_or("?"),
            m.opponent2.as_deref().unwrap_or("?")
        ),
        result: m.match_result.clone().unwrap_or_default(),
        winner: m.winner_name().unwrap_or_default(),
    }
}

/// `2024-05-01T17:30:00` becomes `01.05.2024. 17:30`; unparseable input is
/// returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.split('.').next().unwrap_or(raw);
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let without_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let output = format_description!("[day].[month].[year]. [hour]:[minute]");

    PrimitiveDateTime::parse(trimmed, with_seconds)
        .or_else(|_| PrimitiveDateTime::parse(trimmed, without_seconds))
        .ok()
        .and_then(|dt| dt.format(output).ok())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_backend_timestamps() {
        assert_eq!(format_timestamp("2024-05-01T17:30:00"), "01.05.2024. 17:30");
        assert_eq!(format_timestamp("2024-05-01T09:05"), "01.05.2024. 09:05");
        assert_eq!(
            format_timestamp("2024-05-01T09:05:10.123456"),
            "01.05.2024. 09:05"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn rows_link_to_resolved_tournament() {
        let tournaments = vec![Tournament {
            tournament_id: 4,
            name: Some("Zagreb Open".into()),
            ..Tournament::default()
        }];
        let m = Match {
            match_id: 11,
            tournament_name: Some("Zagreb Open".into()),
            stage: Some("SEMI_FINAL".into()),
            opponent1: Some("Horvat".into()),
            opponent2: Some("Babić".into()),
            winner: Some(1),
            ..Match::default()
        };
        let row = match_row(&m, &tournaments);
        assert_eq!(row.href.as_deref(), Some("/tournaments/4/matches/11"));
        assert_eq!(row.stage, "Semifinal");
        assert_eq!(row.winner, "Horvat");

        let orphan = Match {
            tournament_name: Some("Unknown Cup".into()),
            ..m
        };
        assert_eq!(match_row(&orphan, &tournaments).href, None);
    }
}
