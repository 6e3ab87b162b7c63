//! Wire records returned by the REST backend, one per managed entity.

mod club;
mod coach;
mod court;
mod equipment;
mod meeting;
mod pair;
mod person;
mod player;
mod tennis_match;
mod tournament;
mod training;
mod transaction;

pub use club::Club;
pub use coach::Coach;
pub use court::Court;
pub use equipment::Equipment;
pub use meeting::Meeting;
pub use pair::Pair;
pub use person::Person;
pub use player::Player;
pub use tennis_match::Match;
pub use tournament::Tournament;
pub use training::Training;
pub use transaction::Transaction;

use serde::{Deserialize, Deserializer};

/// Name lists may arrive as `null`; read that as no entries.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Entity;
    use crate::domain::values::FieldValue;

    #[test]
    fn club_decodes_camel_case_wire_names() {
        let json = r#"{
            "clubId": 7,
            "name": "TK Mladost",
            "foundationYear": 1952,
            "email": "info@mladost.hr",
            "phoneNumber": "014567890",
            "webAddress": null,
            "budget": 12500.5,
            "zipCode": 10000,
            "placeName": "Zagreb"
        }"#;
        let club: Club = serde_json::from_str(json).unwrap();
        assert_eq!(club.id(), 7);
        assert_eq!(club.field("foundationYear"), FieldValue::Number(1952.0));
        assert_eq!(club.field("webAddress"), FieldValue::Absent);
        assert_eq!(club.field("unknown"), FieldValue::Absent);
    }

    #[test]
    fn history_sets_default_to_empty() {
        let coach: Coach = serde_json::from_str(r#"{"coachId": 1, "name": "Ivo"}"#).unwrap();
        assert!(coach.previous_clubs.is_empty());
        assert!(coach.field("previousClubs").is_absent());
    }

    #[test]
    fn null_name_lists_decode_as_empty() {
        let player: Player =
            serde_json::from_str(r#"{"playerId": 3, "previousClubs": null}"#).unwrap();
        assert!(player.previous_clubs.is_empty());

        let meeting: Meeting =
            serde_json::from_str(r#"{"meetingId": 4, "attendees": null}"#).unwrap();
        assert!(meeting.attendees.is_empty());

        let training: Training =
            serde_json::from_str(r#"{"trainingId": 5, "players": ["Ana", "Iva"]}"#).unwrap();
        assert_eq!(training.players, vec!["Ana", "Iva"]);
    }

    #[test]
    fn tournament_type_uses_reserved_wire_name() {
        let t: Tournament =
            serde_json::from_str(r#"{"tournamentId": 2, "type": "DOUBLES"}"#).unwrap();
        assert_eq!(t.field("type"), FieldValue::text("DOUBLES"));
    }

    #[test]
    fn match_winner_resolves_opponent() {
        let m = Match {
            opponent1: Some("Horvat".into()),
            opponent2: Some("Kovač".into()),
            winner: Some(2),
            ..Match::default()
        };
        assert_eq!(m.field("winner"), FieldValue::text("Kovač"));
    }
}
