//! Typed reads over [`ApiClient::get_json`].

use serde::de::DeserializeOwned;

use super::api::{ApiClient, ClientError};
use crate::domain::records::{Club, Match, Person, Player, Tournament};
use crate::domain::{Entity, Scope};

pub async fn fetch<T: DeserializeOwned>(api: &dyn ApiClient, path: &str) -> Result<T, ClientError> {
    let value = api.get_json(path).await?;
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

pub async fn fetch_collection<E: Entity>(
    api: &dyn ApiClient,
    scope: Scope,
) -> Result<Vec<E>, ClientError> {
    fetch(api, &E::SPEC.collection_path(scope)).await
}

pub async fn fetch_item<E: Entity>(
    api: &dyn ApiClient,
    scope: Scope,
    id: i64,
) -> Result<E, ClientError> {
    fetch(api, &E::SPEC.item_path(scope, id)).await
}

pub async fn fetch_clubs(api: &dyn ApiClient) -> Result<Vec<Club>, ClientError> {
    fetch(api, "/clubs").await
}

pub async fn fetch_players(api: &dyn ApiClient) -> Result<Vec<Player>, ClientError> {
    fetch(api, "/players").await
}

pub async fn fetch_coach_players(
    api: &dyn ApiClient,
    coach_id: i64,
) -> Result<Vec<Person>, ClientError> {
    fetch(api, &format!("/coaches/{coach_id}/players")).await
}

pub async fn fetch_person_directory(api: &dyn ApiClient) -> Result<Vec<Person>, ClientError> {
    fetch(api, "/clubs/person").await
}

pub async fn fetch_tournaments(api: &dyn ApiClient) -> Result<Vec<Tournament>, ClientError> {
    fetch(api, "/tournaments").await
}

pub async fn fetch_singles_matches(
    api: &dyn ApiClient,
    player_id: i64,
) -> Result<Vec<Match>, ClientError> {
    fetch(api, &format!("/players/{player_id}/singles-matches")).await
}

pub async fn fetch_doubles_matches(
    api: &dyn ApiClient,
    pair_id: i64,
) -> Result<Vec<Match>, ClientError> {
    fetch(api, &format!("/doubles/{pair_id}/doubles-matches")).await
}
