use crate::config::ApiKey;
use crate::error::{AppError, HttpError};
use crate::http::HttpTransport;
use crate::region::RouteInfo;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::endpoints;
use super::models::*;

const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Maps a non-2xx status from the Riot API to its domain error.
pub fn map_status(status: u16, entity: &str) -> AppError {
    match status {
        403 => AppError::Authentication,
        404 => AppError::NotFound(entity.to_string()),
        _ => AppError::Upstream { status },
    }
}

fn map_http_error(err: HttpError, entity: &str) -> AppError {
    match err {
        HttpError::Status(status) => map_status(status, entity),
        HttpError::Transport(msg) => AppError::Transport(msg),
    }
}

/// Authenticated, read-only access to the Riot game-data API for one request.
pub struct RiotApiClient<'a> {
    transport: &'a dyn HttpTransport,
    api_key: &'a ApiKey,
}

impl<'a> RiotApiClient<'a> {
    pub fn new(transport: &'a dyn HttpTransport, api_key: &'a ApiKey) -> Self {
        RiotApiClient { transport, api_key }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, entity: &str) -> Result<T, AppError> {
        let body = self
            .transport
            .get(url, &[(RIOT_TOKEN_HEADER, self.api_key.expose())])
            .map_err(|e| map_http_error(e, entity))?;

        serde_json::from_str(&body).map_err(|e| {
            debug!(url, error = %e, "response did not match the expected shape");
            AppError::DataIntegrity(format!("{}: {}", entity, e))
        })
    }

    pub fn get_account(
        &self,
        route: &RouteInfo,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError> {
        let url = endpoints::account_by_riot_id(route, game_name, tag_line);
        self.get_json(&url, &format!("{}#{}", game_name, tag_line))
    }

    pub fn get_summoner(&self, route: &RouteInfo, puuid: &str) -> Result<SummonerDto, AppError> {
        let url = endpoints::summoner_by_puuid(route, puuid);
        self.get_json(&url, "summoner profile")
    }

    pub fn get_league_entries(
        &self,
        route: &RouteInfo,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        let url = endpoints::league_entries_by_summoner(route, summoner_id);
        self.get_json(&url, "league entries")
    }

    pub fn get_match_ids(
        &self,
        route: &RouteInfo,
        puuid: &str,
        count: usize,
    ) -> Result<Vec<String>, AppError> {
        let url = endpoints::match_ids_by_puuid(route, puuid, count);
        self.get_json(&url, "match history")
    }

    pub fn get_match(&self, route: &RouteInfo, match_id: &str) -> Result<MatchDto, AppError> {
        let url = endpoints::match_by_id(route, match_id);
        self.get_json(&url, &format!("match {}", match_id))
    }
}
