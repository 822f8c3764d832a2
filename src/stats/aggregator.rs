use crate::api::client::RiotApiClient;
use crate::api::endpoints::{self, RANKED_SOLO_QUEUE, RECENT_MATCH_COUNT};
use crate::api::models::{LeagueEntryDto, MatchDto};
use crate::config::ApiKey;
use crate::error::AppError;
use crate::http::HttpTransport;
use crate::region::RegionKey;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

use super::metrics::MatchTotals;
use super::model::{MatchParticipation, PlayerStatistics, RankedEntry};

/// Builds a [`PlayerStatistics`] from the Riot API for one player.
///
/// Every call is independent: it owns its intermediate results and
/// aborts on the first failing request, with no partial result.
pub struct StatsAggregator {
    transport: Arc<dyn HttpTransport>,
    ddragon_version: String,
}

impl StatsAggregator {
    pub fn new(transport: Arc<dyn HttpTransport>, ddragon_version: impl Into<String>) -> Self {
        StatsAggregator {
            transport,
            ddragon_version: ddragon_version.into(),
        }
    }

    pub fn aggregate(
        &self,
        game_name: &str,
        tag_line: &str,
        region: RegionKey,
        api_key: &ApiKey,
    ) -> Result<PlayerStatistics, AppError> {
        let game_name = game_name.trim();
        let tag_line = tag_line.trim();
        if game_name.is_empty() {
            return Err(AppError::Validation("game name must not be empty".to_string()));
        }
        if tag_line.is_empty() {
            return Err(AppError::Validation("tag line must not be empty".to_string()));
        }

        let route = region.resolve();
        let client = RiotApiClient::new(self.transport.as_ref(), api_key);

        info!(game_name, tag_line, region = region.label(), "looking up account");
        let account = client.get_account(&route, game_name, tag_line)?;

        info!("fetching summoner profile");
        let summoner = client.get_summoner(&route, &account.puuid)?;

        info!("fetching ranked entries");
        let entries = client.get_league_entries(&route, &summoner.id)?;
        let solo = select_solo_queue(entries);

        info!("fetching recent match ids");
        let mut match_ids = client.get_match_ids(&route, &account.puuid, RECENT_MATCH_COUNT)?;
        match_ids.truncate(RECENT_MATCH_COUNT);

        info!(count = match_ids.len(), "fetching match details");
        // Collecting into Result keeps id order and stops at the first error.
        let details = match_ids
            .par_iter()
            .map(|id| client.get_match(&route, id))
            .collect::<Result<Vec<MatchDto>, AppError>>()?;

        let recent_matches = match_ids
            .iter()
            .zip(&details)
            .map(|(id, detail)| {
                project_participation(id, detail, &account.puuid, &self.ddragon_version)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let totals = MatchTotals::from_matches(&recent_matches);
        debug!(?totals, "recent match totals");

        Ok(PlayerStatistics {
            game_name: account.game_name,
            tag_line: account.tag_line,
            icon_url: endpoints::profile_icon_url(&self.ddragon_version, summoner.profile_icon_id),
            level: summoner.summoner_level,
            rank: solo
                .as_ref()
                .map(RankedEntry::label)
                .unwrap_or_else(|| "Unranked".to_string()),
            ranked_win_rate: solo.as_ref().and_then(RankedEntry::win_rate),
            win_rate: totals.win_rate(),
            kda: totals.kda(),
            avg_cs_per_minute: totals.cs_per_minute(),
            recent_matches,
        })
    }
}

fn select_solo_queue(entries: Vec<LeagueEntryDto>) -> Option<RankedEntry> {
    entries
        .into_iter()
        .find(|e| e.queue_type == RANKED_SOLO_QUEUE)
        .map(|e| RankedEntry {
            tier: e.tier,
            division: e.rank,
            wins: e.wins,
            losses: e.losses,
        })
}

/// Picks the player's own line out of a match.
pub fn project_participation(
    match_id: &str,
    detail: &MatchDto,
    puuid: &str,
    ddragon_version: &str,
) -> Result<MatchParticipation, AppError> {
    let p = detail
        .info
        .participants
        .iter()
        .find(|p| p.puuid == puuid)
        .ok_or_else(|| {
            AppError::DataIntegrity(format!("player missing from participants of {}", match_id))
        })?;

    let creep_score = p
        .total_minions_killed
        .checked_add(p.neutral_minions_killed)
        .ok_or_else(|| {
            AppError::DataIntegrity(format!("creep score out of range in {}", match_id))
        })?;

    Ok(MatchParticipation {
        match_id: match_id.to_string(),
        champion_name: p.champion_name.clone(),
        champion_icon_url: endpoints::champion_icon_url(ddragon_version, &p.champion_name),
        win: p.win,
        kills: p.kills,
        deaths: p.deaths,
        assists: p.assists,
        creep_score,
        gold: p.gold_earned,
        duration_minutes: (detail.info.game_duration.max(0) / 60) as u32,
    })
}
