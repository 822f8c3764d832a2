// URL builders for the Riot and Data Dragon endpoints used by the pipeline.

use crate::region::RouteInfo;

pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";
pub const RECENT_MATCH_COUNT: usize = 5;

const DATA_DRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

fn host(route: &str) -> String {
    format!("https://{}.api.riotgames.com", route)
}

pub fn account_by_riot_id(route: &RouteInfo, game_name: &str, tag_line: &str) -> String {
    format!(
        "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
        host(route.regional),
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

pub fn summoner_by_puuid(route: &RouteInfo, puuid: &str) -> String {
    format!(
        "{}/lol/summoner/v4/summoners/by-puuid/{}",
        host(route.platform),
        puuid
    )
}

pub fn league_entries_by_summoner(route: &RouteInfo, summoner_id: &str) -> String {
    format!(
        "{}/lol/league/v4/entries/by-summoner/{}",
        host(route.platform),
        summoner_id
    )
}

pub fn match_ids_by_puuid(route: &RouteInfo, puuid: &str, count: usize) -> String {
    format!(
        "{}/lol/match/v5/matches/by-puuid/{}/ids?count={}",
        host(route.regional),
        puuid,
        count
    )
}

pub fn match_by_id(route: &RouteInfo, match_id: &str) -> String {
    format!("{}/lol/match/v5/matches/{}", host(route.regional), match_id)
}

pub fn profile_icon_url(version: &str, profile_icon_id: i64) -> String {
    format!(
        "{}/{}/img/profileicon/{}.png",
        DATA_DRAGON_CDN, version, profile_icon_id
    )
}

pub fn champion_icon_url(version: &str, champion_name: &str) -> String {
    format!(
        "{}/{}/img/champion/{}.png",
        DATA_DRAGON_CDN, version, champion_name
    )
}
