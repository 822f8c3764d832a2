use serde::Deserialize;

// Fields the pipeline reads are required: a missing one fails deserialization
// and surfaces as a data-integrity error instead of a silent default.

// Account V1 response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// Summoner V4 response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub profile_icon_id: i64,
    pub summoner_level: i64,
}

// League V4 response (one element of the by-summoner list)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub wins: u32,
    pub losses: u32,
}

// Match V5 response
#[derive(Debug, Clone, Deserialize)]
pub struct MatchDto {
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds.
    pub game_duration: i64,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_name: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub gold_earned: u32,
}
