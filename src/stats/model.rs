use serde::Serialize;

/// One player's line from one match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipation {
    pub match_id: String,
    pub champion_name: String,
    pub champion_icon_url: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    /// Lane minions plus neutral monsters.
    pub creep_score: u32,
    pub gold: u32,
    pub duration_minutes: u32,
}

impl MatchParticipation {
    /// Per-game KDA, zero deaths counted as one.
    pub fn kda(&self) -> f64 {
        (self.kills as u64 + self.assists as u64) as f64 / self.deaths.max(1) as f64
    }
}

/// Solo queue standing, kept apart from the recent-form numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub tier: String,
    pub division: String,
    pub wins: u32,
    pub losses: u32,
}

impl RankedEntry {
    pub fn label(&self) -> String {
        format!("{} {}", self.tier, self.division)
    }

    pub fn win_rate(&self) -> Option<f64> {
        let total = self.wins as u64 + self.losses as u64;
        if total == 0 {
            None
        } else {
            Some(self.wins as f64 / total as f64 * 100.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub game_name: String,
    pub tag_line: String,
    pub icon_url: String,
    pub level: i64,
    /// `"{tier} {division}"`, or `"Unranked"`.
    pub rank: String,
    /// Lifetime solo queue win rate; display only.
    pub ranked_win_rate: Option<f64>,
    /// Percentage over `recent_matches`, 0 when there are none.
    pub win_rate: f64,
    pub kda: f64,
    pub avg_cs_per_minute: f64,
    /// Most recent first.
    pub recent_matches: Vec<MatchParticipation>,
}

impl PlayerStatistics {
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }

    pub fn recent_wins(&self) -> usize {
        self.recent_matches.iter().filter(|m| m.win).count()
    }

    pub fn has_recent_matches(&self) -> bool {
        !self.recent_matches.is_empty()
    }
}
