use super::model::MatchParticipation;

/// Running sums over a match sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchTotals {
    pub games: usize,
    pub wins: usize,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub creep_score: u64,
    pub duration_minutes: u64,
}

impl MatchTotals {
    pub fn new() -> Self {
        MatchTotals::default()
    }

    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a MatchParticipation>) -> Self {
        let mut totals = MatchTotals::new();
        for m in matches {
            totals.add_match(m);
        }
        totals
    }

    pub fn add_match(&mut self, m: &MatchParticipation) {
        self.games += 1;
        if m.win {
            self.wins += 1;
        }
        self.kills += m.kills as u64;
        self.deaths += m.deaths as u64;
        self.assists += m.assists as u64;
        self.creep_score += m.creep_score as u64;
        self.duration_minutes += m.duration_minutes as u64;
    }

    /// Percentage of games won; 0 for an empty sample.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            (self.wins as f64 / self.games as f64) * 100.0
        }
    }

    /// (kills + assists) / deaths, with deaths floored at one.
    pub fn kda(&self) -> f64 {
        (self.kills + self.assists) as f64 / self.deaths.max(1) as f64
    }

    pub fn cs_per_minute(&self) -> f64 {
        if self.duration_minutes == 0 {
            0.0
        } else {
            self.creep_score as f64 / self.duration_minutes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(win: bool, k: u32, d: u32, a: u32, cs: u32, minutes: u32) -> MatchParticipation {
        MatchParticipation {
            match_id: "NA1_1".to_string(),
            champion_name: "Ahri".to_string(),
            champion_icon_url: String::new(),
            win,
            kills: k,
            deaths: d,
            assists: a,
            creep_score: cs,
            gold: 10_000,
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_empty_sample_is_all_zero() {
        let totals = MatchTotals::from_matches(&Vec::<MatchParticipation>::new());
        assert_eq!(totals.win_rate(), 0.0);
        assert_eq!(totals.kda(), 0.0);
        assert_eq!(totals.cs_per_minute(), 0.0);
        assert!(!totals.win_rate().is_nan());
    }

    #[test]
    fn test_deathless_kda_is_kills_plus_assists() {
        let games = [game(true, 7, 0, 4, 200, 30), game(true, 3, 0, 10, 150, 25)];
        let totals = MatchTotals::from_matches(&games);
        assert_eq!(totals.kda(), 24.0);
    }

    #[test]
    fn test_mixed_sample() {
        let games = [
            game(true, 5, 2, 3, 180, 25),
            game(false, 5, 2, 3, 180, 25),
            game(true, 5, 2, 3, 180, 25),
        ];
        let totals = MatchTotals::from_matches(&games);
        assert_eq!(totals.games, 3);
        assert_eq!(totals.wins, 2);
        assert!((totals.win_rate() - 200.0 / 3.0).abs() < 1e-9);
        assert!((totals.kda() - 4.0).abs() < 1e-9);
        assert!((totals.cs_per_minute() - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_cs_is_zero() {
        let games = [game(false, 0, 1, 0, 12, 0)];
        let totals = MatchTotals::from_matches(&games);
        assert_eq!(totals.cs_per_minute(), 0.0);
        assert_eq!(totals.win_rate(), 0.0);
    }

    #[test]
    fn test_per_game_kda_floors_deaths() {
        assert_eq!(game(true, 2, 0, 3, 0, 20).kda(), 5.0);
        assert_eq!(game(true, 2, 2, 2, 0, 20).kda(), 2.0);
    }
}
