use crate::stats::model::PlayerStatistics;

pub fn format_match_lines(stats: &PlayerStatistics) -> String {
    stats
        .recent_matches
        .iter()
        .map(|m| {
            format!(
                "- Champion: {}, KDA: {}/{}/{}, CS: {}, Result: {}",
                m.champion_name,
                m.kills,
                m.deaths,
                m.assists,
                m.creep_score,
                if m.win { "Win" } else { "Loss" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Coaching prompt for one player. Deterministic for a given input.
pub fn build_prompt(stats: &PlayerStatistics) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "Act as a professional and encouraging League of Legends coach. \
         Your task is to analyze the following player's performance based on \
         their recent match history and overall stats.\n\n",
    );

    let games = stats.recent_matches.len();
    prompt.push_str("**Player Profile:**\n");
    prompt.push_str(&format!("- Game Name: {}\n", stats.game_name));
    prompt.push_str(&format!("- Rank: {}\n", stats.rank));
    prompt.push_str(&format!(
        "- Overall Win Rate (last {} games): {:.1}%\n",
        games, stats.win_rate
    ));
    prompt.push_str(&format!("- Overall KDA (last {} games): {:.2}\n", games, stats.kda));
    prompt.push_str(&format!(
        "- Average CS per Minute: {:.1}\n\n",
        stats.avg_cs_per_minute
    ));

    prompt.push_str("**Recent Matches:**\n");
    if stats.has_recent_matches() {
        prompt.push_str(&format_match_lines(stats));
        prompt.push('\n');
    } else {
        prompt.push_str("- No recent matches found.\n");
    }
    prompt.push('\n');

    prompt.push_str(
        "**Your Analysis (Use Markdown):**\n\
         Based on this data, provide a concise and actionable analysis. Structure your \
         response in three distinct sections using markdown headings:\n\n\
         ### Strengths\n\
         Identify 2-3 positive patterns or standout performances using a bulleted list. \
         Be specific and encouraging, and use bold markdown for emphasis on key stats or actions.\n\n\
         ### Areas for Improvement\n\
         Pinpoint 2-3 key weaknesses or inconsistent areas using a bulleted list. Be \
         constructive and avoid overly negative language. Use bold markdown for emphasis.\n\n\
         ### Actionable Tips\n\
         Give 3 concrete, specific, and easy-to-understand tips as a numbered list. These \
         tips should directly address the identified areas for improvement.\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::model::MatchParticipation;

    fn stats(matches: Vec<MatchParticipation>) -> PlayerStatistics {
        PlayerStatistics {
            game_name: "Tenacity".to_string(),
            tag_line: "NA1".to_string(),
            icon_url: String::new(),
            level: 412,
            rank: "CHALLENGER I".to_string(),
            ranked_win_rate: Some(58.2),
            win_rate: 60.0,
            kda: 3.456,
            avg_cs_per_minute: 8.04,
            recent_matches: matches,
        }
    }

    fn game(champion: &str, win: bool) -> MatchParticipation {
        MatchParticipation {
            match_id: "NA1_1".to_string(),
            champion_name: champion.to_string(),
            champion_icon_url: String::new(),
            win,
            kills: 8,
            deaths: 3,
            assists: 6,
            creep_score: 240,
            gold: 13_200,
            duration_minutes: 31,
        }
    }

    #[test]
    fn test_prompt_contains_profile_and_matches() {
        let prompt = build_prompt(&stats(vec![game("Jayce", true), game("Gnar", false)]));

        assert!(prompt.contains("- Game Name: Tenacity"));
        assert!(prompt.contains("- Rank: CHALLENGER I"));
        assert!(prompt.contains("Win Rate (last 2 games): 60.0%"));
        assert!(prompt.contains("KDA (last 2 games): 3.46"));
        assert!(prompt.contains("Average CS per Minute: 8.0\n\n**Recent Matches:**\n- Champion: Jayce"));
        assert!(prompt.contains("- Champion: Jayce, KDA: 8/3/6, CS: 240, Result: Win"));
        assert!(prompt.contains("- Champion: Gnar, KDA: 8/3/6, CS: 240, Result: Loss"));
        assert!(prompt.contains("### Actionable Tips"));
        // lifetime ranked figures stay out of the prompt
        assert!(!prompt.contains("58.2"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let s = stats(vec![game("Jayce", true)]);
        assert_eq!(build_prompt(&s), build_prompt(&s));
    }

    #[test]
    fn test_prompt_without_matches() {
        let prompt = build_prompt(&stats(Vec::new()));
        assert!(prompt.contains("No recent matches found."));
    }
}
