use crate::error::AppError;
use crate::insight::markdown::{Block, Inline, Line};
use crate::stats::model::{MatchParticipation, PlayerStatistics};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Win Rate")]
    win_rate: String,
    #[tabled(rename = "KDA")]
    kda: String,
    #[tabled(rename = "CS/min")]
    cs_per_minute: String,
    #[tabled(rename = "Wins")]
    wins: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    result: String,
    champion: String,
    #[tabled(rename = "K / D / A")]
    score: String,
    #[tabled(rename = "KDA")]
    kda: String,
    #[tabled(rename = "CS")]
    cs: String,
    gold: String,
    duration: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_hint(error: &AppError) {
    eprintln!("   {}", error.hint().dimmed());
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_player_statistics(stats: &PlayerStatistics) {
    println!(
        "\n{} {}",
        format!("🎮 {}", stats.game_name).bold().cyan(),
        format!("#{}", stats.tag_line).dimmed()
    );
    println!("{}", "=".repeat(60).cyan());
    println!("{} {}", "Level:".bold(), stats.level);
    println!("{} {}", "Rank:".bold(), stats.rank.green().bold());
    if let Some(ranked) = stats.ranked_win_rate {
        println!("{} {:.1}%", "Ranked Win Rate (season):".bold(), ranked);
    }
    println!("{} {}\n", "Icon:".bold(), stats.icon_url.dimmed());

    if !stats.has_recent_matches() {
        println!("{}", "No recent matches found for this player".yellow());
        println!();
        return;
    }

    let summary = SummaryRow {
        win_rate: format!("{:.1}%", stats.win_rate),
        kda: format!("{:.2}", stats.kda),
        cs_per_minute: format!("{:.1}", stats.avg_cs_per_minute),
        wins: stats.recent_wins().to_string(),
    };
    let mut table = Table::new(vec![summary]);
    table.with(Style::rounded());
    println!("{}", table);

    display_match_history(&stats.recent_matches);
}

pub fn display_match_history(matches: &[MatchParticipation]) {
    println!(
        "\n{}",
        format!("📊 RECENT MATCHES (Last {} Games)", matches.len())
            .bold()
            .cyan()
    );

    let rows: Vec<MatchRow> = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| MatchRow {
            number: format!("{}", idx + 1),
            result: if m.win {
                "Victory".green().to_string()
            } else {
                "Defeat".red().to_string()
            },
            champion: m.champion_name.clone(),
            score: format!("{} / {} / {}", m.kills, m.deaths.to_string().red(), m.assists),
            kda: format!("{:.2}", m.kda()),
            cs: m.creep_score.to_string(),
            gold: format!("{:.1}k", m.gold as f64 / 1000.0),
            duration: format!("{} min", m.duration_minutes),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_analysis(blocks: &[Block]) {
    println!("{}", "🧠 AI COACH ANALYSIS".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    for line in format_analysis(blocks) {
        println!("{}", line);
    }
    println!();
}

/// Terminal lines for a parsed analysis.
pub fn format_analysis(blocks: &[Block]) -> Vec<String> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading(line) => {
                lines.push(String::new());
                lines.push(render_line(line).bold().bright_cyan().to_string());
            }
            Block::Bullets(items) => {
                for item in items {
                    lines.push(format!("  • {}", render_line(item)));
                }
            }
            Block::Numbered(items) => {
                for (idx, item) in items.iter().enumerate() {
                    lines.push(format!("  {}. {}", idx + 1, render_line(item)));
                }
            }
            Block::Paragraph(line) => lines.push(render_line(line)),
        }
    }
    lines
}

fn render_line(line: &Line) -> String {
    line.iter()
        .map(|span| match span {
            Inline::Text(text) => text.clone(),
            Inline::Bold(text) => text.bold().white().to_string(),
        })
        .collect()
}
