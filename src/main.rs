use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use league_coach::display::output::{
    display_analysis, display_error, display_hint, display_info, display_player_statistics,
    display_success, display_warning,
};
use league_coach::http::{HttpTransport, UreqTransport};
use league_coach::insight::generator::InsightGenerator;
use league_coach::insight::markdown;
use league_coach::{AppError, Config, PlayerStatistics, RegionKey, StatsAggregator};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "League Coach")]
#[command(about = "Summarize a player's recent games and get AI coaching tips", long_about = None)]
struct Args {
    /// Riot Game Name, or a full Riot ID like Name#TAG
    game_name: String,

    /// Riot Tag (tag line), optional when given as part of the Riot ID
    tag_line: Option<String>,

    /// Region (default: RIOT_REGION or NA)
    #[arg(short, long, value_enum, ignore_case = true)]
    region: Option<RegionKey>,

    /// Skip the AI analysis
    #[arg(long)]
    no_insight: bool,

    /// Print the statistics as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        if let Some(app_error) = e.downcast_ref::<AppError>() {
            display_hint(app_error);
        }
        std::process::exit(1);
    }
}

fn split_riot_id(game_name: &str, tag_line: Option<&str>) -> Result<(String, String), AppError> {
    match tag_line {
        Some(tag) => Ok((game_name.to_string(), tag.to_string())),
        None => game_name
            .rsplit_once('#')
            .map(|(name, tag)| (name.to_string(), tag.to_string()))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "'{}' has no tag line; use Name#TAG or pass the tag separately",
                    game_name
                ))
            }),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn render_json(
    stats: &PlayerStatistics,
    analysis: Option<&Result<String, AppError>>,
) -> anyhow::Result<String> {
    let (text, error) = match analysis {
        Some(Ok(text)) => (Some(text.clone()), None),
        Some(Err(e)) => (None, Some(e.to_string())),
        None => (None, None),
    };
    let output = serde_json::json!({
        "statistics": stats,
        "analysis": text,
        "analysisError": error,
    });
    serde_json::to_string_pretty(&output).context("failed to serialize statistics")
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let region = args.region.unwrap_or(config.region);
    let (game_name, tag_line) = split_riot_id(&args.game_name, args.tag_line.as_deref())?;

    let transport: Arc<dyn HttpTransport> = Arc::new(UreqTransport::new());
    let aggregator = StatsAggregator::new(transport.clone(), config.ddragon_version.clone());

    if !args.json {
        display_info(&format!(
            "Fetching data for {}#{} in region {}",
            game_name,
            tag_line,
            region.label()
        ));
    }

    let pb = spinner("Fetching account, rank and recent matches...");
    let stats = aggregator.aggregate(&game_name, &tag_line, region, &config.riot_api_key);
    pb.finish_and_clear();
    let stats = stats?;

    if !args.json {
        display_success(&format!("Found {}", stats.riot_id()));
        display_player_statistics(&stats);
    }

    let analysis = if args.no_insight {
        None
    } else if let Some(gemini_key) = &config.gemini_api_key {
        let generator = InsightGenerator::new(transport, config.gemini_model.clone());
        let pb = spinner("Asking the AI coach...");
        let result = generator.generate(&stats, gemini_key);
        pb.finish_and_clear();
        Some(result)
    } else {
        warn!("GEMINI_API_KEY is not set, skipping analysis");
        if !args.json {
            display_warning("GEMINI_API_KEY not set, skipping AI analysis");
        }
        None
    };

    // Statistics are printed before an analysis failure is reported.
    if args.json {
        println!("{}", render_json(&stats, analysis.as_ref())?);
    } else if let Some(Ok(text)) = &analysis {
        display_analysis(&markdown::parse(text));
    }

    if let Some(Err(e)) = analysis {
        return Err(e.into());
    }

    Ok(())
}
