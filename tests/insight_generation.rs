mod common;

use common::ScriptedTransport;
use league_coach::insight::generator::InsightGenerator;
use league_coach::insight::markdown::{self, Block};
use league_coach::{ApiKey, AppError, MatchParticipation, PlayerStatistics};
use serde_json::{json, Value};
use std::sync::Arc;

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

fn stats() -> PlayerStatistics {
    PlayerStatistics {
        game_name: "Tester".to_string(),
        tag_line: "NA1".to_string(),
        icon_url: String::new(),
        level: 42,
        rank: "GOLD II".to_string(),
        ranked_win_rate: Some(60.0),
        win_rate: 100.0,
        kda: 4.0,
        avg_cs_per_minute: 7.2,
        recent_matches: vec![MatchParticipation {
            match_id: "NA1_1".to_string(),
            champion_name: "Ahri".to_string(),
            champion_icon_url: String::new(),
            win: true,
            kills: 5,
            deaths: 2,
            assists: 3,
            creep_score: 180,
            gold: 12_000,
            duration_minutes: 25,
        }],
    }
}

fn generate(transport: ScriptedTransport) -> (Arc<ScriptedTransport>, Result<String, AppError>) {
    let transport = Arc::new(transport);
    let generator = InsightGenerator::new(transport.clone(), "gemini-2.5-flash");
    let result = generator.generate(&stats(), &ApiKey::new("gemini-key"));
    (transport, result)
}

#[test]
fn test_generate_sends_prompt_and_returns_text() {
    let reply = json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": "### Strengths\n- **Clean** laning\n\n### Actionable Tips\n1. Ward more" }]
            }
        }]
    });
    let (transport, result) = generate(ScriptedTransport::new().ok(GENERATE_URL, reply));
    let text = result.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert!(requests[0]
        .headers
        .contains(&("x-goog-api-key".to_string(), "gemini-key".to_string())));

    let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("- Rank: GOLD II"));
    assert!(prompt.contains("- Champion: Ahri, KDA: 5/2/3, CS: 180, Result: Win"));

    let blocks = markdown::parse(&text);
    assert_eq!(blocks.len(), 4);
    assert!(matches!(blocks[1], Block::Bullets(ref items) if items.len() == 1));
    assert!(matches!(blocks[3], Block::Numbered(ref items) if items.len() == 1));
}

#[test]
fn test_upstream_failures_are_service_errors() {
    let (_, result) = generate(ScriptedTransport::new().status(GENERATE_URL, 403));
    assert!(matches!(result, Err(AppError::Service(_))));

    let (_, result) = generate(ScriptedTransport::new().status(GENERATE_URL, 500));
    assert!(matches!(result, Err(AppError::Service(_))));

    let (_, result) = generate(ScriptedTransport::new().unreachable(GENERATE_URL));
    assert!(matches!(result, Err(AppError::Service(_))));

    let (transport, result) =
        generate(ScriptedTransport::new().ok(GENERATE_URL, json!({ "candidates": [] })));
    assert!(matches!(result, Err(AppError::Service(_))));
    assert_eq!(transport.requests().len(), 1);
}
