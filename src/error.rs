use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid or expired Riot API key")]
    Authentication,

    #[error("Player not found: {0}")]
    NotFound(String),

    #[error("Riot API request failed with status: {status}")]
    Upstream { status: u16 },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected API data: {0}")]
    DataIntegrity(String),

    #[error("Failed to get analysis from AI: {0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Next step shown to the user under the error message.
    pub fn hint(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Usage: league_coach <GAME_NAME> <TAG_LINE> [--region EUW]",
            AppError::Authentication => "Check RIOT_API_KEY in your .env file; development keys expire every 24h",
            AppError::NotFound(_) => "Check the Riot ID spelling and that the region matches the account",
            AppError::Upstream { .. } | AppError::Transport(_) => "The Riot API may be unavailable, try again in a moment",
            AppError::DataIntegrity(_) => "The Riot API returned data in an unexpected shape",
            AppError::Service(_) => "The statistics were still printed; rerun later for the AI analysis",
            AppError::Config(_) => "Copy .env.example to .env and fill in your API keys",
        }
    }
}

/// Failure of a single HTTP exchange, before any domain mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport failure: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_distinct() {
        let messages = [
            AppError::Authentication.to_string(),
            AppError::NotFound("Faker#KR1".to_string()).to_string(),
            AppError::Upstream { status: 500 }.to_string(),
            AppError::Transport("dns".to_string()).to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(messages[2].contains("500"));
    }
}
