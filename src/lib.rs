//! Looks up a League of Legends player, summarizes their recent form from the
//! Riot API and asks Gemini for a coaching write-up.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod http;
pub mod insight;
pub mod region;
pub mod stats;

pub use config::{ApiKey, Config};
pub use error::AppError;
pub use region::{RegionKey, RouteInfo};
pub use stats::aggregator::StatsAggregator;
pub use stats::model::{MatchParticipation, PlayerStatistics};
