pub mod generator;
pub mod markdown;
pub mod prompt;
