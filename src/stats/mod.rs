pub mod aggregator;
pub mod metrics;
pub mod model;
