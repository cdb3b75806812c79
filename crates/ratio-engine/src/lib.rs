pub mod engine;
pub mod format;
pub mod holdings_metrics;
pub mod market_sensitivity;
pub mod models;
pub mod return_quality;
pub mod risk_metrics;
pub mod sentiment;
pub mod shared_math;
pub mod tail_risk;

pub use engine::{RatioEngine, SeriesContext};
pub use models::{MetricValue, Ratio, RatioSection, Sentiment};
