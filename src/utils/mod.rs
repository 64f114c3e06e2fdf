pub mod logger;
pub mod report;

pub use logger::init_logging;
pub use report::{LevelReport, TierReport, format_bitrate, tier_line};
