//! Pick a target encoding bitrate tier from a stream's pixel dimensions.
//!
//! ```
//! use bitrate_tier::{BitrateLevel, TierId, classify};
//!
//! let tier = classify(1080, 1920);
//! assert_eq!(tier.id, TierId::P1080);
//! assert_eq!(tier.bitrate(BitrateLevel::High), Some(8_400_000));
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod utils;

pub use analyzer::{
    BitrateLevel, DEFAULT_TIER, Dimension, LADDER, ResolutionTier, TierId, classify,
    classify_dimension, classify_signed, min_index,
};
pub use error::AppError;
