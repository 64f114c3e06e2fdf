pub mod classifier;
pub mod dimension;
pub mod ladder;

pub use classifier::{classify, classify_dimension, classify_signed, min_index};
pub use dimension::Dimension;
pub use ladder::{BitrateLevel, DEFAULT_TIER, LADDER, ResolutionTier, TierId};
