use super::dimension::Dimension;
use super::ladder::{DEFAULT_TIER, LADDER, ResolutionTier};
use crate::error::AppError;
use tracing::trace;

/// Index of the smallest value, first occurrence wins on ties.
///
/// Returns 0 for an empty slice.
pub fn min_index(values: &[u64]) -> usize {
    let mut index = 0;
    let mut min = u64::MAX;
    for (current, &value) in values.iter().enumerate() {
        if value < min {
            index = current;
            min = value;
        }
    }
    index
}

/// Pick the ladder tier closest to a `width` x `height` stream.
///
/// Width and height are matched against the ladder independently and the
/// lower of the two nearest tiers wins. A `0x0` stream gets the 540p tier.
pub fn classify(width: u32, height: u32) -> &'static ResolutionTier {
    classify_dimension(Dimension::new(width, height))
}

pub fn classify_dimension(dimension: Dimension) -> &'static ResolutionTier {
    if dimension.is_unspecified() {
        trace!("Unspecified resolution, using {}", DEFAULT_TIER);
        return DEFAULT_TIER.tier();
    }

    let Dimension { width, height } = dimension.landscape();

    let width_diffs: Vec<u64> = LADDER
        .iter()
        .map(|t| u64::from(t.width().abs_diff(width)))
        .collect();
    let height_diffs: Vec<u64> = LADDER
        .iter()
        .map(|t| u64::from(t.height().abs_diff(height)))
        .collect();

    let closest_width = min_index(&width_diffs);
    let closest_height = min_index(&height_diffs);

    let selected = if closest_width < closest_height {
        closest_width
    } else {
        closest_height
    };

    let tier = &LADDER[selected];
    trace!(
        input = %dimension,
        width_match = %LADDER[closest_width].id,
        height_match = %LADDER[closest_height].id,
        selected = %tier.id,
        "Classified resolution"
    );
    tier
}

/// Same as [`classify`] for callers holding signed sizes.
pub fn classify_signed(width: i64, height: i64) -> Result<&'static ResolutionTier, AppError> {
    let dimension = Dimension::from_signed(width, height)?;
    Ok(classify_dimension(dimension))
}
