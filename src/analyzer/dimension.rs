use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Frame size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Unknown size, reported by sources that have not negotiated caps yet
    pub fn is_unspecified(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Portrait sizes are rotated so the larger side is the width
    pub fn landscape(self) -> Self {
        if self.width < self.height {
            Self::new(self.height, self.width)
        } else {
            self
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Accept signed input from loosely typed callers
    pub fn from_signed(width: i64, height: i64) -> Result<Self, AppError> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self::new(w, h)),
            _ => Err(AppError::InvalidDimension { width, height }),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_portrait() {
        assert_eq!(Dimension::new(1080, 1920).landscape(), Dimension::new(1920, 1080));
        assert_eq!(Dimension::new(1920, 1080).landscape(), Dimension::new(1920, 1080));
        assert_eq!(Dimension::new(500, 500).landscape(), Dimension::new(500, 500));
    }

    #[test]
    fn test_from_signed_rejects_out_of_range() {
        assert!(matches!(
            Dimension::from_signed(-1, 720),
            Err(AppError::InvalidDimension { width: -1, height: 720 })
        ));
        assert!(Dimension::from_signed(1280, i64::from(u32::MAX) + 1).is_err());
        assert_eq!(Dimension::from_signed(0, 0).unwrap(), Dimension::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::new(640, 360).to_string(), "640x360");
    }
}
