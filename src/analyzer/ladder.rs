use super::dimension::Dimension;
use serde::{Deserialize, Serialize};

/// Rung of the resolution ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierId {
    #[serde(rename = "144p")]
    P144,
    #[serde(rename = "240p")]
    P240,
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "540p")]
    P540,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "1440p")]
    P1440,
    #[serde(rename = "2160p")]
    P2160,
}

impl TierId {
    pub fn display_name(&self) -> &'static str {
        match self {
            TierId::P144 => "144p",
            TierId::P240 => "240p",
            TierId::P360 => "360p",
            TierId::P480 => "480p",
            TierId::P540 => "540p",
            TierId::P720 => "720p",
            TierId::P1080 => "1080p",
            TierId::P1440 => "1440p",
            TierId::P2160 => "2160p",
        }
    }

    /// Ladder entry for this id
    pub fn tier(self) -> &'static ResolutionTier {
        &LADDER[self as usize]
    }
}

impl std::fmt::Display for TierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Named nominal bitrate of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BitrateLevel {
    Low,
    Mid,
    MidHigh,
    #[default]
    High,
}

impl BitrateLevel {
    pub const ALL: [BitrateLevel; 4] = [
        BitrateLevel::Low,
        BitrateLevel::Mid,
        BitrateLevel::MidHigh,
        BitrateLevel::High,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BitrateLevel::Low => "low",
            BitrateLevel::Mid => "mid",
            BitrateLevel::MidHigh => "mid-high",
            BitrateLevel::High => "high",
        }
    }

    /// Next level down, used when a tier leaves a level undefined
    fn lower(self) -> Option<Self> {
        match self {
            BitrateLevel::Low => None,
            BitrateLevel::Mid => Some(BitrateLevel::Low),
            BitrateLevel::MidHigh => Some(BitrateLevel::Mid),
            BitrateLevel::High => Some(BitrateLevel::MidHigh),
        }
    }
}

impl std::str::FromStr for BitrateLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitrateLevel::ALL
            .into_iter()
            .find(|level| level.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown bitrate level '{}', expected low, mid, mid-high or high", s))
    }
}

impl std::fmt::Display for BitrateLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Canonical resolution and its nominal bitrates, in bits per second.
///
/// A zero rate means the tier does not define that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionTier {
    pub id: TierId,
    pub resolution: Dimension,
    pub low: u64,
    pub mid: u64,
    pub mid_high: u64,
    pub high: u64,
}

impl ResolutionTier {
    /// Rate for `level`, `None` when the tier leaves it undefined
    pub fn bitrate(&self, level: BitrateLevel) -> Option<u64> {
        Some(self.bitrate_or_zero(level)).filter(|&rate| rate > 0)
    }

    pub fn bitrate_or_zero(&self, level: BitrateLevel) -> u64 {
        match level {
            BitrateLevel::Low => self.low,
            BitrateLevel::Mid => self.mid,
            BitrateLevel::MidHigh => self.mid_high,
            BitrateLevel::High => self.high,
        }
    }

    /// Rate for `level`, stepping down to the nearest defined level below it.
    ///
    /// Every tier defines `low`, so this is never zero.
    pub fn target_bitrate(&self, level: BitrateLevel) -> u64 {
        let mut current = Some(level);
        while let Some(l) = current {
            if let Some(rate) = self.bitrate(l) {
                return rate;
            }
            current = l.lower();
        }
        self.low
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }
}

const KBPS: u64 = 1000;

const fn tier(
    id: TierId,
    width: u32,
    height: u32,
    rates_kbps: [u64; 4],
) -> ResolutionTier {
    ResolutionTier {
        id,
        resolution: Dimension::new(width, height),
        low: rates_kbps[0] * KBPS,
        mid: rates_kbps[1] * KBPS,
        mid_high: rates_kbps[2] * KBPS,
        high: rates_kbps[3] * KBPS,
    }
}

/// Landscape ladder from 144p to 2160p, ordered by `TierId`.
///
/// Order is load-bearing: the classifier breaks ties by index.
pub static LADDER: [ResolutionTier; 9] = [
    tier(TierId::P144, 176, 144, [80, 100, 0, 120]),
    tier(TierId::P240, 426, 240, [250, 400, 0, 700]),
    tier(TierId::P360, 640, 360, [500, 800, 0, 1400]),
    tier(TierId::P480, 854, 480, [750, 1200, 0, 2100]),
    tier(TierId::P540, 960, 540, [1125, 1800, 2700, 3150]),
    tier(TierId::P720, 1280, 720, [1500, 2400, 3800, 4200]),
    tier(TierId::P1080, 1920, 1080, [3000, 4800, 6200, 8400]),
    tier(TierId::P1440, 2560, 1440, [6000, 10400, 0, 18200]),
    tier(TierId::P2160, 3840, 2160, [10000, 16000, 0, 28000]),
];

/// Returned for streams whose size is not known yet
pub const DEFAULT_TIER: TierId = TierId::P540;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_order_matches_ids() {
        for (index, entry) in LADDER.iter().enumerate() {
            assert_eq!(entry.id as usize, index);
            assert_eq!(entry.id.tier(), entry);
        }
    }

    #[test]
    fn test_ladder_area_strictly_increasing() {
        for pair in LADDER.windows(2) {
            assert!(
                pair[0].resolution.area() < pair[1].resolution.area(),
                "{} should be smaller than {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_every_tier_has_low_and_high() {
        for entry in &LADDER {
            assert!(entry.low > 0, "{} has no low rate", entry.id);
            assert!(entry.high > 0, "{} has no high rate", entry.id);
            assert!(entry.low <= entry.high);
        }
    }

    #[test]
    fn test_undefined_levels() {
        let p144 = TierId::P144.tier();
        assert_eq!(p144.bitrate(BitrateLevel::MidHigh), None);
        assert_eq!(p144.bitrate_or_zero(BitrateLevel::MidHigh), 0);
        assert_eq!(p144.bitrate(BitrateLevel::Low), Some(80_000));

        let p1080 = TierId::P1080.tier();
        assert_eq!(p1080.bitrate(BitrateLevel::MidHigh), Some(6_200_000));
    }

    #[test]
    fn test_target_bitrate_steps_down() {
        let p1440 = TierId::P1440.tier();
        assert_eq!(p1440.target_bitrate(BitrateLevel::MidHigh), 10_400_000);
        assert_eq!(p1440.target_bitrate(BitrateLevel::High), 18_200_000);

        let p720 = TierId::P720.tier();
        assert_eq!(p720.target_bitrate(BitrateLevel::MidHigh), 3_800_000);
    }

    #[test]
    fn test_level_serde_names() {
        assert_eq!(
            serde_json::to_string(&BitrateLevel::MidHigh).unwrap(),
            "\"mid-high\""
        );
        assert_eq!(serde_json::to_string(&TierId::P1080).unwrap(), "\"1080p\"");
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("mid-high".parse::<BitrateLevel>(), Ok(BitrateLevel::MidHigh));
        assert_eq!("LOW".parse::<BitrateLevel>(), Ok(BitrateLevel::Low));
        assert!("ultra".parse::<BitrateLevel>().is_err());
    }
}
