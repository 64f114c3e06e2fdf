use crate::analyzer::{BitrateLevel, Dimension, ResolutionTier, TierId};
use serde::Serialize;

/// Human readable bitrate without losing digits, e.g. `800 kbps`, `8.40 Mbps`
/// or `1.125 Mbps`
pub fn format_bitrate(bits_per_second: u64) -> String {
    const KILO: u64 = 1_000;
    const MEGA: u64 = 1_000_000;

    if bits_per_second >= MEGA {
        format!(
            "{} Mbps",
            decimal(bits_per_second / MEGA, bits_per_second % MEGA, 6, 2)
        )
    } else if bits_per_second >= KILO {
        format!(
            "{} kbps",
            decimal(bits_per_second / KILO, bits_per_second % KILO, 3, 0)
        )
    } else {
        format!("{} bps", bits_per_second)
    }
}

/// `whole.fraction` with trailing zeros trimmed down to `min_places`
fn decimal(whole: u64, fraction: u64, places: usize, min_places: usize) -> String {
    let digits = format!("{:0width$}", fraction, width = places);
    let trimmed = digits.trim_end_matches('0');
    let kept = &digits[..trimmed.len().max(min_places)];
    if kept.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, kept)
    }
}

/// Serializable view of a tier, undefined levels as `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierReport {
    pub tier: TierId,
    pub width: u32,
    pub height: u32,
    pub low: Option<u64>,
    pub mid: Option<u64>,
    pub mid_high: Option<u64>,
    pub high: Option<u64>,
}

impl From<&ResolutionTier> for TierReport {
    fn from(tier: &ResolutionTier) -> Self {
        Self {
            tier: tier.id,
            width: tier.width(),
            height: tier.height(),
            low: tier.bitrate(BitrateLevel::Low),
            mid: tier.bitrate(BitrateLevel::Mid),
            mid_high: tier.bitrate(BitrateLevel::MidHigh),
            high: tier.bitrate(BitrateLevel::High),
        }
    }
}

/// Rate picked for one level of a classified stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub input: Dimension,
    pub tier: TierId,
    pub level: BitrateLevel,
    pub bitrate: u64,
}

impl LevelReport {
    pub fn new(input: Dimension, tier: &ResolutionTier, level: BitrateLevel) -> Self {
        Self {
            input,
            tier: tier.id,
            level,
            bitrate: tier.target_bitrate(level),
        }
    }

    pub fn text_line(&self) -> String {
        format!("{} {} {}", self.tier, self.level, self.bitrate)
    }
}

/// One line summary: `1080p 1920x1080 low=3.00 Mbps ... high=8.40 Mbps`
pub fn tier_line(tier: &ResolutionTier) -> String {
    let levels: Vec<String> = BitrateLevel::ALL
        .iter()
        .map(|&level| {
            let rate = tier
                .bitrate(level)
                .map(format_bitrate)
                .unwrap_or_else(|| "-".to_string());
            format!("{}={}", level, rate)
        })
        .collect();
    format!("{} {} {}", tier.id, tier.resolution, levels.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bitrate() {
        assert_eq!(format_bitrate(8_400_000), "8.40 Mbps");
        assert_eq!(format_bitrate(3_150_000), "3.15 Mbps");
        assert_eq!(format_bitrate(1_125_000), "1.125 Mbps");
        assert_eq!(format_bitrate(10_000_000), "10.00 Mbps");
        assert_eq!(format_bitrate(1_500), "1.5 kbps");
        assert_eq!(format_bitrate(800_000), "800 kbps");
        assert_eq!(format_bitrate(999), "999 bps");
    }

    #[test]
    fn test_tier_line_marks_undefined_levels() {
        assert_eq!(
            tier_line(TierId::P360.tier()),
            "360p 640x360 low=500 kbps mid=800 kbps mid-high=- high=1.40 Mbps"
        );
    }

    #[test]
    fn test_tier_line_keeps_table_precision() {
        assert_eq!(
            tier_line(TierId::P540.tier()),
            "540p 960x540 low=1.125 Mbps mid=1.80 Mbps mid-high=2.70 Mbps high=3.15 Mbps"
        );
    }

    #[test]
    fn test_report_json() {
        let report = TierReport::from(TierId::P144.tier());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tier"], "144p");
        assert_eq!(json["width"], 176);
        assert_eq!(json["mid_high"], serde_json::Value::Null);
        assert_eq!(json["high"], 120_000);
    }

    #[test]
    fn test_level_report_falls_back() {
        let report = LevelReport::new(
            Dimension::new(2560, 1440),
            TierId::P1440.tier(),
            BitrateLevel::MidHigh,
        );
        assert_eq!(report.bitrate, 10_400_000);
        assert_eq!(report.text_line(), "1440p mid-high 10400000");
    }
}
