//! Confidence classification for VIIRS hotspot detections.
//!
//! The feed reports detection confidence as a single raw token. All
//! downstream classification (display buckets, map colors, statistics
//! counting) goes through [`Confidence`] so the mapping lives in one place.

/// Detection confidence, parsed from the feed's raw code.
///
/// | Code       | Variant   | Bucket   | Color     |
/// |------------|-----------|----------|-----------|
/// | `h`        | High      | High     | `#ff0000` |
/// | `n`        | Nominal   | Medium   | `#ffa500` |
/// | `l`        | Low       | Low      | `#ffff00` |
/// | anything else | Unknown | Low     | `#ffff00` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Nominal,
    Low,
    Unknown,
}

impl Confidence {
    /// Parses the raw feed code. Matching is exact and case-sensitive; the
    /// feed emits lowercase single-letter codes.
    pub fn from_code(code: &str) -> Self {
        match code {
            "h" => Confidence::High,
            "n" => Confidence::Nominal,
            "l" => Confidence::Low,
            _ => Confidence::Unknown,
        }
    }

    /// Human-readable bucket label shown in per-detection views.
    pub fn bucket(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Nominal => "Medium",
            Confidence::Low | Confidence::Unknown => "Low",
        }
    }

    /// Display color token for map rendering front ends.
    pub fn color(self) -> &'static str {
        match self {
            Confidence::High => "#ff0000",
            Confidence::Nominal => "#ffa500",
            Confidence::Low | Confidence::Unknown => "#ffff00",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(Confidence::from_code("h"), Confidence::High);
        assert_eq!(Confidence::from_code("n"), Confidence::Nominal);
        assert_eq!(Confidence::from_code("l"), Confidence::Low);
    }

    #[test]
    fn test_bucket_color_pairs() {
        assert_eq!(Confidence::High.bucket(), "High");
        assert_eq!(Confidence::High.color(), "#ff0000");
        assert_eq!(Confidence::Nominal.bucket(), "Medium");
        assert_eq!(Confidence::Nominal.color(), "#ffa500");
        assert_eq!(Confidence::Low.bucket(), "Low");
        assert_eq!(Confidence::Low.color(), "#ffff00");
    }

    #[test]
    fn test_unrecognized_codes_share_default() {
        // Codes are case-sensitive, so "H" is just as unknown as garbage.
        for code in ["", "H", "high", "x", "42", "hh"] {
            let conf = Confidence::from_code(code);
            assert_eq!(conf, Confidence::Unknown, "code {:?}", code);
            assert_eq!(conf.bucket(), "Low");
            assert_eq!(conf.color(), "#ffff00");
        }
    }
}
