//! Scroll-linked timeline ranges.
//!
//! A scroll-interactive animation is bound to the element's view timeline
//! and runs between two [`RangeOffset`]s such as `entry 0%` and `exit 100%`.
//! The strings are handed to the platform verbatim, so parsing here only
//! guarantees they are well formed.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    schema::{keyword_enum, Keyword},
    MotionError, Result,
};

keyword_enum!(
    /// Named segment of an element's view timeline.
    RangeName("range-name") {
        Cover => "cover",
        Contain => "contain",
        Entry => "entry",
        Exit => "exit",
        EntryCrossing => "entry-crossing",
        ExitCrossing => "exit-crossing",
    }
);

/// Position inside a named timeline range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeOffset {
    pub name: RangeName,
    /// Always within `0.0..=100.0`.
    pub percent: f64,
}

impl RangeOffset {
    pub fn new(name: RangeName, percent: f64) -> Self {
        // `-0` compares equal to zero but would print as `-0%`.
        let percent = if percent.is_finite() && percent != 0.0 {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self { name, percent }
    }
}

impl fmt::Display for RangeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.name, self.percent)
    }
}

impl FromStr for RangeOffset {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || MotionError::InvalidRange(s.to_string());
        let (name, percent) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let name = RangeName::parse(name).ok_or_else(invalid)?;
        let percent: f64 = percent
            .trim()
            .strip_suffix('%')
            .ok_or_else(invalid)?
            .trim()
            .parse()
            .map_err(|_| invalid())?;
        if !(0.0..=100.0).contains(&percent) {
            return Err(invalid());
        }
        Ok(Self::new(name, percent))
    }
}

impl Serialize for RangeOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RangeOffset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Start and end of a scroll-linked animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRange {
    pub start: RangeOffset,
    pub end: RangeOffset,
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self {
            start: RangeOffset::new(RangeName::Entry, 0.0),
            end: RangeOffset::new(RangeName::Exit, 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_offsets_the_way_css_expects() {
        assert_eq!(RangeOffset::new(RangeName::Entry, 0.0).to_string(), "entry 0%");
        assert_eq!(
            RangeOffset::new(RangeName::ExitCrossing, 12.5).to_string(),
            "exit-crossing 12.5%"
        );
    }

    #[test]
    fn parses_offsets() {
        let offset: RangeOffset = "contain 40%".parse().unwrap();
        assert_eq!(offset.name, RangeName::Contain);
        assert_eq!(offset.percent, 40.0);

        assert!("contain".parse::<RangeOffset>().is_err());
        assert!("middle 10%".parse::<RangeOffset>().is_err());
        assert!("cover 140%".parse::<RangeOffset>().is_err());
        assert!("cover 10".parse::<RangeOffset>().is_err());
    }

    #[test]
    fn new_clamps_percent() {
        assert_eq!(RangeOffset::new(RangeName::Cover, 250.0).percent, 100.0);
        assert_eq!(RangeOffset::new(RangeName::Cover, f64::NAN).percent, 0.0);
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        let offset: RangeOffset = "cover -0%".parse().unwrap();
        assert_eq!(offset.to_string(), "cover 0%");
        assert!(offset.percent.is_sign_positive());
    }
}
