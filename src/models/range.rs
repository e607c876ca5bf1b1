use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::str::FromStr;

/// Chart range selected by the caller.
///
/// Ranges are counted in trailing periods of the series, not calendar time:
/// a monthly NAV history filtered to `3m` keeps its last three points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    #[default]
    All,
}

impl TimeRange {
    /// Parse a range tag. Unknown tags fall back to [`TimeRange::All`].
    pub fn parse_lenient(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "1m" => TimeRange::OneMonth,
            "3m" => TimeRange::ThreeMonths,
            "6m" => TimeRange::SixMonths,
            "1y" => TimeRange::OneYear,
            _ => TimeRange::All,
        }
    }

    /// Number of trailing periods kept, `None` meaning the full series.
    pub fn trailing_periods(&self) -> Option<usize> {
        match self {
            TimeRange::OneMonth => Some(1),
            TimeRange::ThreeMonths => Some(3),
            TimeRange::SixMonths => Some(6),
            TimeRange::OneYear => Some(12),
            TimeRange::All => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1m",
            TimeRange::ThreeMonths => "3m",
            TimeRange::SixMonths => "6m",
            TimeRange::OneYear => "1y",
            TimeRange::All => "all",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for TimeRange {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TimeRange::parse_lenient(s))
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(TimeRange::parse_lenient(&tag))
    }
}
