use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Poll interval in minutes used when input is missing or unusable.
pub const DEFAULT_SCAN_INTERVAL_MINUTES: u32 = 15;

/// Normalized feed poll interval in minutes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanInterval(NonZeroU32);

impl ScanInterval {
    /// Parse raw user input from its leading integer, so `"7.5"` is 7 and `"20 min"` is 20.
    ///
    /// Input without leading digits, or whose integer is zero, negative, or out of range,
    /// yields the default.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        match rest[..digits_end].parse::<i64>() {
            Ok(minutes) if negative => Self::from_minutes(-minutes),
            Ok(minutes) => Self::from_minutes(minutes),
            Err(_) => Self::default(),
        }
    }

    /// Clamp a numeric value to the positive range, falling back to the default.
    pub fn from_minutes(minutes: i64) -> Self {
        u32::try_from(minutes)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .unwrap_or_default()
    }

    pub fn minutes(&self) -> u32 {
        self.0.get()
    }
}

impl Default for ScanInterval {
    fn default() -> Self {
        Self(NonZeroU32::MIN.saturating_add(DEFAULT_SCAN_INTERVAL_MINUTES - 1))
    }
}

impl fmt::Display for ScanInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ScanInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.minutes())
    }
}

/// Integers and strings go through the lenient normalization and floats are truncated;
/// any other value yields the default.
impl<'de> Deserialize<'de> for ScanInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Float(f64),
            Text(String),
            Other(serde::de::IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(minutes) => ScanInterval::from_minutes(minutes),
            Raw::Float(minutes) => ScanInterval::from_minutes(minutes.trunc() as i64),
            Raw::Other(_) => ScanInterval::default(),
            Raw::Text(text) => ScanInterval::parse(&text),
        })
    }
}
