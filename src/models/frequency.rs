//! Recurrence frequency for budget items
//!
//! A frequency is a pair of a positive count and a unit, exchanged with the
//! data service as the string `"<count> <unit>"` (e.g. "2 week"). Unit
//! matching is deliberately tolerant: anything containing "week", "month",
//! or "year" maps to that unit, and any other label is preserved so the
//! normalizer can apply its fallback conversion.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Recurrence unit of a budget item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyUnit {
    Week,
    Month,
    Year,
    /// A label the service sent that matches none of the known units
    Other(String),
}

impl FrequencyUnit {
    /// Match a unit label the way the original front end did: by substring,
    /// so "week", "weeks", and "weekly" all land on Week
    pub fn match_label(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        if lower.contains("week") {
            Self::Week
        } else if lower.contains("month") {
            Self::Month
        } else if lower.contains("year") {
            Self::Year
        } else {
            Self::Other(label.to_string())
        }
    }

    /// The singular label used on the wire
    pub fn wire_label(&self) -> &str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Other(label) => label,
        }
    }

    /// The label used for display. Always plural, regardless of count,
    /// matching the behavior of the tables this client replaces.
    pub fn display_label(&self) -> String {
        match self {
            Self::Week => "weeks".to_string(),
            Self::Month => "months".to_string(),
            Self::Year => "years".to_string(),
            Self::Other(label) => {
                if label.ends_with('s') {
                    label.clone()
                } else {
                    format!("{}s", label)
                }
            }
        }
    }
}

/// How often a budget item's amount recurs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency {
    count: u32,
    unit: FrequencyUnit,
}

impl Frequency {
    /// Create a frequency, rejecting a zero count
    pub fn new(count: u32, unit: FrequencyUnit) -> Result<Self, FrequencyParseError> {
        if count == 0 {
            return Err(FrequencyParseError::ZeroCount);
        }
        Ok(Self { count, unit })
    }

    /// The recurrence count (always >= 1)
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The recurrence unit
    pub fn unit(&self) -> &FrequencyUnit {
        &self.unit
    }
}

impl FromStr for Frequency {
    type Err = FrequencyParseError;

    /// Parse the wire form `"<count> <unit>"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();

        let count_str = parts.next().ok_or(FrequencyParseError::Empty)?;
        let count: u32 = count_str
            .parse()
            .map_err(|_| FrequencyParseError::InvalidCount(count_str.to_string()))?;

        let unit_str = parts.next().ok_or(FrequencyParseError::MissingUnit)?;

        Self::new(count, FrequencyUnit::match_label(unit_str))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.unit.display_label())
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{} {}", self.count, self.unit.wire_label()))
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for frequency parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyParseError {
    Empty,
    InvalidCount(String),
    ZeroCount,
    MissingUnit,
}

impl fmt::Display for FrequencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Frequency cannot be empty"),
            Self::InvalidCount(s) => write!(f, "Invalid frequency count: {}", s),
            Self::ZeroCount => write!(f, "Frequency count must be at least 1"),
            Self::MissingUnit => write!(f, "Frequency is missing a unit"),
        }
    }
}

impl std::error::Error for FrequencyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let f: Frequency = "2 weeks".parse().unwrap();
        assert_eq!(f.count(), 2);
        assert_eq!(*f.unit(), FrequencyUnit::Week);

        let f: Frequency = "1 month".parse().unwrap();
        assert_eq!(f.count(), 1);
        assert_eq!(*f.unit(), FrequencyUnit::Month);

        let f: Frequency = "3 year".parse().unwrap();
        assert_eq!(f.count(), 3);
        assert_eq!(*f.unit(), FrequencyUnit::Year);
    }

    #[test]
    fn test_parse_unrecognized_unit() {
        let f: Frequency = "2 fortnight".parse().unwrap();
        assert_eq!(*f.unit(), FrequencyUnit::Other("fortnight".to_string()));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Frequency>(), Err(FrequencyParseError::Empty));
        assert_eq!(
            "x week".parse::<Frequency>(),
            Err(FrequencyParseError::InvalidCount("x".to_string()))
        );
        assert_eq!(
            "0 week".parse::<Frequency>(),
            Err(FrequencyParseError::ZeroCount)
        );
        assert_eq!(
            "2".parse::<Frequency>(),
            Err(FrequencyParseError::MissingUnit)
        );
    }

    #[test]
    fn test_display_always_pluralizes() {
        let one_week: Frequency = "1 week".parse().unwrap();
        assert_eq!(one_week.to_string(), "1 weeks");

        let two_months: Frequency = "2 month".parse().unwrap();
        assert_eq!(two_months.to_string(), "2 months");
    }

    #[test]
    fn test_wire_serialization() {
        let f: Frequency = "2 weeks".parse().unwrap();
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, "\"2 week\"");

        let back: Frequency = serde_json::from_str("\"1 year\"").unwrap();
        assert_eq!(back.count(), 1);
        assert_eq!(*back.unit(), FrequencyUnit::Year);
    }
}
