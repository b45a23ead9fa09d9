//! Categorized portfolio holdings models
//!
//! The data service ingests an uploaded statement and reports holdings
//! already bucketed into five fixed categories. Gain/loss fields arrive as
//! the statement's formatted strings ("-$1,234.56", "+2.5%") and are read
//! by stripping every non-numeric character, the same way the tables this
//! client replaces read them.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;

use super::money::{Money, MoneyParseError};

/// The fixed holding categories the data service buckets into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingCategory {
    Foundational,
    Growth,
    Dividend,
    Bonds,
    Uncategorized,
}

impl HoldingCategory {
    /// All categories in report order
    pub fn all() -> &'static [Self] {
        &[
            Self::Foundational,
            Self::Growth,
            Self::Dividend,
            Self::Bonds,
            Self::Uncategorized,
        ]
    }

    /// The key used in the service's JSON maps
    ///
    /// The service lowercases the four named buckets but capitalizes
    /// "Uncategorized".
    pub fn wire_key(&self) -> &'static str {
        match self {
            Self::Foundational => "foundational",
            Self::Growth => "growth",
            Self::Dividend => "dividend",
            Self::Bonds => "bonds",
            Self::Uncategorized => "Uncategorized",
        }
    }

    /// Capitalized name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Foundational => "Foundational",
            Self::Growth => "Growth",
            Self::Dividend => "Dividend",
            Self::Bonds => "Bonds",
            Self::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for HoldingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One holding row as reported by the data service
///
/// Field names mirror the statement columns the service passes through.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingRow {
    #[serde(rename = "Symbol")]
    pub symbol: String,

    #[serde(rename = "Description", default)]
    pub description: String,

    /// Share quantity; the service sends a number, but statements have
    /// been seen to carry it as a formatted string
    #[serde(rename = "Quantity", default, deserialize_with = "de_loose_number")]
    pub quantity: f64,

    /// Formatted currency string, e.g. "-$1,234.56"
    #[serde(rename = "Total Gain/Loss Dollar")]
    pub gain_loss_dollar: String,

    /// Formatted percent string, e.g. "+2.5%"
    #[serde(rename = "Total Gain/Loss Percent")]
    pub gain_loss_percent: String,
}

impl HoldingRow {
    /// The gain/loss dollar figure, parsed by stripping non-numeric characters
    pub fn gain_loss_dollar_amount(&self) -> Result<Money, MoneyParseError> {
        Money::parse_loose(&self.gain_loss_dollar)
    }

    /// The gain/loss percent figure, parsed by stripping non-numeric characters
    pub fn gain_loss_percent_value(&self) -> Result<f64, MoneyParseError> {
        loose_f64(&self.gain_loss_percent)
            .ok_or_else(|| MoneyParseError::InvalidFormat(self.gain_loss_percent.clone()))
    }
}

/// The full categorized holdings report for one account
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoldingsReport {
    /// Per-category quantity totals, the input for the distribution chart
    #[serde(rename = "chartData", default)]
    pub chart_data: BTreeMap<String, f64>,

    /// Per-category holding rows
    #[serde(rename = "tableData", default)]
    pub table_data: BTreeMap<String, Vec<HoldingRow>>,

    /// Per-symbol weekly recurring investment amounts
    #[serde(
        rename = "recurringInvestments",
        default,
        deserialize_with = "de_loose_number_map"
    )]
    pub recurring_investments: BTreeMap<String, f64>,
}

impl HoldingsReport {
    /// The rows of one category, empty if the service reported none
    pub fn rows(&self, category: HoldingCategory) -> &[HoldingRow] {
        self.table_data
            .get(category.wire_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The recurring investment amount for a symbol, if one is set
    pub fn recurring_for(&self, symbol: &str) -> Option<f64> {
        self.recurring_investments.get(symbol).copied()
    }
}

/// Parse a number out of a formatted string by stripping everything that is
/// not a digit, a decimal point, or a minus sign
fn loose_f64(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().ok()
}

/// A value the service may deliver as a JSON number or a formatted string
#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrStr {
    Num(f64),
    Str(String),
}

impl NumOrStr {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Num(n) => Ok(n),
            Self::Str(s) => {
                loose_f64(&s).ok_or_else(|| E::custom(format!("unparsable number: {:?}", s)))
            }
        }
    }
}

fn de_loose_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    NumOrStr::deserialize(deserializer)?.into_f64()
}

fn de_loose_number_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, f64>, D::Error> {
    let raw = BTreeMap::<String, NumOrStr>::deserialize(deserializer)?;

    let mut out = BTreeMap::new();
    for (key, value) in raw {
        out.insert(key, value.into_f64()?);
    }
    Ok(out)
}
