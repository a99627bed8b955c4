//! Report locale used for chart labels.

use serde::{Deserialize, Serialize};

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_PT_BR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Locale for human-readable labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Brazilian Portuguese.
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    /// Returns the capitalized three-letter abbreviation for a month (1-12).
    ///
    /// Out-of-range months are clamped into 1-12.
    #[must_use]
    pub fn month_abbreviation(self, month: u32) -> &'static str {
        let index = month.clamp(1, 12) as usize - 1;
        match self {
            Self::En => MONTHS_EN[index],
            Self::PtBr => MONTHS_PT_BR[index],
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::PtBr => write!(f, "pt-BR"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Self::En),
            "pt-br" | "pt" => Ok(Self::PtBr),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}
