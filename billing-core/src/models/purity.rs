use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gold fineness in karats. Only the grades traded by the shop are valid;
/// everything else coming from collaborator data is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purity {
    K10,
    K14,
    K18,
    K22,
    K24,
}

impl Purity {
    /// The karat value as an exact decimal, for use in valuation formulas.
    pub fn karats(&self) -> Decimal {
        match self {
            Self::K10 => Decimal::from(10u32),
            Self::K14 => Decimal::from(14u32),
            Self::K18 => Decimal::from(18u32),
            Self::K22 => Decimal::from(22u32),
            Self::K24 => Decimal::from(24u32),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::K10 => "10K",
            Self::K14 => "14K",
            Self::K18 => "18K",
            Self::K22 => "22K",
            Self::K24 => "24K",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "10" | "10K" => Some(Self::K10),
            "14" | "14K" => Some(Self::K14),
            "18" | "18K" => Some(Self::K18),
            "22" | "22K" => Some(Self::K22),
            "24" | "24K" => Some(Self::K24),
            _ => None,
        }
    }

    /// Maps a numeric karat value (as delivered by the item catalog) onto the
    /// supported grade set. Returns `None` for anything outside it.
    pub fn from_karats(value: Decimal) -> Option<Self> {
        [Self::K10, Self::K14, Self::K18, Self::K22, Self::K24]
            .into_iter()
            .find(|p| p.karats() == value)
    }
}
