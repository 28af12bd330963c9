use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ColorTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WineCategory {
    Red,
    White,
}

impl WineCategory {
    /// Series order used by the scatter plot.
    pub fn all() -> &'static [WineCategory] {
        &[WineCategory::Red, WineCategory::White]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::White => "White",
        }
    }

    pub fn series_name(&self) -> &'static str {
        match self {
            Self::Red => "Red Wine",
            Self::White => "White Wine",
        }
    }
}

impl fmt::Display for WineCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slice of the red/white split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineTypeSlice {
    pub category: WineCategory,
    pub label: String,
    pub count: u32,
    pub color: ColorTag,
}

/// A single (alcohol %, quality) observation for the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlcoholQualitySample {
    pub alcohol: Decimal,
    pub quality: u8,
    pub category: WineCategory,
}

impl AlcoholQualitySample {
    pub fn new(
        alcohol: Decimal,
        quality: u8,
        category: WineCategory,
    ) -> Self {
        Self {
            alcohol,
            quality,
            category,
        }
    }
}
