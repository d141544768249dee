use std::fmt;

use serde::{Deserialize, Serialize};

/// Crops offered in the scale of finance catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropName {
    Groundnut,
    Onion,
    Rice,
    Maize,
    Cotton,
    Wheat,
    Sugarcane,
    Tomato,
    Chili,
    Turmeric,
    Banana,
    Coconut,
}

impl CropName {
    /// Every catalog entry, in the order the plan form lists them.
    pub const ALL: [CropName; 12] = [
        Self::Groundnut,
        Self::Onion,
        Self::Rice,
        Self::Maize,
        Self::Cotton,
        Self::Wheat,
        Self::Sugarcane,
        Self::Tomato,
        Self::Chili,
        Self::Turmeric,
        Self::Banana,
        Self::Coconut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groundnut => "Groundnut",
            Self::Onion => "Onion",
            Self::Rice => "Rice",
            Self::Maize => "Maize",
            Self::Cotton => "Cotton",
            Self::Wheat => "Wheat",
            Self::Sugarcane => "Sugarcane",
            Self::Tomato => "Tomato",
            Self::Chili => "Chili",
            Self::Turmeric => "Turmeric",
            Self::Banana => "Banana",
            Self::Coconut => "Coconut",
        }
    }

    /// Case-insensitive lookup by catalog name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|crop| crop.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for CropName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Growing season a crop is planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
    Perennial,
}

impl Season {
    pub const ALL: [Season; 4] = [Self::Kharif, Self::Rabi, Self::Summer, Self::Perennial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kharif => "Kharif",
            Self::Rabi => "Rabi",
            Self::Summer => "Summer",
            Self::Perennial => "Perennial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|season| season.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Season {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
