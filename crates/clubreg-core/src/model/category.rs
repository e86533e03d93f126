use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ClubRegError;

/// Event category
///
/// Serialized with the display labels, including the accent on `Guías`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Aventureros,
    Conquistadores,
    #[serde(rename = "Guías")]
    Guias,
    Zona,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Aventureros,
        Category::Conquistadores,
        Category::Guias,
        Category::Zona,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Aventureros => "Aventureros",
            Category::Conquistadores => "Conquistadores",
            Category::Guias => "Guías",
            Category::Zona => "Zona",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ClubRegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        match folded.as_str() {
            "aventureros" => Ok(Category::Aventureros),
            "conquistadores" => Ok(Category::Conquistadores),
            "guías" | "guias" => Ok(Category::Guias),
            "zona" => Ok(Category::Zona),
            _ => Err(ClubRegError::UnknownCategory {
                input: s.to_string(),
            }),
        }
    }
}
