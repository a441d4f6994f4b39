//! Posición ordinal (1-based) de un paso dentro del pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Posición 1-based de un paso. `Display` produce "1st", "2nd", "11th"...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ordinal(usize);

impl Ordinal {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// A partir de un índice 0-based.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn position(self) -> usize {
        self.0
    }

    pub fn suffix(self) -> &'static str {
        match self.0 {
            11..=19 => "th",
            n if n % 10 == 1 => "st",
            n if n % 10 == 2 => "nd",
            n if n % 10 == 3 => "rd",
            _ => "th",
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.suffix())
    }
}

pub fn ordinal(position: usize) -> String {
    Ordinal::new(position).to_string()
}
