use std::fmt;
use std::path::Path;

/// CEFR vocabulary level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    A1, // Beginner
    A2, // Elementary
    B1, // Intermediate
    B2, // Upper intermediate
    C1, // Advanced
    C2, // Proficient
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    /// Parse level from string, case-insensitive
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a1" => Some(Level::A1),
            "a2" => Some(Level::A2),
            "b1" => Some(Level::B1),
            "b2" => Some(Level::B2),
            "c1" => Some(Level::C1),
            "c2" => Some(Level::C2),
            _ => None,
        }
    }

    /// Level named by a word list's file stem, e.g. `c2.json`
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(Self::from_str)
    }

    /// Level for a 1-based difficulty index, 1 = A1 .. 6 = C2
    pub fn from_difficulty(difficulty: u8) -> Option<Self> {
        match difficulty {
            1..=6 => Some(Self::ALL[difficulty as usize - 1]),
            _ => None,
        }
    }

    /// Tag value and word list file stem
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A1 => "a1",
            Level::A2 => "a2",
            Level::B1 => "b1",
            Level::B2 => "b2",
            Level::C1 => "c1",
            Level::C2 => "c2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }

    pub fn difficulty(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn description(&self) -> &'static str {
        match self {
            Level::A1 => "A1 (Beginner)",
            Level::A2 => "A2 (Elementary)",
            Level::B1 => "B1 (Intermediate)",
            Level::B2 => "B2 (Upper Intermediate)",
            Level::C1 => "C1 (Advanced)",
            Level::C2 => "C2 (Proficient)",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
