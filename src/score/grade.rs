use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Letter grade from A+ (90-100) to F (0-49). Variants are declared worst
/// first so the derived ordering is F < D < C < B < A < A+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl Grade {
    pub const ALL: [Grade; 6] = [
        Grade::APlus,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Gate rank: A+ 6 down to F 1.
    pub fn rank(self) -> u8 {
        match self {
            Self::APlus => 6,
            Self::A => 5,
            Self::B => 4,
            Self::C => 3,
            Self::D => 2,
            Self::F => 1,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGrade(pub String);

impl fmt::Display for UnknownGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown grade {:?} (expected A+, A, B, C, D or F)", self.0)
    }
}

impl std::error::Error for UnknownGrade {}

impl FromStr for Grade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == s.trim())
            .ok_or_else(|| UnknownGrade(s.to_string()))
    }
}

/// Rank of a grade string as stored in a report; unknown strings rank 0.
pub fn rank_of(grade: &str) -> u8 {
    grade.parse::<Grade>().map_or(0, Grade::rank)
}

pub fn score_to_grade(score: u32) -> Grade {
    if score >= 90 {
        Grade::APlus
    } else if score >= 85 {
        Grade::A
    } else if score >= 75 {
        Grade::B
    } else if score >= 65 {
        Grade::C
    } else if score >= 50 {
        Grade::D
    } else {
        Grade::F
    }
}

#[cfg(test)]
#[path = "grade_test.rs"]
mod tests;
