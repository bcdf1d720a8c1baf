//! Gender of a cat or a human.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Stored as a single-letter code, matching the `gender` column check
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

#[derive(Debug, Error)]
#[error("must be one of M, F or O")]
pub(crate) struct ParseGenderError;

impl Gender {
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "O" => Ok(Self::Other),
            _ => Err(ParseGenderError),
        }
    }
}
