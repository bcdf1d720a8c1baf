//! Home Models

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::uuids::TypedUuid;

/// Marker for [`HomeUuid`].
#[derive(Debug)]
pub(crate) struct HomeId;

pub(crate) type HomeUuid = TypedUuid<HomeId>;

/// Type of a home, stored as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HomeType {
    Landed,
    Condominium,
}

#[derive(Debug, Error)]
#[error("must be one of landed or condominium")]
pub(crate) struct ParseHomeTypeError;

impl HomeType {
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Landed => "landed",
            Self::Condominium => "condominium",
        }
    }
}

impl fmt::Display for HomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeType {
    type Err = ParseHomeTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "landed" => Ok(Self::Landed),
            "condominium" => Ok(Self::Condominium),
            _ => Err(ParseHomeTypeError),
        }
    }
}

/// Home Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Home {
    pub uuid: HomeUuid,
    pub name: String,
    pub address: String,
    pub hometype: HomeType,
}

/// New Home Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewHome {
    pub uuid: HomeUuid,
    pub name: String,
    pub address: String,
    pub hometype: HomeType,
}

/// Partial Home update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct HomeUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub hometype: Option<HomeType>,
}
