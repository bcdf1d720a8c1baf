//! Human Models

use jiff::civil::Date;

use crate::{gender::Gender, homes::models::HomeUuid, uuids::TypedUuid};

/// Marker for [`HumanUuid`].
#[derive(Debug)]
pub(crate) struct HumanId;

pub(crate) type HumanUuid = TypedUuid<HumanId>;

/// Human Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Human {
    pub uuid: HumanUuid,
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: Date,
    /// Empty when not provided.
    pub description: String,
    /// The home this human lives in.
    pub home_uuid: HomeUuid,
}

/// New Human Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewHuman {
    pub uuid: HumanUuid,
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: Date,
    pub description: String,
    pub home_uuid: HomeUuid,
}

/// Partial Human update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct HumanUpdate {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<Date>,
    pub description: Option<String>,
    pub home_uuid: Option<HomeUuid>,
}
