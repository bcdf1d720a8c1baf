//! Cat Models

use jiff::civil::Date;

use crate::{
    breeds::models::BreedUuid, gender::Gender, humans::models::HumanUuid, uuids::TypedUuid,
};

/// Marker for [`CatUuid`].
#[derive(Debug)]
pub(crate) struct CatId;

pub(crate) type CatUuid = TypedUuid<CatId>;

/// Cat Model
///
/// A cat always has a breed and an owner; its home is reached through
/// the owner and never stored on the cat itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cat {
    pub uuid: CatUuid,
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: Date,
    /// Empty when not provided.
    pub description: String,
    pub breed_uuid: BreedUuid,
    pub owner_uuid: HumanUuid,
}

/// New Cat Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewCat {
    pub uuid: CatUuid,
    pub name: String,
    pub gender: Gender,
    pub date_of_birth: Date,
    pub description: String,
    pub breed_uuid: BreedUuid,
    pub owner_uuid: HumanUuid,
}

/// Partial Cat update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct CatUpdate {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<Date>,
    pub description: Option<String>,
    pub breed_uuid: Option<BreedUuid>,
    pub owner_uuid: Option<HumanUuid>,
}
