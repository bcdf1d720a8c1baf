//! Breed Models

use crate::uuids::TypedUuid;

/// Marker for [`BreedUuid`].
#[derive(Debug)]
pub(crate) struct BreedId;

pub(crate) type BreedUuid = TypedUuid<BreedId>;

/// Breed Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Breed {
    pub uuid: BreedUuid,
    /// Unique across all breeds.
    pub name: String,
    pub origin: String,
    /// Empty when not provided.
    pub description: String,
}

/// New Breed Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewBreed {
    pub uuid: BreedUuid,
    pub name: String,
    pub origin: String,
    pub description: String,
}

/// Partial Breed update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct BreedUpdate {
    pub name: Option<String>,
    pub origin: Option<String>,
    pub description: Option<String>,
}
