//! Wire resources
//!
//! Field-for-field mirrors of the items found in a collection page. Every
//! item is a metadata envelope wrapped around a type-specific entity.

mod security_group;

pub use security_group::{ApplicationSecurityGroupEntity, ApplicationSecurityGroupResource};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` as the type's default, like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Server-owned identity and bookkeeping of a resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub guid: String,
    /// Self link, relative to the API root
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A page item: metadata plus the entity payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de> + Default"))]
pub struct Resource<E> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity: E,
}

/// Structural translation from a wire resource to its domain model.
///
/// Mapping never fails: whatever decoded produces some model.
pub trait ToModel {
    type Model;

    fn to_model(self) -> Self::Model;
}

/// Entity of an inlined space reference
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpaceEntity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}
