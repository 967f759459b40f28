//! Domain models for the property catalog.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

use super::DbError;

/// Caller-supplied property identifier.
pub type Id = String;

/// A real-estate listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Id,
    pub city: String,
    pub price: f64,
    pub rooms: i64,
    pub status: PropertyStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: String,
}

/// Sale status of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Sold,
}

impl PropertyStatus {
    /// Lowercase value as stored in the database and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
        }
    }

    /// Resolve a status for search filtering.
    ///
    /// Unknown values fall back to `Available` instead of failing. Writes
    /// go through `FromStr`, which rejects them.
    pub fn resolve_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PropertyStatus {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(PropertyStatus::Available),
            "sold" => Ok(PropertyStatus::Sold),
            _ => Err(DbError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Input for creating a property.
///
/// `status` stays a raw string; the repository resolves it so that an
/// unknown value surfaces as `DbError::UnknownStatus`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub id: Id,
    pub city: String,
    pub price: f64,
    pub rooms: i64,
    pub status: String,
    pub description: String,
    pub features: String,
}

/// Partial update for a property.
///
/// `None` leaves the stored column untouched. `Some(String::new())` sets
/// it to the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub city: Option<String>,
    pub price: Option<f64>,
    pub rooms: Option<i64>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
}

impl PropertyPatch {
    /// Apply the patch to a property.
    ///
    /// The status is resolved before any field is written, so an unknown
    /// status leaves `property` unmodified.
    pub fn apply(&self, property: &mut Property) -> Result<(), DbError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<PropertyStatus>)
            .transpose()?;

        if let Some(city) = &self.city {
            property.city = city.clone();
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(rooms) = self.rooms {
            property.rooms = rooms;
        }
        if let Some(status) = status {
            property.status = status;
        }
        if let Some(description) = &self.description {
            property.description = description.clone();
        }
        if let Some(features) = &self.features {
            property.features = features.clone();
        }
        Ok(())
    }
}

/// Default lower price bound for searches.
pub const DEFAULT_MIN_PRICE: f64 = 0.0;
/// Default upper price bound for searches at the repository level.
pub const DEFAULT_MAX_PRICE: f64 = 1e9;

/// Search filters for properties.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQuery {
    /// Case-insensitive substring match on city. Empty means no filter.
    pub city: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: f64,
    /// Inclusive upper price bound.
    pub max_price: f64,
    /// Raw status filter, resolved leniently.
    pub status: String,
}

impl Default for PropertyQuery {
    fn default() -> Self {
        Self {
            city: None,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            status: PropertyStatus::Available.to_string(),
        }
    }
}
