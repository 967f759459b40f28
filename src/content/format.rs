//! Response payloads for property tools.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::db::{Property, PropertyStatus};

/// Error message returned by the detail view for unknown IDs.
pub const PROPERTY_NOT_FOUND: &str = "Property not found";

/// Summary row returned by searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySummary {
    pub id: String,
    pub city: String,
    pub price: f64,
    pub rooms: i64,
    pub status: PropertyStatus,
}

/// Full technical details of one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDetail {
    pub id: String,
    pub city: String,
    pub price: f64,
    pub rooms: i64,
    pub status: PropertyStatus,
    pub description: String,
    pub features: String,
}

/// Detail lookup result: the property, or an error-shaped payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetailView {
    Found(PropertyDetail),
    Missing { error: &'static str },
}

/// Outcome of a write tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

/// Standard envelope for write operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult {
    pub status: ActionStatus,
    pub message: String,
    pub data: Map<String, Value>,
}

impl From<&Property> for PropertySummary {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id.clone(),
            city: p.city.clone(),
            price: p.price,
            rooms: p.rooms,
            status: p.status,
        }
    }
}

impl From<&Property> for PropertyDetail {
    fn from(p: &Property) -> Self {
        Self {
            id: p.id.clone(),
            city: p.city.clone(),
            price: p.price,
            rooms: p.rooms,
            status: p.status,
            description: p.description.clone(),
            features: p.features.clone(),
        }
    }
}

pub fn format_summary_list(properties: &[Property]) -> Vec<PropertySummary> {
    properties.iter().map(PropertySummary::from).collect()
}

pub fn format_detail(property: Option<&Property>) -> DetailView {
    match property {
        Some(p) => DetailView::Found(p.into()),
        None => DetailView::Missing {
            error: PROPERTY_NOT_FOUND,
        },
    }
}

/// Wrap a write outcome. Missing `data` becomes an empty object.
pub fn format_action_result(
    success: bool,
    message: impl Into<String>,
    data: Option<Map<String, Value>>,
) -> ActionResult {
    ActionResult {
        status: if success {
            ActionStatus::Success
        } else {
            ActionStatus::Error
        },
        message: message.into(),
        data: data.unwrap_or_default(),
    }
}
