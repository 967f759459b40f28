//! Property catalog tools.
//!
//! Every tool moves its inputs onto a spawned worker, opens one unit of work,
//! runs a single repository call and settles it. Write tools report store
//! failures as an error-shaped [`ActionResult`](crate::content::ActionResult);
//! read tools return them as MCP errors.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
    schemars::{self, JsonSchema},
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::content::{
    DEFAULT_LANGUAGE, format_action_result, format_detail, format_summary_list,
};
use crate::db::{
    Database, DbError, DbResult, NewProperty, PropertyPatch, PropertyQuery, PropertyRepository,
    PropertyStatus, settle,
};

use super::{json_result, map_db_error, offload};

/// Default upper price bound exposed to tool callers.
pub const SEARCH_MAX_PRICE: f64 = 1_000_000.0;

fn default_min_price() -> f64 {
    0.0
}

fn default_max_price() -> f64 {
    SEARCH_MAX_PRICE
}

fn default_status() -> String {
    PropertyStatus::Available.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchPropertiesParams {
    #[schemars(description = "City name or part of it, matched case-insensitively")]
    #[serde(default)]
    pub city: Option<String>,
    #[schemars(description = "Minimum price, inclusive (default: 0)")]
    #[serde(default = "default_min_price")]
    pub min_price: f64,
    #[schemars(description = "Maximum price, inclusive (default: 1000000)")]
    #[serde(default = "default_max_price")]
    pub max_price: f64,
    #[schemars(description = "'available' (default) or 'sold'")]
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetPropertyParams {
    #[schemars(description = "Property ID")]
    pub property_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateListingParams {
    #[schemars(description = "Property ID")]
    pub property_id: String,
    #[schemars(description = "Language code for the listing (default: en)")]
    #[serde(default = "default_language")]
    pub target_language: String,
    #[schemars(description = "Optional tone, e.g. 'luxury' or 'friendly'")]
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddPropertyParams {
    #[schemars(description = "Unique property ID")]
    pub property_id: String,
    pub city: String,
    pub price: f64,
    pub rooms: i64,
    #[schemars(description = "'available' or 'sold'")]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeletePropertyParams {
    #[schemars(description = "Property ID")]
    pub property_id: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct UpdatePropertyParams {
    #[schemars(description = "Property ID")]
    pub property_id: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rooms: Option<i64>,
    #[schemars(description = "'available' or 'sold'")]
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
}

impl UpdatePropertyParams {
    fn patch(&self) -> PropertyPatch {
        PropertyPatch {
            city: self.city.clone(),
            price: self.price,
            rooms: self.rooms,
            status: self.status.clone(),
            description: self.description.clone(),
            features: self.features.clone(),
        }
    }
}

/// Human-readable reason for a failed write.
fn failure_reason(err: &DbError) -> String {
    match err {
        DbError::Validation { message } => message.clone(),
        DbError::AlreadyExists { id, .. } => format!("Property {} already exists", id),
        DbError::UnknownStatus { .. }
        | DbError::InvalidData { .. }
        | DbError::Database { .. }
        | DbError::Connection { .. } => err.to_string(),
    }
}

/// Open a unit of work, run `op` on it and settle the outcome.
///
/// Failing to open the unit of work is the only error returned as `Err`;
/// the operation's own outcome comes back untouched in the inner result.
async fn with_unit_of_work<D, T, F>(db: Arc<D>, op: F) -> Result<DbResult<T>, McpError>
where
    D: Database,
    T: Send + 'static,
    F: for<'a> FnOnce(&'a mut D::UnitOfWork) -> Pin<Box<dyn Future<Output = DbResult<T>> + Send + 'a>>
        + Send
        + 'static,
{
    offload(async move {
        let mut uow = db.begin().await.map_err(|e| {
            warn!(error = %e, "could not open unit of work");
            map_db_error(e)
        })?;
        let outcome = op(&mut uow).await;
        Ok(settle(uow, outcome).await)
    })
    .await
}

pub(crate) async fn search_properties<D: Database>(
    db: Arc<D>,
    params: SearchPropertiesParams,
) -> Result<CallToolResult, McpError> {
    let query = PropertyQuery {
        city: params.city,
        min_price: params.min_price,
        max_price: params.max_price,
        status: params.status,
    };
    debug!(?query, "search_properties");

    let properties = with_unit_of_work(db, move |uow| {
        Box::pin(async move { uow.search(&query).await })
    })
    .await?
    .map_err(map_db_error)?;

    json_result(&format_summary_list(&properties))
}

pub(crate) async fn get_property_details<D: Database>(
    db: Arc<D>,
    params: GetPropertyParams,
) -> Result<CallToolResult, McpError> {
    debug!(property_id = %params.property_id, "get_property_details");
    let id = params.property_id;

    let property = with_unit_of_work(db, move |uow| Box::pin(async move { uow.get(&id).await }))
        .await?
        .map_err(map_db_error)?;

    json_result(&format_detail(property.as_ref()))
}

pub(crate) async fn generate_listing_content<D: Database>(
    db: Arc<D>,
    params: GenerateListingParams,
) -> Result<CallToolResult, McpError> {
    debug!(
        property_id = %params.property_id,
        language = %params.target_language,
        "generate_listing_content"
    );
    let id = params.property_id;

    let property = with_unit_of_work(db, move |uow| Box::pin(async move { uow.get(&id).await }))
        .await?
        .map_err(map_db_error)?;

    let text = crate::content::generate_listing_content(
        property.as_ref(),
        &params.target_language,
        params.tone.as_deref(),
    );
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

pub(crate) async fn add_property<D: Database>(
    db: Arc<D>,
    params: AddPropertyParams,
) -> Result<CallToolResult, McpError> {
    let new = NewProperty {
        id: params.property_id,
        city: params.city,
        price: params.price,
        rooms: params.rooms,
        status: params.status,
        description: params.description,
        features: params.features,
    };

    let outcome =
        with_unit_of_work(db, move |uow| Box::pin(async move { uow.create(&new).await })).await?;

    let result = match outcome {
        Ok(created) => {
            info!(property_id = %created.id, "property created");
            format_action_result(
                true,
                format!("Property {} created successfully", created.id),
                None,
            )
        }
        Err(e) => {
            warn!(error = %e, "add_property failed");
            format_action_result(
                false,
                format!("Could not create property: {}", failure_reason(&e)),
                None,
            )
        }
    };
    json_result(&result)
}

pub(crate) async fn delete_property<D: Database>(
    db: Arc<D>,
    params: DeletePropertyParams,
) -> Result<CallToolResult, McpError> {
    let id = params.property_id;
    let target = id.clone();

    let outcome =
        with_unit_of_work(db, move |uow| Box::pin(async move { uow.delete(&target).await }))
            .await?;

    let result = match outcome {
        Ok(true) => {
            info!(property_id = %id, "property deleted");
            format_action_result(true, format!("Property {} deleted", id), None)
        }
        Ok(false) => format_action_result(false, format!("Property {} not found", id), None),
        Err(e) => {
            warn!(error = %e, property_id = %id, "delete_property failed");
            format_action_result(
                false,
                format!("Could not delete property: {}", failure_reason(&e)),
                None,
            )
        }
    };
    json_result(&result)
}

pub(crate) async fn update_property<D: Database>(
    db: Arc<D>,
    params: UpdatePropertyParams,
) -> Result<CallToolResult, McpError> {
    let patch = params.patch();
    let id = params.property_id;
    let target = id.clone();

    let outcome = with_unit_of_work(db, move |uow| {
        Box::pin(async move { uow.update(&target, &patch).await })
    })
    .await?;

    let result = match outcome {
        Ok(Some(updated)) => {
            info!(property_id = %updated.id, "property updated");
            format_action_result(
                true,
                format!("Property {} updated successfully", id),
                None,
            )
        }
        Ok(None) => format_action_result(false, format!("Property {} not found", id), None),
        Err(e) => {
            warn!(error = %e, property_id = %id, "update_property failed");
            format_action_result(
                false,
                format!("Could not update property: {}", failure_reason(&e)),
                None,
            )
        }
    };
    json_result(&result)
}

pub(crate) async fn seed_data<D: Database>(db: Arc<D>) -> Result<CallToolResult, McpError> {
    let outcome = with_unit_of_work(db, |uow| Box::pin(async move { uow.seed().await })).await?;

    let result = match outcome {
        Ok(true) => {
            info!("sample data seeded");
            format_action_result(true, "Data seeded successfully", None)
        }
        Ok(false) => format_action_result(false, "Database already had data.", None),
        Err(e) => {
            warn!(error = %e, "seed_data failed");
            format_action_result(
                false,
                format!("Could not seed data: {}", failure_reason(&e)),
                None,
            )
        }
    };
    json_result(&result)
}
