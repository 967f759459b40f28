//! MCP server implementation
//!
//! This module implements the MCP server coordinator. Tool bodies live in
//! [`super::tools`]; this file only registers them with rmcp.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};

use crate::db::Database;

use super::tools::properties::{
    self, AddPropertyParams, DeletePropertyParams, GenerateListingParams, GetPropertyParams,
    SearchPropertiesParams, UpdatePropertyParams,
};

/// Main MCP server coordinator
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
/// One instance is created per MCP session; all instances share the store.
pub struct McpServer<D: Database> {
    db: Arc<D>,
    service_name: Arc<str>,
    tool_router: ToolRouter<Self>,
}

// Manual Clone impl - D itself does not need to be Clone
impl<D: Database> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            service_name: Arc::clone(&self.service_name),
            tool_router: self.tool_router.clone(),
        }
    }
}

impl<D: Database> McpServer<D> {
    /// Tools registered with this server.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

#[tool_router]
impl<D: Database> McpServer<D> {
    /// Create a new MCP server over the given store
    pub fn new(db: Arc<D>, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            service_name: service_name.into(),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search for properties with filters. City matches case-insensitively as a substring; price bounds are inclusive; status is 'available' (default) or 'sold'."
    )]
    pub async fn search_properties(
        &self,
        Parameters(params): Parameters<SearchPropertiesParams>,
    ) -> Result<CallToolResult, McpError> {
        properties::search_properties(Arc::clone(&self.db), params).await
    }

    #[tool(description = "Retrieves full technical details for a specific property ID.")]
    pub async fn get_property_details(
        &self,
        Parameters(params): Parameters<GetPropertyParams>,
    ) -> Result<CallToolResult, McpError> {
        properties::get_property_details(Arc::clone(&self.db), params).await
    }

    #[tool(description = "Generates SEO-optimized HTML listing content.")]
    pub async fn generate_listing_content(
        &self,
        Parameters(params): Parameters<GenerateListingParams>,
    ) -> Result<CallToolResult, McpError> {
        properties::generate_listing_content(Arc::clone(&self.db), params).await
    }

    #[tool(description = "Adds a new property. Status should be 'available' or 'sold'.")]
    pub async fn add_property(
        &self,
        Parameters(params): Parameters<AddPropertyParams>,
    ) -> Result<CallToolResult, McpError> {
        properties::add_property(Arc::clone(&self.db), params).await
    }

    #[tool(description = "Permanently removes a property from the catalog by its ID.")]
    pub async fn delete_property(
        &self,
        Parameters(params): Parameters<DeletePropertyParams>,
    ) -> Result<CallToolResult, McpError> {
        properties::delete_property(Arc::clone(&self.db), params).await
    }

    #[tool(
        description = "Updates an existing property in the catalog. Only provide the fields that need to be changed."
    )]
    pub async fn update_property(
        &self,
        Parameters(params): Parameters<UpdatePropertyParams>,
    ) -> Result<CallToolResult, McpError> {
        properties::update_property(Arc::clone(&self.db), params).await
    }

    #[tool(description = "Seed the database with samples.")]
    pub async fn seed_data(&self) -> Result<CallToolResult, McpError> {
        properties::seed_data(Arc::clone(&self.db)).await
    }
}

#[tool_handler]
impl<D: Database> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::default();
        server_info.name = self.service_name.to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        let mut info = ServerInfo::default();
        info.server_info = server_info;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Real-estate catalog: search, inspect, add, update and delete property listings, \
             seed sample data, and generate listing content."
                .to_string(),
        );
        info
    }
}
