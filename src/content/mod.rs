//! Presentation layer.
//!
//! Pure transformations from domain entities to tool payloads. Nothing in
//! here touches the store.

mod format;
mod listing;


pub use format::{
    ActionResult, ActionStatus, DetailView, PropertyDetail, PropertySummary,
    PROPERTY_NOT_FOUND, format_action_result, format_detail, format_summary_list,
};
pub use listing::{DEFAULT_LANGUAGE, generate_listing_content};
