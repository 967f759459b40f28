//! Templated listing markup.
//!
//! Deterministic string template; the same property, language and tone
//! always produce byte-identical output.

use crate::db::Property;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Text rendered in place of a missing tone.
const NO_TONE: &str = "None";

const MISSING_PROPERTY: &str = "Error: Property not found for content";

/// Build the SEO listing block for a property.
///
/// Prices always carry a decimal point (`300000.0`), and an absent tone is
/// rendered as the literal `None`.
pub fn generate_listing_content(
    property: Option<&Property>,
    target_language: &str,
    tone: Option<&str>,
) -> String {
    let Some(p) = property else {
        return MISSING_PROPERTY.to_string();
    };

    let title = format!("Amazing property in {} - Only {:?}€", p.city, p.price);
    let description = format!(
        "Looking for a home with {} rooms? {}",
        p.rooms, p.description
    );
    let tone = tone.unwrap_or(NO_TONE);

    format!(
        "
        <title>{title}</title>
        <meta name=\"description\" content=\"{description}\">
        <meta name=\"language\" content=\"{target_language}\">
        <section>
            <h1>Property Details</h1>
            <p>Status: {status}</p>
            <p>Tone: {tone}</p>
        </section>
        ",
        status = p.status,
    )
}
