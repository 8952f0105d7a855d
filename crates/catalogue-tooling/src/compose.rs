//! Placeholder substitution and page-block splicing on the base template.
//!
//! The base template is operator-supplied HTML read at runtime, so it is
//! filled by literal substring replacement rather than a template engine.

use crate::config::{InsertMarkers, Placeholder};
use crate::escape::escape_html;
use crate::model::CategoryRecord;

/// Replace every occurrence of each placeholder token with the escaped
/// category value, or the placeholder's fallback when the field is absent.
pub fn compose_document(
    template: &str,
    category: &CategoryRecord,
    placeholders: &[Placeholder],
) -> String {
    placeholders.iter().fold(template.to_string(), |document, placeholder| {
        let value = category.get_or(&placeholder.field, &placeholder.fallback);
        document.replace(&placeholder.token, &escape_html(value))
    })
}

/// Insert the generated summary and detail blocks at their markers.
///
/// Each marker is replaced once; a marker missing from the document leaves
/// its block out.
pub fn splice_blocks(
    document: &str,
    summary_block: &str,
    detail_block: &str,
    markers: &InsertMarkers,
) -> String {
    for (marker, name) in [(&markers.summary, "summary"), (&markers.detail, "detail")] {
        if !document.contains(marker.as_str()) {
            tracing::warn!(
                marker = %marker,
                block = name,
                "Insertion marker not found in template"
            );
        }
    }

    document
        .replacen(&markers.summary, summary_block, 1)
        .replacen(&markers.detail, detail_block, 1)
}
