//! Assembly of the final catalogue document from loaded data.

use crate::compose::{compose_document, splice_blocks};
use crate::config::CatalogueLayout;
use crate::error::RenderError;
use crate::model::{CategoryRecord, CourseTable};
use crate::render::{render_detail_pages, render_summary_pages};

/// A fully populated catalogue document.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    /// Final HTML text.
    pub html: String,

    /// Number of summary table pages inserted.
    pub summary_pages: usize,

    /// Number of course detail pages inserted.
    pub detail_pages: usize,
}

/// Render every page and fill the base template.
pub fn assemble_document(
    template: &str,
    category: &CategoryRecord,
    table: &CourseTable,
    layout: &CatalogueLayout,
) -> Result<AssembledDocument, RenderError> {
    let category_name = category.get_or(
        &layout.category_name_field,
        &layout.summary_heading_fallback,
    );

    let summary_pages = render_summary_pages(&table.courses, category_name, layout)?;
    let detail_pages = render_detail_pages(&table.courses, &table.fields, layout)?;
    tracing::debug!(
        summary_pages = summary_pages.len(),
        detail_pages = detail_pages.len(),
        "Rendered catalogue pages"
    );

    let composed = compose_document(template, category, &layout.placeholders);
    let html = splice_blocks(
        &composed,
        &summary_pages.join("\n"),
        &detail_pages.join("\n"),
        &layout.markers,
    );

    Ok(AssembledDocument {
        html,
        summary_pages: summary_pages.len(),
        detail_pages: detail_pages.len(),
    })
}
