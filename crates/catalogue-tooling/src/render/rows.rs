//! Summary table rows.

use askama::Template;

use super::render_fragment;
use crate::config::CatalogueLayout;
use crate::error::RenderError;
use crate::model::CourseRecord;

struct SummaryRow<'a> {
    cells: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "summary_rows.html")]
struct SummaryRowsTemplate<'a> {
    rows: Vec<SummaryRow<'a>>,
    column_count: usize,
    empty_message: &'a str,
}

/// Render the `<tr>` rows of a summary table, one per course.
///
/// Each row holds the configured summary columns in order; a course missing a
/// column shows `layout.missing_cell`. Cell values are written verbatim, not
/// escaped. An empty slice yields a single row spanning all columns with the
/// empty-table message.
pub fn render_summary_rows(
    courses: &[CourseRecord],
    layout: &CatalogueLayout,
) -> Result<String, RenderError> {
    let rows = courses
        .iter()
        .map(|course| SummaryRow {
            cells: layout
                .summary_columns
                .iter()
                .map(|column| course.get_or(&column.field, &layout.missing_cell))
                .collect(),
        })
        .collect();

    let template = SummaryRowsTemplate {
        rows,
        column_count: layout.summary_columns.len(),
        empty_message: &layout.empty_table_message,
    };
    render_fragment(&template, "summary rows")
}
