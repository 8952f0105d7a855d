//! One detail page per course.

use askama::Template;

use super::{render_detail_field, render_fragment};
use crate::config::CatalogueLayout;
use crate::error::RenderError;
use crate::model::CourseRecord;

#[derive(Template)]
#[template(path = "detail_page.html")]
struct DetailPageTemplate<'a> {
    title: &'a str,
    fields: String,
}

/// Render a full page for each course, in list order.
///
/// Fields follow `field_order` (the course table header) with the layout's
/// excluded fields skipped. Returns no pages when either input is empty.
pub fn render_detail_pages(
    courses: &[CourseRecord],
    field_order: &[String],
    layout: &CatalogueLayout,
) -> Result<Vec<String>, RenderError> {
    if courses.is_empty() || field_order.is_empty() {
        return Ok(Vec::new());
    }

    courses
        .iter()
        .map(|course| render_detail_page(course, field_order, layout))
        .collect()
}

fn render_detail_page(
    course: &CourseRecord,
    field_order: &[String],
    layout: &CatalogueLayout,
) -> Result<String, RenderError> {
    let fields = field_order
        .iter()
        .filter(|field| !layout.is_excluded(field))
        .map(|field| {
            render_detail_field(field, course.get_or(field, &layout.missing_detail_value))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let template = DetailPageTemplate {
        title: course.get_or(&layout.title_field, &layout.untitled_course),
        fields: fields.join("\n"),
    };
    render_fragment(&template, "detail page")
}
