//! HTML fragment rendering for summary tables and course detail pages.
//!
//! Fragments are compile-time Askama templates (see `templates/`), so every
//! interpolated value is HTML-escaped unless the template marks it `|safe`.
//! Summary table cells are the one place input data is emitted unescaped.

mod detail;
mod rows;
mod summary;

pub use detail::render_detail_pages;
pub use rows::render_summary_rows;
pub use summary::render_summary_pages;

use std::fmt::Display;

use askama::Template;

use crate::error::RenderError;

pub(crate) fn render_fragment<T: Template>(
    template: &T,
    fragment: &'static str,
) -> Result<String, RenderError> {
    template
        .render()
        .map_err(|source| RenderError::Template { fragment, source })
}

#[derive(Template)]
#[template(path = "detail_field.html")]
struct DetailFieldTemplate<'a> {
    name: &'a str,
    value: String,
}

/// Render one labelled detail field. Both the label and the value are escaped.
pub fn render_detail_field(name: &str, value: impl Display) -> Result<String, RenderError> {
    let template = DetailFieldTemplate {
        name,
        value: value.to_string(),
    };
    render_fragment(&template, "detail field")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field_escapes_name_and_value() {
        let html = render_detail_field("Prix <HT>", "100 & <b>plus</b>").unwrap();
        assert!(html.contains(r#"<h4 class="field-label">Prix &lt;HT&gt;</h4>"#));
        assert!(html.contains(r#"<p class="field-value">100 &amp; &lt;b&gt;plus&lt;/b&gt;</p>"#));
    }

    #[test]
    fn test_detail_field_quote_entities() {
        let html = render_detail_field("Public", r#"L'équipe "RH""#).unwrap();
        assert!(html.contains(r#"<p class="field-value">L&#x27;équipe &quot;RH&quot;</p>"#));
    }

    #[test]
    fn test_detail_field_coerces_value_to_text() {
        let html = render_detail_field("Places", 12).unwrap();
        assert!(html.contains(r#"<p class="field-value">12</p>"#));
    }
}
