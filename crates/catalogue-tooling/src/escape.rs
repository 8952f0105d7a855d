//! HTML escaping shared by the page fragments and the base template placeholders.
//!
//! Escapes `& < > " '` as `&amp; &lt; &gt; &quot; &#x27;`. The Askama templates
//! use [`HtmlEntities`] (registered in `askama.toml`), and the compositor calls
//! [`escape_html`] directly, so one document never mixes entity styles.

use std::borrow::Cow;
use std::fmt::{self, Write};

use html_escape::encode_quoted_attribute;

/// Escape HTML-reserved characters in `text`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    encode_quoted_attribute(text)
}

/// Askama escaper for `.html` templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntities;

impl askama::filters::Escaper for HtmlEntities {
    fn write_escaped_str<W: Write>(&self, mut dest: W, string: &str) -> fmt::Result {
        dest.write_str(&escape_html(string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askama::Template;

    #[derive(Template)]
    #[template(source = "<p>{{ text }}</p>", ext = "html")]
    struct Paragraph<'a> {
        text: &'a str,
    }

    #[test]
    fn test_escape_html_entity_forms() {
        assert_eq!(
            escape_html(r#"R&D <Lab> "x" it's"#),
            "R&amp;D &lt;Lab&gt; &quot;x&quot; it&#x27;s"
        );
    }

    #[test]
    fn test_escape_html_borrows_clean_text() {
        assert!(matches!(escape_html("Formation Pro"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_templates_use_same_entities() {
        let html = Paragraph {
            text: r#"It's "x" & <y>"#,
        }
        .render()
        .unwrap();
        assert_eq!(html, "<p>It&#x27;s &quot;x&quot; &amp; &lt;y&gt;</p>");
    }
}
