//! Fixed-size pagination of the course summary table.

use askama::Template;

use super::{render_fragment, render_summary_rows};
use crate::config::CatalogueLayout;
use crate::error::RenderError;
use crate::model::CourseRecord;

#[derive(Template)]
#[template(path = "summary_page.html")]
struct SummaryPageTemplate<'a> {
    page_break: bool,
    category_name: &'a str,
    headers: Vec<&'a str>,
    rows: String,
}

/// Split `courses` into pages of at most `layout.page_size` rows.
///
/// Returns one fragment per page, in order. No courses means no pages. The
/// first page carries no page-break class because the static page before it
/// already ends with a break; every later page does.
pub fn render_summary_pages(
    courses: &[CourseRecord],
    category_name: &str,
    layout: &CatalogueLayout,
) -> Result<Vec<String>, RenderError> {
    let headers: Vec<&str> = layout
        .summary_columns
        .iter()
        .map(|column| column.display_header())
        .collect();

    courses
        .chunks(layout.page_size.get())
        .enumerate()
        .map(|(index, chunk)| {
            let template = SummaryPageTemplate {
                page_break: index > 0,
                category_name,
                headers: headers.clone(),
                rows: render_summary_rows(chunk, layout)?,
            };
            render_fragment(&template, "summary page")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use std::num::NonZeroUsize;

    fn courses(n: usize) -> Vec<CourseRecord> {
        (1..=n)
            .map(|i| {
                [
                    ("ID", format!("C{i:02}")),
                    ("Thème de la Formation", format!("Cours {i}")),
                ]
                .into_iter()
                .collect::<Record>()
            })
            .collect()
    }

    fn layout_with_page_size(size: usize) -> CatalogueLayout {
        CatalogueLayout {
            page_size: NonZeroUsize::new(size).unwrap(),
            ..CatalogueLayout::default()
        }
    }

    fn row_count(page: &str) -> usize {
        page.matches("<td>").count() / 4
    }

    #[test]
    fn test_no_courses_no_pages() {
        let layout = CatalogueLayout::default();
        let pages = render_summary_pages(&[], "Formation Pro", &layout).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_page_count_is_ceiling() {
        let cases = [
            (1, 15, 1),
            (15, 15, 1),
            (16, 15, 2),
            (30, 15, 2),
            (31, 15, 3),
            (7, 3, 3),
        ];
        for (n, p, expected) in cases {
            let pages = render_summary_pages(&courses(n), "FP", &layout_with_page_size(p)).unwrap();
            assert_eq!(pages.len(), expected, "n={n} p={p}");
            assert_eq!(pages.iter().map(|page| row_count(page)).sum::<usize>(), n);
        }
    }

    #[test]
    fn test_chunks_are_consecutive() {
        let pages = render_summary_pages(&courses(16), "FP", &CatalogueLayout::default()).unwrap();
        assert_eq!(row_count(&pages[0]), 15);
        assert_eq!(row_count(&pages[1]), 1);
        assert!(pages[0].contains("<td>C01</td>"));
        assert!(pages[0].contains("<td>C15</td>"));
        assert!(pages[1].contains("<td>C16</td>"));
        assert!(!pages[1].contains("<td>C15</td>"));
    }

    #[test]
    fn test_page_break_on_all_but_first() {
        let pages = render_summary_pages(&courses(40), "FP", &CatalogueLayout::default()).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(!pages[0].contains("page-break"));
        assert!(pages[1].contains(r#"class="page-content page-break""#));
        assert!(pages[2].contains(r#"class="page-content page-break""#));
    }

    #[test]
    fn test_heading_escapes_category_name() {
        let pages =
            render_summary_pages(&courses(2), "Santé & <Social>", &CatalogueLayout::default())
                .unwrap();
        assert!(pages[0].contains("<h1>Formations - Santé &amp; &lt;Social&gt;</h1>"));

        let pages =
            render_summary_pages(&courses(1), "L'atelier \"Pro\"", &CatalogueLayout::default())
                .unwrap();
        assert!(pages[0].contains("<h1>Formations - L&#x27;atelier &quot;Pro&quot;</h1>"));
    }

    #[test]
    fn test_table_headers_use_display_names() {
        let pages = render_summary_pages(&courses(1), "FP", &CatalogueLayout::default()).unwrap();
        assert!(pages[0].contains("<th>Durée</th>"));
        assert!(!pages[0].contains("<th>Temps Moyen de Formation</th>"));
    }
}
