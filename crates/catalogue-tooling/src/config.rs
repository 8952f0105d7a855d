//! Layout configuration for catalogue rendering.
//!
//! Every column list, excluded field, default string, placeholder token and
//! insertion marker lives here and is passed explicitly into the renderers and
//! the compositor. All keys are optional when deserialized; missing keys take
//! the built-in catalogue defaults.

use std::num::NonZeroUsize;

use serde::Deserialize;

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(15) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// A column of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SummaryColumn {
    /// CSV header the cell value is read from.
    pub field: String,

    /// Column heading shown in the table. Defaults to `field`.
    pub header: Option<String>,
}

impl SummaryColumn {
    pub fn new(field: &str, header: &str) -> Self {
        Self {
            field: field.to_string(),
            header: Some(header.to_string()),
        }
    }

    pub fn display_header(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.field)
    }
}

/// A scalar placeholder token in the base template, filled from the category record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Placeholder {
    /// Literal token replaced in the template (e.g. `{{Category Name}}`).
    pub token: String,

    /// Category record field supplying the value.
    pub field: String,

    /// Value used when the record has no such field.
    pub fallback: String,
}

impl Placeholder {
    pub fn new(token: &str, field: &str, fallback: &str) -> Self {
        Self {
            token: token.to_string(),
            field: field.to_string(),
            fallback: fallback.to_string(),
        }
    }
}

/// Comment tokens marking where generated pages are spliced into the template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct InsertMarkers {
    pub summary: String,
    pub detail: String,
}

impl Default for InsertMarkers {
    fn default() -> Self {
        Self {
            summary: "<!-- ###COURSE_SUMMARY_PAGES_INSERT_POINT### -->".to_string(),
            detail: "<!-- ###COURSE_DETAIL_PAGES_INSERT_POINT### -->".to_string(),
        }
    }
}

/// Rendering configuration shared by the paginator, detail generator and compositor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CatalogueLayout {
    /// Maximum number of course rows per summary page.
    pub page_size: NonZeroUsize,

    /// Column of the category table holding the category identifier.
    pub category_id_column: String,

    /// Category field used in summary page headings.
    pub category_name_field: String,

    /// Summary heading used when the category record has no display name.
    pub summary_heading_fallback: String,

    /// Summary table columns, in display order.
    pub summary_columns: Vec<SummaryColumn>,

    /// Cell text for a course missing a summary column.
    pub missing_cell: String,

    /// Message of the placeholder row rendered for an empty table.
    pub empty_table_message: String,

    /// Course field used as the detail page title.
    pub title_field: String,

    /// Detail page title used when a course has no title field.
    pub untitled_course: String,

    /// Detail field value used when a course lacks a field from the header.
    pub missing_detail_value: String,

    /// Course fields never rendered on detail pages.
    pub excluded_detail_fields: Vec<String>,

    /// Scalar placeholders substituted from the category record.
    pub placeholders: Vec<Placeholder>,

    /// Insertion points for the generated page blocks.
    pub markers: InsertMarkers,
}

impl Default for CatalogueLayout {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            category_id_column: "CategoryID".to_string(),
            category_name_field: "Category Name".to_string(),
            summary_heading_fallback: "Formations".to_string(),
            summary_columns: vec![
                SummaryColumn::new("ID", "ID"),
                SummaryColumn::new("Thème de la Formation", "Thème de la Formation"),
                SummaryColumn::new("Temps Moyen de Formation", "Durée"),
                SummaryColumn::new("Prix", "Prix"),
            ],
            missing_cell: "N/A".to_string(),
            empty_table_message: "Aucune formation disponible pour cette catégorie.".to_string(),
            title_field: "Thème de la Formation".to_string(),
            untitled_course: "Titre de formation non disponible".to_string(),
            missing_detail_value: "N/A".to_string(),
            excluded_detail_fields: vec![
                "Accessibilité aux Personnes en Situation de Handicap".to_string(),
                "Lieu".to_string(),
            ],
            placeholders: vec![
                Placeholder::new("{{Category Name}}", "Category Name", "N/A"),
                Placeholder::new("{{Course Quantity}}", "Course Quantity", "0"),
                Placeholder::new(
                    "{{Public_Cible_Text}}",
                    "Public Cible",
                    "Information sur le public ciblé non disponible.",
                ),
                Placeholder::new(
                    "{{Nos_Formateurs_Text}}",
                    "Nos Formateurs",
                    "Information sur nos formateurs non disponible.",
                ),
            ],
            markers: InsertMarkers::default(),
        }
    }
}

impl CatalogueLayout {
    /// Whether a course field is excluded from detail pages.
    pub fn is_excluded(&self, field: &str) -> bool {
        self.excluded_detail_fields.iter().any(|f| f == field)
    }
}
