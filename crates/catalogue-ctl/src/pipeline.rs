//! Catalogue generation: load template and data, assemble, write.

use std::path::{Path, PathBuf};

use catalogue_tooling::loader::{load_category_record, load_course_records};
use catalogue_tooling::{assemble_document, CatalogueLayout};

use crate::cli_config::PathOverrides;
use crate::error::CtlError;

const DEFAULT_TEMPLATE: &str = "print.html";
const DEFAULT_CATEGORY_DATA: &str = "pdfdata.csv";
const DEFAULT_CATEGORIES_ROOT: &str = "../formations";
const DEFAULT_OUTPUT: &str = "output.html";
const COURSE_DATA_FILENAME: &str = "data.csv";

/// Fully resolved input and output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CataloguePaths {
    pub template: PathBuf,
    pub category_data: PathBuf,
    pub categories_root: PathBuf,
    pub output: PathBuf,
}

impl Default for CataloguePaths {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            category_data: PathBuf::from(DEFAULT_CATEGORY_DATA),
            categories_root: PathBuf::from(DEFAULT_CATEGORIES_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CataloguePaths {
    /// Resolve each path from the command line, then the config file, then the default.
    pub fn resolve(cli: &PathOverrides, config: &PathOverrides) -> Self {
        let defaults = Self::default();
        let pick = |cli: &Option<PathBuf>, config: &Option<PathBuf>, default: PathBuf| {
            cli.clone().or_else(|| config.clone()).unwrap_or(default)
        };

        Self {
            template: pick(&cli.template, &config.template, defaults.template),
            category_data: pick(&cli.category_data, &config.category_data, defaults.category_data),
            categories_root: pick(
                &cli.categories_root,
                &config.categories_root,
                defaults.categories_root,
            ),
            output: pick(&cli.output, &config.output, defaults.output),
        }
    }

    /// Course table of one category: `<categories-root>/<category_id>/data.csv`.
    pub fn course_data(&self, category_id: &str) -> PathBuf {
        self.categories_root
            .join(category_id)
            .join(COURSE_DATA_FILENAME)
    }
}

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerationReport {
    /// Whether the category metadata row was found.
    pub category_found: bool,

    /// Number of course rows loaded.
    pub courses: usize,

    pub summary_pages: usize,
    pub detail_pages: usize,

    /// File the document was written to.
    pub output: PathBuf,
}

fn read_template(path: &Path) -> Result<String, CtlError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CtlError::TemplateNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CtlError::TemplateRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Generate the catalogue for `category_id` and write it to `paths.output`.
///
/// A template read, render or output write failure is an error; see
/// [`CtlError::is_fatal`] for which of them change the exit status. Missing
/// category or course data yields a sparser document.
pub(crate) fn generate(
    category_id: &str,
    paths: &CataloguePaths,
    layout: &CatalogueLayout,
) -> Result<GenerationReport, CtlError> {
    let template = read_template(&paths.template)?;

    let category = load_category_record(
        &paths.category_data,
        category_id,
        &layout.category_id_column,
    );
    let table = load_course_records(&paths.course_data(category_id));

    let document = assemble_document(&template, &category, &table, layout)?;

    std::fs::write(&paths.output, &document.html).map_err(|source| CtlError::Write {
        path: paths.output.clone(),
        source,
    })?;
    tracing::info!(
        category_id,
        output = %paths.output.display(),
        bytes = document.html.len(),
        "Wrote catalogue"
    );

    Ok(GenerationReport {
        category_found: !category.is_empty(),
        courses: table.len(),
        summary_pages: document.summary_pages,
        detail_pages: document.detail_pages,
        output: paths.output.clone(),
    })
}
