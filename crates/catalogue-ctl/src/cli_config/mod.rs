//! CLI configuration: input/output paths and the rendering layout.
//!
//! Every key is optional. Values given on the command line win over the config
//! file, which wins over the built-in defaults.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use std::path::PathBuf;

use catalogue_tooling::CatalogueLayout;
use serde::Deserialize;

/// Input and output locations, any of which may be left unset.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct PathOverrides {
    /// Base HTML template with placeholders and insertion markers.
    pub template: Option<PathBuf>,

    /// Category metadata table.
    pub category_data: Option<PathBuf>,

    /// Directory holding one `<category>/data.csv` per category.
    pub categories_root: Option<PathBuf>,

    /// Generated HTML file.
    pub output: Option<PathBuf>,
}

/// Catalogue configuration loaded from `.catalogue.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    #[serde(flatten)]
    pub paths: PathOverrides,

    /// Page size, summary columns, excluded fields, placeholders and markers.
    #[serde(default)]
    pub layout: CatalogueLayout,
}
