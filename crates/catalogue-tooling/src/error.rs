//! Error types for loading and rendering.

use std::path::PathBuf;

/// Failure while reading one of the CSV sources.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{path} not found")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("category '{category_id}' not found in {path} (expected column '{column}')")]
    CategoryNotFound {
        category_id: String,
        path: PathBuf,
        column: String,
    },
}

impl LoadError {
    pub(crate) fn open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Failure while rendering an HTML fragment.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render error for '{fragment}': {source}")]
    Template {
        fragment: &'static str,
        source: askama::Error,
    },
}
