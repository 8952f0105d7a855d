//! Errors that stop catalogue generation.

use std::path::PathBuf;

use catalogue_tooling::RenderError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CtlError {
    #[error("HTML template not found at {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("failed to read HTML template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write output HTML {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CtlError {
    /// Whether the failure ends the process with a non-zero status.
    ///
    /// Only an unusable template stops a run. A document that cannot be written
    /// is reported and the process still exits successfully.
    pub(crate) fn is_fatal(&self) -> bool {
        !matches!(self, Self::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_errors_are_fatal() {
        let err = CtlError::TemplateNotFound {
            path: PathBuf::from("print.html"),
        };
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "HTML template not found at print.html");
    }

    #[test]
    fn test_write_error_is_not_fatal() {
        let err = CtlError::Write {
            path: PathBuf::from("out/output.html"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!err.is_fatal());
    }
}
