//! Config file discovery and loading for `.catalogue.toml`.
//!
//! An explicit `--config` path is used as given. Otherwise two locations are
//! checked in precedence order:
//! 1. `./.catalogue.toml` (project-local)
//! 2. `~/.config/catalogue.toml` (user-global)

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".catalogue.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "catalogue.toml";

/// Load config from `explicit` or the first discovered location, or return defaults.
pub(crate) fn load_cli_config(explicit: Option<&Path>) -> CliConfig {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    match path {
        Some(path) => load_config_file(&path),
        None => CliConfig::default(),
    }
}

/// Parse one config file, falling back to defaults when it is unreadable or invalid.
pub(crate) fn load_config_file(path: &Path) -> CliConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded catalogue config");
                config
            }
            Err(e) => {
                tracing::warn!(
                    ?path,
                    error = %e,
                    "Failed to parse catalogue config, using defaults"
                );
                CliConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read catalogue config, using defaults");
            CliConfig::default()
        }
    }
}

/// Search for config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    if let Some(home) = home_dir() {
        let global = home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue_tooling::CatalogueLayout;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.paths.template.is_none());
        assert!(config.paths.output.is_none());
        assert_eq!(config.layout, CatalogueLayout::default());
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
template = "templates/print.html"
category-data = "data/pdfdata.csv"
categories-root = "../formations"
output = "dist/catalogue.html"

[layout]
page-size = 12
excluded-detail-fields = ["Lieu", "Contact"]
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.paths.template,
            Some(PathBuf::from("templates/print.html"))
        );
        assert_eq!(
            config.paths.category_data,
            Some(PathBuf::from("data/pdfdata.csv"))
        );
        assert_eq!(
            config.paths.categories_root,
            Some(PathBuf::from("../formations"))
        );
        assert_eq!(config.paths.output, Some(PathBuf::from("dist/catalogue.html")));
        assert_eq!(config.layout.page_size.get(), 12);
        assert_eq!(config.layout.excluded_detail_fields, vec!["Lieu", "Contact"]);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: CliConfig = toml::from_str(r#"output = "out.html""#).unwrap();
        assert_eq!(config.paths.output, Some(PathBuf::from("out.html")));
        assert!(config.paths.template.is_none());
        assert_eq!(config.layout, CatalogueLayout::default());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.toml");
        std::fs::write(&path, "[layout]\npage-size = 5\n").unwrap();

        let config = load_cli_config(Some(&path));
        assert_eq!(config.layout.page_size.get(), 5);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.toml");
        std::fs::write(&path, "[layout]\npage-size = 0\n").unwrap();

        let config = load_config_file(&path);
        assert_eq!(config.layout, CatalogueLayout::default());
    }

    #[test]
    fn test_missing_explicit_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_cli_config(Some(&dir.path().join("absent.toml")));
        assert!(config.paths.template.is_none());
    }
}
