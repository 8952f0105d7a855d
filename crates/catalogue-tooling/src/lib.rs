//! Course catalogue tooling: table loading, page rendering and template composition.
//!
//! This crate holds everything needed to turn a category metadata table and a
//! per-category course table into one printable HTML document. It performs no
//! file writes; the `catalogue-ctl` binary owns paths and output.
//!
//! # Modules
//!
//! - [`config`] — Layout configuration (columns, page size, placeholders, markers)
//! - [`model`] — Category and course records
//! - [`loader`] — CSV loading with logged, empty-result fallbacks
//! - [`escape`] — HTML escaping shared by fragments and placeholders
//! - [`render`] — Askama-backed summary rows, summary pages and detail pages
//! - [`compose`] — Placeholder substitution and marker splicing
//! - [`document`] — End-to-end document assembly from loaded data

pub mod compose;
pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod loader;
pub mod model;
pub mod render;

pub use config::{CatalogueLayout, InsertMarkers, Placeholder, SummaryColumn};
pub use document::{assemble_document, AssembledDocument};
pub use error::{LoadError, RenderError};
pub use model::{CategoryRecord, CourseRecord, CourseTable, Record};
