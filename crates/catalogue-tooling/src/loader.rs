//! CSV loading for the category metadata table and per-category course tables.
//!
//! `try_*` functions return typed errors. The plain variants log the failure
//! and fall back to empty data, so a missing or broken source never stops
//! document generation.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::LoadError;
use crate::model::{CategoryRecord, CourseRecord, CourseTable, Record};

fn open_reader(path: &Path) -> Result<csv::Reader<File>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::open(path.to_path_buf(), e))?;
    Ok(csv::ReaderBuilder::new().flexible(true).from_reader(file))
}

fn csv_error(path: &Path) -> impl FnOnce(csv::Error) -> LoadError + '_ {
    move |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Pair header names with row values. Short rows leave trailing fields absent.
fn to_record(headers: &StringRecord, row: &StringRecord) -> Record {
    headers.iter().zip(row.iter()).collect()
}

/// Find the row whose `id_column` equals `category_id`.
pub fn try_load_category_record(
    path: &Path,
    category_id: &str,
    id_column: &str,
) -> Result<CategoryRecord, LoadError> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers().map_err(csv_error(path))?.clone();

    for row in reader.records() {
        let record = to_record(&headers, &row.map_err(csv_error(path))?);
        if record.get(id_column) == Some(category_id) {
            return Ok(record);
        }
    }

    Err(LoadError::CategoryNotFound {
        category_id: category_id.to_string(),
        path: path.to_path_buf(),
        column: id_column.to_string(),
    })
}

/// Load the metadata record for one category, or an empty record on any failure.
pub fn load_category_record(path: &Path, category_id: &str, id_column: &str) -> CategoryRecord {
    match try_load_category_record(path, category_id, id_column) {
        Ok(record) => {
            tracing::debug!(path = %path.display(), category_id, "Loaded category record");
            record
        }
        Err(e @ LoadError::CategoryNotFound { .. }) => {
            tracing::warn!(error = %e, "Category metadata missing, using defaults");
            Record::new()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load category metadata");
            Record::new()
        }
    }
}

/// Read every course row together with the header field order.
pub fn try_load_course_records(path: &Path) -> Result<CourseTable, LoadError> {
    let mut reader = open_reader(path)?;
    let headers = reader.headers().map_err(csv_error(path))?.clone();

    let courses = reader
        .records()
        .map(|row| row.map(|r| to_record(&headers, &r)))
        .collect::<Result<Vec<CourseRecord>, _>>()
        .map_err(csv_error(path))?;

    Ok(CourseTable {
        fields: headers.iter().map(str::to_string).collect(),
        courses,
    })
}

/// Load all courses of a category, or an empty table on any failure.
pub fn load_course_records(path: &Path) -> CourseTable {
    match try_load_course_records(path) {
        Ok(table) => {
            tracing::debug!(
                path = %path.display(),
                courses = table.len(),
                fields = table.fields.len(),
                "Loaded course records"
            );
            table
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load course records");
            CourseTable::default()
        }
    }
}
