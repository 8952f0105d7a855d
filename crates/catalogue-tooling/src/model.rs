//! Category and course records.

use std::collections::HashMap;

/// One CSV row keyed by header name.
///
/// A field present in the header but empty in the row is stored as an empty
/// string, so it is distinct from a field that is absent altogether.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

/// The metadata row selected for one category.
pub type CategoryRecord = Record;

/// One course row.
pub type CourseRecord = Record;

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Field value, or `fallback` when the record has no such field.
    pub fn get_or<'a>(&'a self, field: &str, fallback: &'a str) -> &'a str {
        self.get(field).unwrap_or(fallback)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// All courses of one category, with the header order shared by every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseTable {
    /// Header field names in source order.
    pub fields: Vec<String>,

    /// Course rows in source order.
    pub courses: Vec<CourseRecord>,
}

impl CourseTable {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_distinguishes_empty_from_absent() {
        let record: Record = [("Prix", "")].into_iter().collect();
        assert_eq!(record.get_or("Prix", "N/A"), "");
        assert_eq!(record.get_or("Lieu", "N/A"), "N/A");
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = Record::new();
        record.insert("ID", "1");
        record.insert("ID", "2");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("ID"), Some("2"));
    }
}
