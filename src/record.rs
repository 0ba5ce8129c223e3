use serde::{Deserialize, Serialize};

/// One person's measurements. Height is in inches and weight in pounds on
/// extraction; the transform stage rewrites them to meters and kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub height: f64,
    pub weight: f64,
}

impl Record {
    pub fn new<S: Into<String>>(name: S, height: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            height,
            weight,
        }
    }
}

/// Ordered collection of records accumulated during extraction. Rows are
/// appended in file-discovery order and never deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, mut rows: Vec<Record>) {
        self.rows.append(&mut rows);
    }

    pub fn push(&mut self, record: Record) {
        self.rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.rows.iter_mut()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
