use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    pub name: String,
    /// Historical pass rate as a percentage.
    pub pass_rate: f64,
}

impl CourseRecord {
    pub fn new(name: impl Into<String>, pass_rate: f64) -> Self {
        Self {
            name: name.into(),
            pass_rate,
        }
    }

    /// Share of students receiving a D, F or withdrawal, as a percentage.
    pub fn dfw_rate(&self) -> f64 {
        100.0 - self.pass_rate
    }
}

/// Read-only course reference data keyed by course name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<CourseRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog in input order. Later duplicates of a name are
    /// skipped and logged.
    pub fn new(records: impl IntoIterator<Item = CourseRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            if catalog.index.contains_key(&record.name) {
                tracing::warn!(course = %record.name, "duplicate catalog entry ignored");
                continue;
            }
            catalog
                .index
                .insert(record.name.clone(), catalog.courses.len());
            catalog.courses.push(record);
        }
        catalog
    }

    pub fn get(&self, name: &str) -> Option<&CourseRecord> {
        self.index.get(name).map(|&idx| &self.courses[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseRecord> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
