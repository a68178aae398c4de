use crate::error::{AdvisingError, Result};
use crate::types::course::{Catalog, CourseRecord};
use crate::types::student::StudentProfile;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CourseRow {
    course_name: String,
    #[serde(default)]
    pass_rate: Option<String>,
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = std::fs::File::open(path)?;
    let catalog = read_catalog(file)?;
    tracing::info!(path = %path.display(), courses = catalog.len(), "loaded course catalog");
    Ok(catalog)
}

pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut rdr = csv_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize::<CourseRow>() {
        let row = row?;
        let pass_rate = parse_pass_rate(row.pass_rate.as_deref()).unwrap_or_else(|| {
            tracing::warn!(
                course = %row.course_name,
                raw = row.pass_rate.as_deref().unwrap_or(""),
                "unreadable pass rate, treating as 0%"
            );
            0.0
        });
        records.push(CourseRecord::new(row.course_name, pass_rate));
    }
    Ok(Catalog::new(records))
}

/// Accepts `72.5` or `72.5%`.
pub fn parse_pass_rate(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().trim_end_matches('%').trim();
    value.parse::<f64>().ok().filter(|rate| rate.is_finite())
}

pub fn load_students(path: &Path) -> Result<Vec<StudentProfile>> {
    let file = std::fs::File::open(path)?;
    let students = read_students(file)?;
    tracing::info!(path = %path.display(), students = students.len(), "loaded student directory");
    Ok(students)
}

pub fn read_students<R: Read>(reader: R) -> Result<Vec<StudentProfile>> {
    let mut rdr = csv_reader(reader);
    let mut students = Vec::new();
    for row in rdr.deserialize::<StudentProfile>() {
        students.push(row?);
    }
    Ok(students)
}

pub fn find_student(students: Vec<StudentProfile>, id: &str) -> Result<StudentProfile> {
    let id = id.trim();
    students
        .into_iter()
        .find(|student| student.id.trim() == id)
        .ok_or_else(|| AdvisingError::StudentNotFound(id.to_string()))
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}
