use crate::error::{AdvisingError, Result};
use serde::Serialize;

pub const MAX_COURSES: usize = 8;

/// Distinct course names chosen for one student, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSelection {
    courses: Vec<String>,
}

impl ScheduleSelection {
    pub fn new<I, S>(courses: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for course in courses {
            selection.push(course.into())?;
        }
        Ok(selection)
    }

    /// Adds a course. Any change to the selection invalidates prior tutoring,
    /// so the fresh tutoring set is handed back.
    pub fn add(&mut self, course: impl Into<String>) -> Result<TutoringSet> {
        self.push(course.into())?;
        Ok(TutoringSet::default())
    }

    pub fn remove(&mut self, course: &str) -> TutoringSet {
        self.courses.retain(|selected| selected != course);
        TutoringSet::default()
    }

    fn push(&mut self, course: String) -> Result<()> {
        if self.contains(&course) {
            return Err(AdvisingError::Selection(format!(
                "course selected more than once: {course}"
            )));
        }
        if self.courses.len() >= MAX_COURSES {
            return Err(AdvisingError::Selection(format!(
                "at most {MAX_COURSES} courses can be selected"
            )));
        }
        self.courses.push(course);
        Ok(())
    }

    pub fn contains(&self, course: &str) -> bool {
        self.courses.iter().any(|selected| selected == course)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Courses of a selection with confirmed tutoring support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TutoringSet {
    courses: Vec<String>,
}

impl TutoringSet {
    pub fn for_selection<I, S>(selection: &ScheduleSelection, courses: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tutored = Self::default();
        for course in courses {
            let course = course.into();
            if !selection.contains(&course) {
                return Err(AdvisingError::Selection(format!(
                    "tutoring requested for unselected course: {course}"
                )));
            }
            if !tutored.contains(&course) {
                tutored.courses.push(course);
            }
        }
        Ok(tutored)
    }

    pub fn contains(&self, course: &str) -> bool {
        self.courses.iter().any(|tutored| tutored == course)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
