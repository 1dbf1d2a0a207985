//! Course (catalog entry) model.
//!
//! A course is the unit a student has to complete. It carries its own
//! prerequisite list and a nominal catalog placement, which is only a hint:
//! the scheduled placement is decided by the allocator.

use serde::{Deserialize, Serialize};

use super::Term;

/// Progress of a student on a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Already completed; never scheduled again.
    Passed,
    /// Currently in progress; scheduled ahead of pending courses.
    Active,
    /// Not taken yet.
    Pending,
}

impl CourseStatus {
    /// Whether a course with this status needs a place in the plan.
    pub fn is_candidate(self) -> bool {
        !matches!(self, CourseStatus::Passed)
    }
}

/// A catalog course together with the student's status on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human catalog code (e.g. "CPE101"); links the course to its sections.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Credit units.
    pub credits: u32,
    /// Student progress.
    pub status: CourseStatus,
    /// IDs of courses that must be completed first.
    pub prerequisites: Vec<String>,
    /// Nominal catalog year.
    pub year: u32,
    /// Nominal catalog term.
    pub term: Term,
}

impl Course {
    /// Creates a pending 0-credit course placed in year 1, term 1.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: String::new(),
            credits: 0,
            status: CourseStatus::Pending,
            prerequisites: Vec::new(),
            year: 1,
            term: Term::First,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit units.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the student status.
    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a prerequisite course ID.
    pub fn with_prerequisite(mut self, course_id: impl Into<String>) -> Self {
        self.prerequisites.push(course_id.into());
        self
    }

    /// Sets the nominal catalog placement.
    pub fn with_placement(mut self, year: u32, term: Term) -> Self {
        self.year = year;
        self.term = term;
        self
    }

    /// Whether the course has already been passed.
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.status == CourseStatus::Passed
    }

    /// Whether the course lists itself as a prerequisite.
    pub fn is_self_prerequisite(&self) -> bool {
        self.prerequisites.iter().any(|p| p == &self.id)
    }
}
