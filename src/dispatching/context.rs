//! Ranking context for rule evaluation.

use std::collections::HashSet;

use crate::models::{Course, Term};

/// Catalog-wide facts the priority rules need.
#[derive(Debug, Clone)]
pub struct RankingContext {
    /// The term a plan starts in; courses nominally placed in it rank higher.
    pub current_term: Term,
    /// IDs of courses the student has passed.
    pub passed: HashSet<String>,
}

impl RankingContext {
    /// Creates a context with no passed courses.
    pub fn for_term(current_term: Term) -> Self {
        Self {
            current_term,
            passed: HashSet::new(),
        }
    }

    /// Creates a context from a catalog snapshot.
    pub fn from_catalog(current_term: Term, courses: &[Course]) -> Self {
        Self {
            current_term,
            passed: courses
                .iter()
                .filter(|c| c.is_passed())
                .map(|c| c.id.clone())
                .collect(),
        }
    }

    /// Marks a course as passed.
    pub fn with_passed(mut self, course_id: impl Into<String>) -> Self {
        self.passed.insert(course_id.into());
        self
    }

    /// Whether a course ID has been passed.
    pub fn is_passed(&self, course_id: &str) -> bool {
        self.passed.contains(course_id)
    }

    /// Whether every prerequisite of `course` has been passed.
    ///
    /// Unknown prerequisite IDs count as unmet.
    pub fn prerequisites_met(&self, course: &Course) -> bool {
        course.prerequisites.iter().all(|p| self.is_passed(p))
    }
}
