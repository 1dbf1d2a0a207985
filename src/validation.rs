//! Input validation for catalog and section snapshots.
//!
//! Checks structural integrity of the inputs to a planning pass. Detects:
//! - Duplicate course IDs
//! - Self-referencing, unknown, or circular prerequisites
//! - Courses without credits
//! - Section seat counts that are not numbers or disagree with `has_slots`
//!
//! The planner tolerates every one of these (it degrades to a worst-case
//! reading), so findings are diagnostics rather than hard failures.

use std::collections::HashSet;

use crate::models::{Course, CourseSection};
use crate::sequencing::sequence;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same ID.
    DuplicateId,
    /// A course lists itself as a prerequisite.
    SelfPrerequisite,
    /// A course references a prerequisite that doesn't exist.
    DanglingPrerequisite,
    /// Prerequisite graph contains a cycle.
    CyclicPrerequisite,
    /// A course carries zero credits.
    InvalidCredits,
    /// A section's remaining-slots value is not a number.
    UnparseableSlots,
    /// A section's `has_slots` flag disagrees with its seat count.
    InconsistentSlots,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog snapshot and a section feed snapshot.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. Every course has credits
/// 3. No course is its own prerequisite
/// 4. All prerequisite references point to existing courses
/// 5. No circular prerequisite chains
/// 6. Section seat counts are numeric and agree with `has_slots`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course], sections: &[CourseSection]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        if course.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCredits,
                format!("Course '{}' has no credits", course.id),
            ));
        }
    }

    for course in courses {
        for prereq in &course.prerequisites {
            if prereq == &course.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfPrerequisite,
                    format!("Course '{}' lists itself as a prerequisite", course.id),
                ));
            } else if !course_ids.contains(prereq.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingPrerequisite,
                    format!(
                        "Course '{}' references unknown prerequisite '{}'",
                        course.id, prereq
                    ),
                ));
            }
        }
    }

    let all: Vec<&Course> = courses.iter().collect();
    for edge in sequence(&all).broken_edges {
        if edge.course_id == edge.prerequisite_id {
            continue;
        }
        errors.push(ValidationError::new(
            ValidationErrorKind::CyclicPrerequisite,
            format!(
                "Circular prerequisite between '{}' and '{}'",
                edge.course_id, edge.prerequisite_id
            ),
        ));
    }

    for section in sections {
        if !section.has_numeric_remaining() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnparseableSlots,
                format!(
                    "Section {}/{} has non-numeric remaining slots '{}'",
                    section.course_code, section.section, section.remaining_slots
                ),
            ));
        } else if section.has_slots != (section.remaining_slot_count() > 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentSlots,
                format!(
                    "Section {}/{} reports has_slots={} with {} remaining",
                    section.course_code,
                    section.section,
                    section.has_slots,
                    section.remaining_slot_count()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
