//! Graduation-planning domain models.
//!
//! Provides the catalog inputs (courses, sections) and the plan outputs
//! (annotated courses, term buckets, plans).
//!
//! # Vocabulary
//!
//! | Type | Meaning |
//! |------|---------|
//! | Course | Catalog entry plus the student's status on it |
//! | CourseSection | One offering of a course code in the section feed |
//! | TermSlot | One `(year, term)`; three terms per year |
//! | TermBucket | Courses placed in one slot |
//! | SchedulePlan | Chronological buckets |
//! | PlanOutcome | Plan plus the courses that could not be placed |

mod course;
mod plan;
mod section;
mod term;

pub use course::{Course, CourseStatus};
pub use plan::{
    PlanOutcome, ScheduledCourse, SchedulePlan, TermBucket, UnscheduledCourse, UnscheduledReason,
};
pub use section::{CourseSection, MeetingDay};
pub use term::{Term, TermParseError, TermSlot, TERMS_PER_YEAR};
