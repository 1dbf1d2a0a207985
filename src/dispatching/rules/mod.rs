//! Built-in priority rules.
//!
//! # Categories
//!
//! - **Readiness**: PREREQS
//! - **Enrollment**: PETITION, SECTIONS
//! - **Calendar**: CURRENT_TERM
//!
//! # Score Convention
//! All rules return lower scores for higher priority courses.

use super::{DispatchingRule, RankingContext, RuleScore};
use crate::models::ScheduledCourse;

// ======================== Readiness rules ========================

/// Prerequisites Met.
///
/// Courses whose prerequisites have all been passed rank above courses
/// still waiting on something. Unknown prerequisite IDs count as unmet.
#[derive(Debug, Clone, Copy)]
pub struct PrerequisitesMet;

impl DispatchingRule for PrerequisitesMet {
    fn name(&self) -> &'static str {
        "PREREQS"
    }

    fn evaluate(&self, course: &ScheduledCourse, context: &RankingContext) -> RuleScore {
        if context.prerequisites_met(&course.course) {
            0.0
        } else {
            1.0
        }
    }

    fn description(&self) -> &'static str {
        "All Prerequisites Passed"
    }
}

// ======================== Enrollment rules ========================

/// No Petition.
///
/// Courses with at least one open section rank above courses that will
/// need a petition.
#[derive(Debug, Clone, Copy)]
pub struct NoPetition;

impl DispatchingRule for NoPetition {
    fn name(&self) -> &'static str {
        "PETITION"
    }

    fn evaluate(&self, course: &ScheduledCourse, _context: &RankingContext) -> RuleScore {
        if course.needs_petition {
            1.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Open Section Available"
    }
}

/// Most Open Sections.
///
/// More open sections means an easier enrollment.
#[derive(Debug, Clone, Copy)]
pub struct MostSections;

impl DispatchingRule for MostSections {
    fn name(&self) -> &'static str {
        "SECTIONS"
    }

    fn evaluate(&self, course: &ScheduledCourse, _context: &RankingContext) -> RuleScore {
        -(course.available_section_count() as f64)
    }

    fn description(&self) -> &'static str {
        "Most Open Sections"
    }
}

// ======================== Calendar rules ========================

/// Current Term Match.
///
/// Courses whose nominal catalog term equals the current term rank first.
#[derive(Debug, Clone, Copy)]
pub struct CurrentTerm;

impl DispatchingRule for CurrentTerm {
    fn name(&self) -> &'static str {
        "CURRENT_TERM"
    }

    fn evaluate(&self, course: &ScheduledCourse, context: &RankingContext) -> RuleScore {
        if course.course.term == context.current_term {
            0.0
        } else {
            1.0
        }
    }

    fn description(&self) -> &'static str {
        "Offered In Current Term"
    }
}
