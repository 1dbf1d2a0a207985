//! Shared plan holder.
//!
//! Regeneration and in-place edits may be triggered from different threads
//! (for example a background refresh and a user request). `PlanStore` keeps the
//! current outcome behind one mutex and holds it for the whole regeneration,
//! so an edit is applied either to the old plan or to the new one, never to a
//! plan that is half built.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::kpi::PlanKpi;
use super::planner::{GraduationPlanner, PlanRequest};
use crate::models::{CourseSection, PlanOutcome, ScheduledCourse};

/// Thread-safe holder of the most recent plan.
///
/// # Example
///
/// ```
/// use u_gradplan::models::Course;
/// use u_gradplan::scheduler::{GraduationPlanner, PlanRequest, PlanStore};
///
/// let store = PlanStore::new(GraduationPlanner::new());
/// let courses = vec![
///     Course::new("A", "CPE101").with_credits(3),
///     Course::new("B", "CPE102").with_credits(3),
/// ];
/// store.regenerate(&PlanRequest::new(courses, Vec::new(), 2025, "Term 1"));
///
/// assert!(store.remove_course("A").is_some());
/// assert_eq!(store.snapshot().plan.course_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PlanStore {
    planner: GraduationPlanner,
    current: Mutex<PlanOutcome>,
}

impl PlanStore {
    /// Creates a store holding an empty plan.
    pub fn new(planner: GraduationPlanner) -> Self {
        Self {
            planner,
            current: Mutex::new(PlanOutcome::empty()),
        }
    }

    /// Creates a store seeded with an existing outcome.
    pub fn with_outcome(planner: GraduationPlanner, outcome: PlanOutcome) -> Self {
        Self {
            planner,
            current: Mutex::new(outcome),
        }
    }

    /// Planner used by [`regenerate`](Self::regenerate).
    pub fn planner(&self) -> &GraduationPlanner {
        &self.planner
    }

    fn lock(&self) -> MutexGuard<'_, PlanOutcome> {
        // A panic mid-edit leaves a plan that is still structurally valid.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the current plan with a freshly generated one.
    ///
    /// Returns a copy of the new outcome.
    pub fn regenerate(&self, request: &PlanRequest) -> PlanOutcome {
        let mut current = self.lock();
        *current = self.planner.generate_request(request);
        debug!(
            terms = current.plan.term_count(),
            courses = current.plan.course_count(),
            "plan replaced"
        );
        current.clone()
    }

    /// Removes a course from the current plan.
    pub fn remove_course(&self, course_id: &str) -> Option<ScheduledCourse> {
        let removed = self.lock().plan.remove_course(course_id);
        debug!(course = course_id, found = removed.is_some(), "remove course");
        removed
    }

    /// Changes the recommended section of a course in the current plan.
    pub fn change_section(&self, course_id: &str, section: CourseSection) -> bool {
        let found = self.lock().plan.change_section(course_id, section);
        debug!(course = course_id, found, "change section");
        found
    }

    /// Copy of the current outcome.
    pub fn snapshot(&self) -> PlanOutcome {
        self.lock().clone()
    }

    /// KPIs of the current outcome.
    pub fn kpi(&self) -> PlanKpi {
        PlanKpi::calculate(&self.lock())
    }
}
