//! Plan (solution) model.
//!
//! A plan is a chronological sequence of term buckets, each holding the
//! courses placed in one `(year, term)`. Courses that could not be placed
//! are reported next to the plan instead of being dropped silently.
//!
//! # Mutation
//! [`SchedulePlan::remove_course`] and [`SchedulePlan::change_section`] edit a
//! generated plan in place. They never re-run allocation: removing a course
//! does not re-check the placement of courses that depended on it.

use serde::{Deserialize, Serialize};

use super::{Course, CourseSection, TermSlot};

/// A course annotated with its section availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// The catalog course.
    #[serde(flatten)]
    pub course: Course,
    /// Sections of this course with free seats.
    pub available_sections: Vec<CourseSection>,
    /// True iff no open section exists (or the feed was empty).
    pub needs_petition: bool,
    /// Open section with the most remaining seats.
    pub recommended_section: Option<CourseSection>,
}

impl ScheduledCourse {
    /// Course ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.course.id
    }

    /// Credit units.
    #[inline]
    pub fn credits(&self) -> u32 {
        self.course.credits
    }

    /// Number of open sections.
    #[inline]
    pub fn available_section_count(&self) -> usize {
        self.available_sections.len()
    }
}

/// The courses placed in one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermBucket {
    /// Placement of every course in this bucket.
    pub slot: TermSlot,
    /// Courses in placement order.
    pub courses: Vec<ScheduledCourse>,
}

impl TermBucket {
    /// Creates an empty bucket.
    pub fn new(slot: TermSlot) -> Self {
        Self {
            slot,
            courses: Vec::new(),
        }
    }

    /// Sum of course credits.
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits()).sum()
    }

    /// Whether no course is placed here.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Finds a course by ID.
    pub fn course(&self, course_id: &str) -> Option<&ScheduledCourse> {
        self.courses.iter().find(|c| c.id() == course_id)
    }
}

/// A term-by-term recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Buckets in chronological order.
    pub terms: Vec<TermBucket>,
}

impl SchedulePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bucket. Callers keep chronological order.
    pub fn push_term(&mut self, bucket: TermBucket) {
        self.terms.push(bucket);
    }

    /// Number of terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of placed courses.
    pub fn course_count(&self) -> usize {
        self.terms.iter().map(|t| t.courses.len()).sum()
    }

    /// Whether nothing is planned.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of credits over all terms.
    pub fn total_credits(&self) -> u32 {
        self.terms.iter().map(|t| t.total_credits()).sum()
    }

    /// Slot of the last planned term.
    pub fn last_slot(&self) -> Option<TermSlot> {
        self.terms.last().map(|t| t.slot)
    }

    /// Bucket for a given slot.
    pub fn term(&self, slot: TermSlot) -> Option<&TermBucket> {
        self.terms.iter().find(|t| t.slot == slot)
    }

    /// Where a course was placed.
    pub fn slot_of(&self, course_id: &str) -> Option<TermSlot> {
        self.terms
            .iter()
            .find(|t| t.course(course_id).is_some())
            .map(|t| t.slot)
    }

    /// Finds a placed course.
    pub fn course(&self, course_id: &str) -> Option<&ScheduledCourse> {
        self.terms.iter().find_map(|t| t.course(course_id))
    }

    /// All placed courses in plan order.
    pub fn courses(&self) -> impl Iterator<Item = &ScheduledCourse> {
        self.terms.iter().flat_map(|t| t.courses.iter())
    }

    /// Removes a course from whichever term holds it.
    ///
    /// Terms left without courses are dropped. Returns the removed course.
    pub fn remove_course(&mut self, course_id: &str) -> Option<ScheduledCourse> {
        let mut removed = None;
        for bucket in &mut self.terms {
            if let Some(pos) = bucket.courses.iter().position(|c| c.id() == course_id) {
                removed = Some(bucket.courses.remove(pos));
                break;
            }
        }
        self.terms.retain(|t| !t.is_empty());
        removed
    }

    /// Replaces the recommended section of a placed course.
    ///
    /// Credits, ordering and petition status are left as they are.
    /// Returns `false` if the course is not in the plan.
    pub fn change_section(&mut self, course_id: &str, section: CourseSection) -> bool {
        let target = self
            .terms
            .iter_mut()
            .flat_map(|t| t.courses.iter_mut())
            .find(|c| c.id() == course_id);

        match target {
            Some(course) => {
                course.recommended_section = Some(section);
                true
            }
            None => false,
        }
    }
}

/// Why a candidate course is missing from the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnscheduledReason {
    /// Some prerequisites were never placed early enough.
    PrerequisiteGapUnmet {
        /// Prerequisite IDs that blocked the course.
        blocking: Vec<String>,
    },
    /// Allocation stopped at its pass limit before reaching the course.
    PassLimitReached {
        /// Passes that ran.
        passes: usize,
    },
    /// The course alone is heavier than one term may carry.
    ExceedsCreditCap {
        /// Course credits.
        credits: u32,
        /// Per-term limit in effect.
        cap: u32,
    },
}

/// A candidate course that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscheduledCourse {
    /// Course ID.
    pub course_id: String,
    /// Catalog code.
    pub code: String,
    /// Why it was left out.
    pub reason: UnscheduledReason,
}

/// Result of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// The term-by-term plan.
    pub plan: SchedulePlan,
    /// Candidates that did not make it into the plan.
    pub unscheduled: Vec<UnscheduledCourse>,
}

impl PlanOutcome {
    /// An outcome with nothing planned and nothing reported.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether every candidate was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Whether a course was left out.
    pub fn is_unscheduled(&self, course_id: &str) -> bool {
        self.unscheduled.iter().any(|u| u.course_id == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Term;

    fn scheduled(id: &str, credits: u32) -> ScheduledCourse {
        ScheduledCourse {
            course: Course::new(id, format!("{id}-CODE")).with_credits(credits),
            available_sections: Vec::new(),
            needs_petition: true,
            recommended_section: None,
        }
    }

    fn sample_plan() -> SchedulePlan {
        let t1 = TermSlot::new(2025, Term::First);
        let mut b1 = TermBucket::new(t1);
        b1.courses.push(scheduled("A", 3));
        b1.courses.push(scheduled("B", 4));
        let mut b2 = TermBucket::new(t1.successor());
        b2.courses.push(scheduled("C", 3));

        let mut plan = SchedulePlan::new();
        plan.push_term(b1);
        plan.push_term(b2);
        plan
    }

    #[test]
    fn test_plan_totals() {
        let plan = sample_plan();
        assert_eq!(plan.term_count(), 2);
        assert_eq!(plan.course_count(), 3);
        assert_eq!(plan.total_credits(), 10);
        assert_eq!(plan.terms[0].total_credits(), 7);
        assert_eq!(plan.last_slot(), Some(TermSlot::new(2025, Term::Second)));
    }

    #[test]
    fn test_slot_lookup() {
        let plan = sample_plan();
        assert_eq!(plan.slot_of("C"), Some(TermSlot::new(2025, Term::Second)));
        assert_eq!(plan.slot_of("Z"), None);
        assert!(plan.term(TermSlot::new(2025, Term::First)).is_some());
    }

    #[test]
    fn test_remove_course_keeps_nonempty_term() {
        let mut plan = sample_plan();
        let removed = plan.remove_course("A").unwrap();
        assert_eq!(removed.id(), "A");
        assert_eq!(plan.term_count(), 2);
        assert_eq!(plan.terms[0].courses.len(), 1);
    }

    #[test]
    fn test_remove_course_drops_empty_term() {
        let mut plan = sample_plan();
        plan.remove_course("C");
        assert_eq!(plan.term_count(), 1);
        assert_eq!(plan.last_slot(), Some(TermSlot::new(2025, Term::First)));
    }

    #[test]
    fn test_remove_unknown_course() {
        let mut plan = sample_plan();
        assert!(plan.remove_course("nope").is_none());
        assert_eq!(plan.course_count(), 3);
    }

    #[test]
    fn test_change_section_only_touches_recommendation() {
        let mut plan = sample_plan();
        let section = CourseSection::new("B-CODE", "S2").with_seats(30, 5);

        assert!(plan.change_section("B", section.clone()));
        let b = plan.course("B").unwrap();
        assert_eq!(b.recommended_section.as_ref(), Some(&section));
        assert!(b.needs_petition);
        assert_eq!(b.credits(), 4);
        assert_eq!(plan.terms[0].courses[1].id(), "B");

        assert!(!plan.change_section("nope", section));
    }

    #[test]
    fn test_outcome_flags() {
        let mut outcome = PlanOutcome::empty();
        assert!(outcome.is_complete());
        outcome.unscheduled.push(UnscheduledCourse {
            course_id: "X".into(),
            code: "X1".into(),
            reason: UnscheduledReason::ExceedsCreditCap { credits: 30, cap: 21 },
        });
        assert!(!outcome.is_complete());
        assert!(outcome.is_unscheduled("X"));
    }
}
