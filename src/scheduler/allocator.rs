//! Term allocator: iterative bucket packing.
//!
//! # Algorithm
//!
//! Repeat until no candidate remains or the pass limit is reached:
//! 1. Scan the remaining ranked candidates from the highest index down
//!    (the lowest-ranked first, unless [`ScanOrder::RankOrder`] is set).
//!    A candidate whose prerequisite gap fails at the current slot is
//!    skipped for this pass. A candidate that would overflow the credit cap
//!    closes the current term; the gap is re-checked at the new slot.
//!    Otherwise it is placed and removed from the remaining list.
//! 2. If a pass places nothing, close the current term and move on.
//!
//! # Prerequisite gap
//! A prerequisite is satisfied when it has been passed, when it was placed
//! in a strictly earlier slot, or when its edge was cut to break a cycle.
//! Unknown prerequisite IDs are never satisfied.
//!
//! # Complexity
//! O(p * n * k) where p=passes, n=candidates, k=prerequisites per course.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{MAX_CREDITS_PER_TERM, MAX_PASSES};
use crate::models::{
    Course, ScheduledCourse, SchedulePlan, TermBucket, TermSlot, UnscheduledCourse,
    UnscheduledReason,
};

/// Direction in which a pass visits the ranked candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Lowest-ranked candidate first.
    #[default]
    Reverse,
    /// Highest-ranked candidate first.
    RankOrder,
}

/// Facts that decide whether a prerequisite counts as satisfied.
#[derive(Debug, Clone, Default)]
pub struct GapRules {
    /// IDs of passed courses.
    pub passed: HashSet<String>,
    /// `(course_id, prerequisite_id)` edges ignored because of a cycle.
    pub broken_edges: HashSet<(String, String)>,
}

impl GapRules {
    /// Creates rules with nothing passed and no broken edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a course as passed.
    pub fn with_passed(mut self, course_id: impl Into<String>) -> Self {
        self.passed.insert(course_id.into());
        self
    }

    /// Ignores one prerequisite edge.
    pub fn with_broken_edge(
        mut self,
        course_id: impl Into<String>,
        prerequisite_id: impl Into<String>,
    ) -> Self {
        self.broken_edges
            .insert((course_id.into(), prerequisite_id.into()));
        self
    }

    fn is_exempt(&self, course: &Course, prerequisite: &str) -> bool {
        self.passed.contains(prerequisite)
            || self
                .broken_edges
                .contains(&(course.id.clone(), prerequisite.to_string()))
    }
}

/// Result of one allocation.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    /// Placed courses by term.
    pub plan: SchedulePlan,
    /// Candidates left out, with the reason.
    pub unscheduled: Vec<UnscheduledCourse>,
    /// Passes that ran.
    pub passes: usize,
}

/// Packs ranked candidates into consecutive terms.
///
/// # Example
///
/// ```
/// use u_gradplan::availability::SectionIndex;
/// use u_gradplan::models::{Course, Term, TermSlot};
/// use u_gradplan::scheduler::{GapRules, TermAllocator};
///
/// let index = SectionIndex::new(&[]);
/// let ranked = vec![
///     index.resolve(&Course::new("A", "A101").with_credits(3)),
///     index.resolve(&Course::new("B", "B101").with_credits(3).with_prerequisite("A")),
/// ];
/// let origin = TermSlot::new(2025, Term::First);
/// let allocation = TermAllocator::new().allocate(ranked, origin, &GapRules::new());
///
/// assert_eq!(allocation.plan.slot_of("A"), Some(origin));
/// assert_eq!(allocation.plan.slot_of("B"), Some(origin.successor()));
/// ```
#[derive(Debug, Clone)]
pub struct TermAllocator {
    max_credits_per_term: u32,
    max_passes: usize,
    scan_order: ScanOrder,
}

impl TermAllocator {
    /// Creates an allocator with the default limits.
    pub fn new() -> Self {
        Self {
            max_credits_per_term: MAX_CREDITS_PER_TERM,
            max_passes: MAX_PASSES,
            scan_order: ScanOrder::Reverse,
        }
    }

    /// Sets the per-term credit cap.
    pub fn with_max_credits_per_term(mut self, credits: u32) -> Self {
        self.max_credits_per_term = credits;
        self
    }

    /// Sets the pass limit.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Sets the scan direction.
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }

    /// Places `ranked` candidates into terms starting at `origin`.
    ///
    /// Candidates heavier than the credit cap are reported instead of placed.
    pub fn allocate(
        &self,
        ranked: Vec<ScheduledCourse>,
        origin: TermSlot,
        rules: &GapRules,
    ) -> Allocation {
        let cap = self.max_credits_per_term;
        let (mut remaining, oversized): (Vec<_>, Vec<_>) =
            ranked.into_iter().partition(|c| c.credits() <= cap);

        // Passes always walk indices downward so removal is safe; flipping
        // the list turns that walk into rank order.
        if self.scan_order == ScanOrder::RankOrder {
            remaining.reverse();
        }

        let mut unscheduled: Vec<UnscheduledCourse> = oversized
            .into_iter()
            .map(|c| UnscheduledCourse {
                course_id: c.course.id.clone(),
                code: c.course.code.clone(),
                reason: UnscheduledReason::ExceedsCreditCap {
                    credits: c.credits(),
                    cap,
                },
            })
            .collect();

        let mut state = AllocationState::new(origin, cap, rules);
        let mut passes = 0;

        while !remaining.is_empty() && passes < self.max_passes {
            passes += 1;
            let placed = state.run_pass(&mut remaining);
            if placed == 0 {
                debug!(slot = %state.cursor, remaining = remaining.len(), "no placement, advancing term");
                state.advance_term();
            }
        }

        if self.scan_order == ScanOrder::RankOrder {
            remaining.reverse();
        }
        unscheduled.extend(remaining.iter().map(|c| {
            let blocking = state.blocking_prerequisites(&c.course);
            UnscheduledCourse {
                course_id: c.course.id.clone(),
                code: c.course.code.clone(),
                reason: if blocking.is_empty() {
                    UnscheduledReason::PassLimitReached { passes }
                } else {
                    UnscheduledReason::PrerequisiteGapUnmet { blocking }
                },
            }
        }));

        Allocation {
            plan: state.finish(),
            unscheduled,
            passes,
        }
    }
}

impl Default for TermAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable state of a single allocation; dropped when it ends.
struct AllocationState<'r> {
    cursor: TermSlot,
    bucket: TermBucket,
    bucket_credits: u32,
    cap: u32,
    placements: HashMap<String, TermSlot>,
    plan: SchedulePlan,
    rules: &'r GapRules,
}

impl<'r> AllocationState<'r> {
    fn new(origin: TermSlot, cap: u32, rules: &'r GapRules) -> Self {
        Self {
            cursor: origin,
            bucket: TermBucket::new(origin),
            bucket_credits: 0,
            cap,
            placements: HashMap::new(),
            plan: SchedulePlan::new(),
            rules,
        }
    }

    /// One reverse scan over `remaining`. Returns the number placed.
    fn run_pass(&mut self, remaining: &mut Vec<ScheduledCourse>) -> usize {
        let mut placed = 0;

        for idx in (0..remaining.len()).rev() {
            if !self.gap_satisfied(&remaining[idx].course, self.cursor) {
                continue;
            }

            if self.bucket_credits + remaining[idx].credits() > self.cap {
                self.advance_term();
                if !self.gap_satisfied(&remaining[idx].course, self.cursor) {
                    continue;
                }
            }

            let course = remaining.remove(idx);
            self.place(course);
            placed += 1;
        }

        placed
    }

    fn gap_satisfied(&self, course: &Course, slot: TermSlot) -> bool {
        course.prerequisites.iter().all(|p| {
            self.rules.is_exempt(course, p)
                || self
                    .placements
                    .get(p)
                    .is_some_and(|placed| placed.precedes(slot))
        })
    }

    fn blocking_prerequisites(&self, course: &Course) -> Vec<String> {
        course
            .prerequisites
            .iter()
            .filter(|p| {
                !self.rules.is_exempt(course, p)
                    && !self
                        .placements
                        .get(p.as_str())
                        .is_some_and(|placed| placed.precedes(self.cursor))
            })
            .cloned()
            .collect()
    }

    fn place(&mut self, course: ScheduledCourse) {
        trace!(course = %course.course.id, slot = %self.cursor, credits = course.credits(), "placed");
        self.bucket_credits += course.credits();
        self.placements.insert(course.course.id.clone(), self.cursor);
        self.bucket.courses.push(course);
    }

    /// Closes the current bucket (kept only if non-empty) and opens the next term.
    fn advance_term(&mut self) {
        let next = self.cursor.successor();
        let closed = std::mem::replace(&mut self.bucket, TermBucket::new(next));
        if !closed.is_empty() {
            debug!(slot = %closed.slot, courses = closed.courses.len(), credits = self.bucket_credits, "term closed");
            self.plan.push_term(closed);
        }
        self.cursor = next;
        self.bucket_credits = 0;
    }

    fn finish(mut self) -> SchedulePlan {
        if !self.bucket.is_empty() {
            self.plan.push_term(self.bucket);
        }
        self.plan
    }
}
