//! End-to-end plan generation.
//!
//! # Pipeline
//!
//! 1. Validate the snapshots; findings are logged, never fatal.
//! 2. Split candidates (active, pending) and order each group so
//!    prerequisites come first.
//! 3. Annotate each candidate with its section availability.
//! 4. Rank: active group first, pending group second.
//! 5. Allocate the ranked list into terms from the origin slot.
//!
//! Generation is a pure function of its inputs: the same snapshots, origin
//! and configuration always give the same outcome.

use std::collections::HashSet;

use tracing::{info, warn};

use super::allocator::{GapRules, TermAllocator};
use crate::availability::SectionIndex;
use crate::config::{ConfigError, PlannerConfig};
use crate::dispatching::{PriorityRanker, RankingContext};
use crate::models::{Course, CourseSection, CourseStatus, PlanOutcome, TermSlot};
use crate::sequencing::sequence;
use crate::validation::validate_catalog;

/// Input snapshot for one generation pass.
///
/// Owns its data, so a pass never sees concurrent edits to the caller's
/// catalog or feed.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Course snapshot, in catalog order.
    pub courses: Vec<Course>,
    /// Section feed snapshot, in feed order. May be empty.
    pub sections: Vec<CourseSection>,
    /// Year the plan starts in.
    pub start_year: i32,
    /// Term label the plan starts in (e.g. "Term 1" or "1").
    pub start_term: String,
}

impl PlanRequest {
    /// Creates a request.
    pub fn new(
        courses: Vec<Course>,
        sections: Vec<CourseSection>,
        start_year: i32,
        start_term: impl Into<String>,
    ) -> Self {
        Self {
            courses,
            sections,
            start_year,
            start_term: start_term.into(),
        }
    }

    /// The origin slot, if the year and term label are usable.
    pub fn origin(&self) -> Option<TermSlot> {
        if self.start_year <= 0 {
            return None;
        }
        TermSlot::parse(self.start_year, &self.start_term).ok()
    }
}

/// Greedy, deterministic graduation planner.
///
/// # Example
///
/// ```
/// use u_gradplan::models::{Course, Term, TermSlot};
/// use u_gradplan::scheduler::{GraduationPlanner, PlanRequest};
///
/// let courses = vec![
///     Course::new("A", "CPE101").with_credits(3),
///     Course::new("B", "CPE102").with_credits(3).with_prerequisite("A"),
/// ];
/// let request = PlanRequest::new(courses, Vec::new(), 2025, "Term 1");
///
/// let outcome = GraduationPlanner::new().generate_request(&request);
/// assert_eq!(outcome.plan.slot_of("A"), Some(TermSlot::new(2025, Term::First)));
/// assert_eq!(outcome.plan.slot_of("B"), Some(TermSlot::new(2025, Term::Second)));
/// assert!(outcome.plan.course("A").unwrap().needs_petition);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraduationPlanner {
    config: PlannerConfig,
}

impl GraduationPlanner {
    /// Creates a planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner with the given configuration.
    ///
    /// The configuration is not validated here. A planner holding an invalid
    /// one (zero cap or zero pass limit) returns empty outcomes; use
    /// [`try_with_config`](Self::try_with_config) to reject it up front.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Creates a planner after validating the configuration.
    pub fn try_with_config(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Number of term advances a generation over `candidates` courses may
    /// need: one forced advance per pass, plus at most one cap overflow per
    /// pass and per placement.
    fn horizon(&self, candidates: usize) -> u32 {
        let terms = self
            .config
            .max_passes
            .saturating_mul(2)
            .saturating_add(candidates);
        u32::try_from(terms).unwrap_or(u32::MAX)
    }

    /// Configuration in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generates a plan from a request.
    ///
    /// An unusable origin (non-positive year, unknown term label, a year
    /// too close to `i32::MAX` to advance through) gives an empty outcome.
    pub fn generate_request(&self, request: &PlanRequest) -> PlanOutcome {
        match request.origin() {
            Some(origin) => self.generate(&request.courses, &request.sections, origin),
            None => {
                warn!(
                    year = request.start_year,
                    term = %request.start_term,
                    "invalid plan origin, returning empty plan"
                );
                PlanOutcome::empty()
            }
        }
    }

    /// Generates a plan starting at `origin`.
    pub fn generate(
        &self,
        courses: &[Course],
        sections: &[CourseSection],
        origin: TermSlot,
    ) -> PlanOutcome {
        if courses.is_empty() {
            info!("empty course snapshot, nothing to plan");
            return PlanOutcome::empty();
        }
        if let Err(err) = self.config.validate() {
            warn!(error = %err, "invalid planner configuration, returning empty plan");
            return PlanOutcome::empty();
        }
        if origin.year <= 0 || origin.checked_advance(self.horizon(courses.len())).is_none() {
            warn!(year = origin.year, "invalid plan origin, returning empty plan");
            return PlanOutcome::empty();
        }

        if let Err(findings) = validate_catalog(courses, sections) {
            for finding in &findings {
                warn!(kind = ?finding.kind, "{}", finding.message);
            }
        }

        let mut seen = HashSet::new();
        let unique: Vec<&Course> = courses
            .iter()
            .filter(|c| seen.insert(c.id.as_str()))
            .collect();
        let active: Vec<&Course> = unique
            .iter()
            .copied()
            .filter(|c| c.status == CourseStatus::Active)
            .collect();
        let pending: Vec<&Course> = unique
            .iter()
            .copied()
            .filter(|c| c.status == CourseStatus::Pending)
            .collect();

        // Cycles are broken over both groups together so cross-group cycles
        // cannot strand a course.
        let candidates: Vec<&Course> = active.iter().chain(pending.iter()).copied().collect();
        let broken_edges = sequence(&candidates).broken_edge_set();

        let index = SectionIndex::new(sections);
        let active_annotated = sequence(&active)
            .courses
            .into_iter()
            .map(|c| index.resolve(c))
            .collect();
        let pending_annotated = sequence(&pending)
            .courses
            .into_iter()
            .map(|c| index.resolve(c))
            .collect();

        let context = RankingContext::from_catalog(origin.term, courses);
        let ranked = PriorityRanker::with_tie_breaker(self.config.tie_breaker).rank(
            active_annotated,
            pending_annotated,
            &context,
        );

        let rules = GapRules {
            passed: context.passed,
            broken_edges,
        };
        let allocation = TermAllocator::new()
            .with_max_credits_per_term(self.config.max_credits_per_term)
            .with_max_passes(self.config.max_passes)
            .with_scan_order(self.config.scan_order)
            .allocate(ranked, origin, &rules);

        for missing in &allocation.unscheduled {
            warn!(course = %missing.course_id, code = %missing.code, reason = ?missing.reason, "course left out of plan");
        }
        info!(
            origin = %origin,
            candidates = candidates.len(),
            terms = allocation.plan.term_count(),
            scheduled = allocation.plan.course_count(),
            unscheduled = allocation.unscheduled.len(),
            passes = allocation.passes,
            "plan generated"
        );

        PlanOutcome {
            plan: allocation.plan,
            unscheduled: allocation.unscheduled,
        }
    }
}
