//! Plan quality metrics (KPIs).
//!
//! Summarizes a generated plan for display and comparison between
//! configurations.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Term count | Number of non-empty terms in the plan |
//! | Total credits | Sum of credits over all placed courses |
//! | Average load | Total credits / term count |
//! | Max load | Heaviest single term |
//! | Petition count | Placed courses with no open section |
//! | Final slot | Last planned term (expected graduation) |

use serde::{Deserialize, Serialize};

use crate::models::{PlanOutcome, TermSlot};

/// Plan performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanKpi {
    /// Number of terms in the plan.
    pub term_count: usize,
    /// Credits over all placed courses.
    pub total_credits: u32,
    /// Mean credits per term (0.0 for an empty plan).
    pub avg_term_credits: f64,
    /// Credits of the heaviest term.
    pub max_term_credits: u32,
    /// Courses placed in the plan.
    pub scheduled_count: usize,
    /// Placed courses flagged for petition.
    pub petition_count: usize,
    /// Candidates left out of the plan.
    pub unscheduled_count: usize,
    /// Last planned term.
    pub final_slot: Option<TermSlot>,
}

impl PlanKpi {
    /// Computes KPIs from a generation outcome.
    pub fn calculate(outcome: &PlanOutcome) -> Self {
        let plan = &outcome.plan;
        let term_count = plan.term_count();
        let total_credits = plan.total_credits();
        let max_term_credits = plan
            .terms
            .iter()
            .map(|t| t.total_credits())
            .max()
            .unwrap_or(0);

        let avg_term_credits = if term_count == 0 {
            0.0
        } else {
            total_credits as f64 / term_count as f64
        };

        Self {
            term_count,
            total_credits,
            avg_term_credits,
            max_term_credits,
            scheduled_count: plan.course_count(),
            petition_count: plan.courses().filter(|c| c.needs_petition).count(),
            unscheduled_count: outcome.unscheduled.len(),
            final_slot: plan.last_slot(),
        }
    }

    /// Whether the plan finishes by `deadline` with no course left out.
    pub fn graduates_by(&self, deadline: TermSlot) -> bool {
        self.unscheduled_count == 0 && self.final_slot.map_or(true, |slot| slot <= deadline)
    }

    /// Whether no term carries more than `max_credits`.
    pub fn within_load(&self, max_credits: u32) -> bool {
        self.max_term_credits <= max_credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Course, CourseSection, ScheduledCourse, SchedulePlan, Term, TermBucket,
        UnscheduledCourse, UnscheduledReason,
    };

    fn placed(id: &str, credits: u32, open: bool) -> ScheduledCourse {
        let sections = if open {
            vec![CourseSection::new(id, "S1").with_seats(40, 10)]
        } else {
            Vec::new()
        };
        ScheduledCourse {
            course: Course::new(id, id).with_credits(credits),
            recommended_section: sections.first().cloned(),
            needs_petition: sections.is_empty(),
            available_sections: sections,
        }
    }

    fn sample_outcome() -> PlanOutcome {
        let t1 = TermSlot::new(2025, Term::Third);
        let mut b1 = TermBucket::new(t1);
        b1.courses.push(placed("A", 9, true));
        b1.courses.push(placed("B", 9, false));
        let mut b2 = TermBucket::new(t1.successor());
        b2.courses.push(placed("C", 3, false));

        let mut plan = SchedulePlan::new();
        plan.push_term(b1);
        plan.push_term(b2);
        PlanOutcome {
            plan,
            unscheduled: Vec::new(),
        }
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = PlanKpi::calculate(&sample_outcome());
        assert_eq!(kpi.term_count, 2);
        assert_eq!(kpi.total_credits, 21);
        assert!((kpi.avg_term_credits - 10.5).abs() < 1e-10);
        assert_eq!(kpi.max_term_credits, 18);
        assert_eq!(kpi.scheduled_count, 3);
        assert_eq!(kpi.petition_count, 2);
        assert_eq!(kpi.unscheduled_count, 0);
        // Term 3 rolls over into the next academic year.
        assert_eq!(kpi.final_slot, Some(TermSlot::new(2026, Term::First)));
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = PlanKpi::calculate(&PlanOutcome::empty());
        assert_eq!(kpi.term_count, 0);
        assert_eq!(kpi.total_credits, 0);
        assert_eq!(kpi.avg_term_credits, 0.0);
        assert_eq!(kpi.max_term_credits, 0);
        assert!(kpi.final_slot.is_none());
    }

    #[test]
    fn test_kpi_counts_unscheduled() {
        let mut outcome = sample_outcome();
        outcome.unscheduled.push(UnscheduledCourse {
            course_id: "Z".into(),
            code: "Z1".into(),
            reason: UnscheduledReason::PassLimitReached { passes: 50 },
        });
        let kpi = PlanKpi::calculate(&outcome);
        assert_eq!(kpi.unscheduled_count, 1);
        assert!(!kpi.graduates_by(TermSlot::new(2030, Term::First)));
    }

    #[test]
    fn test_graduates_by() {
        let kpi = PlanKpi::calculate(&sample_outcome());
        assert!(kpi.graduates_by(TermSlot::new(2026, Term::First)));
        assert!(!kpi.graduates_by(TermSlot::new(2025, Term::Third)));
    }

    #[test]
    fn test_within_load() {
        let kpi = PlanKpi::calculate(&sample_outcome());
        assert!(kpi.within_load(21));
        assert!(!kpi.within_load(17));
    }
}
