//! Group ranking: active courses first, pending courses second.
//!
//! Each group is sorted by its own rule engine and the results are
//! concatenated. The two groups are never interleaved, so a course already
//! in progress always outranks a course not yet started.

use super::{rules, RankingContext, RuleEngine, TieBreaker};
use crate::models::ScheduledCourse;

/// Orders plan candidates by scheduling precedence.
#[derive(Debug, Clone)]
pub struct PriorityRanker {
    active: RuleEngine,
    pending: RuleEngine,
}

impl PriorityRanker {
    /// Creates a ranker with the default rule chains and stable ties.
    pub fn new() -> Self {
        Self::with_tie_breaker(TieBreaker::Stable)
    }

    /// Creates a ranker with the default rule chains.
    pub fn with_tie_breaker(tie_breaker: TieBreaker) -> Self {
        Self {
            active: Self::active_engine().with_final_tie_breaker(tie_breaker),
            pending: Self::pending_engine().with_final_tie_breaker(tie_breaker),
        }
    }

    /// Rule chain for courses in progress.
    pub fn active_engine() -> RuleEngine {
        RuleEngine::new()
            .with_rule(rules::NoPetition)
            .with_rule(rules::CurrentTerm)
            .with_rule(rules::MostSections)
    }

    /// Rule chain for courses not yet started: readiness leads.
    pub fn pending_engine() -> RuleEngine {
        RuleEngine::new()
            .with_rule(rules::PrerequisitesMet)
            .with_rule(rules::NoPetition)
            .with_rule(rules::CurrentTerm)
            .with_rule(rules::MostSections)
    }

    /// Ranks both groups and concatenates them, active first.
    pub fn rank(
        &self,
        active: Vec<ScheduledCourse>,
        pending: Vec<ScheduledCourse>,
        context: &RankingContext,
    ) -> Vec<ScheduledCourse> {
        let mut ranked = self.active.sort(active, context);
        ranked.extend(self.pending.sort(pending, context));
        ranked
    }
}

impl Default for PriorityRanker {
    fn default() -> Self {
        Self::new()
    }
}
