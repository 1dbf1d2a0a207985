//! Rule engine for multi-criteria ranking.
//!
//! Applies rules in sequence: a later rule only decides when every earlier
//! rule ties. The sort is stable, so courses tied on every rule keep their
//! input (prerequisite) order unless a final tie-breaker says otherwise.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{DispatchingRule, RankingContext, RuleScore};
use crate::models::ScheduledCourse;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Keep input order.
    #[default]
    Stable,
    /// Lexicographic by catalog code.
    ByCode,
}

/// A composable rule engine for candidate ranking.
///
/// # Example
/// ```
/// use u_gradplan::dispatching::{RuleEngine, TieBreaker};
/// use u_gradplan::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::NoPetition)
///     .with_rule(rules::MostSections)
///     .with_final_tie_breaker(TieBreaker::ByCode);
/// assert_eq!(engine.rule_names(), vec!["PETITION", "SECTIONS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
            epsilon: 1e-9,
        }
    }

    /// Appends a rule; earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in precedence order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates by priority (highest priority first).
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(
        &self,
        courses: &[ScheduledCourse],
        context: &RankingContext,
    ) -> Vec<usize> {
        let scores: Vec<Vec<RuleScore>> = courses
            .iter()
            .map(|c| self.evaluate(c, context))
            .collect();

        let mut indices: Vec<usize> = (0..courses.len()).collect();
        indices.sort_by(|&a, &b| {
            self.compare_scores(&scores[a], &scores[b])
                .then_with(|| match self.tie_breaker {
                    TieBreaker::Stable => Ordering::Equal,
                    TieBreaker::ByCode => courses[a].course.code.cmp(&courses[b].course.code),
                })
        });
        indices
    }

    /// Sorts candidates by priority, consuming the input.
    pub fn sort(
        &self,
        courses: Vec<ScheduledCourse>,
        context: &RankingContext,
    ) -> Vec<ScheduledCourse> {
        let order = self.sort_indices(&courses, context);
        let mut slots: Vec<Option<ScheduledCourse>> = courses.into_iter().map(Some).collect();
        order
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect()
    }

    /// Scores from each rule for one candidate.
    pub fn evaluate(&self, course: &ScheduledCourse, context: &RankingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(course, context))
            .collect()
    }

    fn compare_scores(&self, a: &[RuleScore], b: &[RuleScore]) -> Ordering {
        for (score_a, score_b) in a.iter().zip(b) {
            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
