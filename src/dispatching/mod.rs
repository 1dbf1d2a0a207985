//! Priority rules and ranking for plan candidates.
//!
//! Provides priority rules (petition status, current-term match, open
//! sections, prerequisite readiness), a sequential rule engine, and the
//! group ranker that orders active courses ahead of pending ones.
//!
//! # Usage
//!
//! ```
//! use u_gradplan::dispatching::{RankingContext, RuleEngine};
//! use u_gradplan::dispatching::rules;
//! use u_gradplan::models::Term;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::NoPetition)
//!     .with_rule(rules::CurrentTerm)
//!     .with_rule(rules::MostSections);
//!
//! let context = RankingContext::for_term(Term::First);
//! // let order = engine.sort_indices(&candidates, &context);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
mod ranker;
pub mod rules;

pub use context::RankingContext;
pub use engine::{RuleEngine, TieBreaker};
pub use ranker::PriorityRanker;

use crate::models::ScheduledCourse;
use std::fmt::Debug;

/// Score returned by a priority rule.
///
/// Lower scores = higher priority (scheduled first).
pub type RuleScore = f64;

/// A rule that evaluates the scheduling priority of a candidate course.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// courses that should claim a place first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PETITION").
    fn name(&self) -> &'static str;

    /// Evaluates a candidate in the given ranking context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, course: &ScheduledCourse, context: &RankingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
