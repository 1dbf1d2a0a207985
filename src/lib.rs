//! Graduation plan generation.
//!
//! Turns a student's course catalog (with pass status and prerequisites) and
//! a live section feed into a term-by-term recommendation that respects
//! prerequisite ordering and a per-term credit cap, and flags courses that
//! need a petition because no section has free seats.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `CourseSection`, `Term`, `TermSlot`,
//!   `SchedulePlan`, `PlanOutcome`
//! - **`sequencing`**: Prerequisite-first ordering with cycle breaking
//! - **`availability`**: Section lookup, petition flag, recommended section
//! - **`dispatching`**: Rule-based candidate ranking
//! - **`scheduler`**: Term allocation, end-to-end planner, shared plan store, KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, cycles, seat data)
//! - **`config`**: Planner limits, loadable from TOML
//!
//! # Example
//!
//! ```
//! use u_gradplan::models::{Course, CourseSection, CourseStatus};
//! use u_gradplan::scheduler::{GraduationPlanner, PlanKpi, PlanRequest};
//!
//! let courses = vec![
//!     Course::new("1", "MATH101").with_credits(3).with_status(CourseStatus::Passed),
//!     Course::new("2", "MATH102").with_credits(3).with_prerequisite("1"),
//!     Course::new("3", "MATH103").with_credits(3).with_prerequisite("2"),
//! ];
//! let sections = vec![CourseSection::new("MATH102", "S11").with_seats(40, 12)];
//!
//! let request = PlanRequest::new(courses, sections, 2025, "Term 2");
//! let outcome = GraduationPlanner::new().generate_request(&request);
//! let kpi = PlanKpi::calculate(&outcome);
//!
//! assert_eq!(kpi.term_count, 2);
//! assert_eq!(kpi.petition_count, 1);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", §22.4 Topological sort

pub mod availability;
pub mod config;
pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod sequencing;
pub mod validation;
