//! Term allocation, plan generation and KPI evaluation.
//!
//! # Algorithm
//!
//! `TermAllocator` is a greedy, multi-pass packer. Each pass walks the ranked
//! candidate list and places every course whose prerequisites all sit in an
//! earlier term (the gap rule) into the open term. A course that would push
//! the term past its credit cap closes it and opens the next one mid-pass.
//! A pass that places nothing also closes the open term. Later passes keep
//! filling the same term while they still place courses. It is not optimal
//! in the number of terms, but it is deterministic and bounded by
//! `max_passes`.
//!
//! `GraduationPlanner` runs the full pipeline (validate, sequence, resolve
//! sections, rank, allocate). `PlanStore` serializes regeneration against
//! in-place plan edits.
//!
//! # KPI
//!
//! `PlanKpi` summarizes a plan: term count, credit loads, petitions and the
//! expected graduation term.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Graham (1966), "Bounds for certain multiprocessing anomalies" (list scheduling)

mod allocator;
mod kpi;
mod planner;
mod store;

pub use allocator::{Allocation, GapRules, ScanOrder, TermAllocator};
pub use kpi::PlanKpi;
pub use planner::{GraduationPlanner, PlanRequest};
pub use store::PlanStore;
