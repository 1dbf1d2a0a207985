//! Prerequisite-respecting course ordering.
//!
//! Orders a set of courses so that every prerequisite inside the set comes
//! before its dependents. Prerequisites outside the set are ignored; they are
//! assumed to be resolved elsewhere (typically already passed).
//!
//! # Algorithm
//! Depth-first emission with three visitation states per course ID.
//! Reaching a course that is still in progress means a cycle: that branch is
//! abandoned silently and the course that closes the cycle is emitted without
//! waiting for it. The prerequisite edges skipped this way are reported as
//! broken edges so later stages can ignore them.
//!
//! Roots are visited in input order, so a given cycle always breaks at the
//! same edge.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use crate::models::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// A prerequisite edge dropped to break a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrokenEdge {
    /// The dependent course.
    pub course_id: String,
    /// The prerequisite that was not emitted first.
    pub prerequisite_id: String,
}

/// Output of [`sequence`].
#[derive(Debug, Clone, Default)]
pub struct Sequence<'a> {
    /// Every input course exactly once, prerequisites first.
    pub courses: Vec<&'a Course>,
    /// Edges ignored because of a cycle, in discovery order.
    pub broken_edges: Vec<BrokenEdge>,
}

impl<'a> Sequence<'a> {
    /// IDs in emission order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.courses.iter().map(|c| c.id.as_str()).collect()
    }

    /// Whether no cycle was found.
    pub fn is_acyclic(&self) -> bool {
        self.broken_edges.is_empty()
    }

    /// Broken edges as a lookup set of `(course_id, prerequisite_id)`.
    pub fn broken_edge_set(&self) -> HashSet<(String, String)> {
        self.broken_edges
            .iter()
            .map(|e| (e.course_id.clone(), e.prerequisite_id.clone()))
            .collect()
    }
}

/// Orders `courses` so prerequisites precede dependents.
///
/// Courses sharing an ID are collapsed to the first occurrence.
///
/// # Example
/// ```
/// use u_gradplan::models::Course;
/// use u_gradplan::sequencing::sequence;
///
/// let b = Course::new("B", "B101").with_prerequisite("A");
/// let a = Course::new("A", "A101");
/// let seq = sequence(&[&b, &a]);
/// assert_eq!(seq.ids(), vec!["A", "B"]);
/// ```
pub fn sequence<'a>(courses: &[&'a Course]) -> Sequence<'a> {
    let mut index: HashMap<&str, &'a Course> = HashMap::new();
    for &course in courses {
        index.entry(course.id.as_str()).or_insert(course);
    }

    let mut state: HashMap<&str, VisitState> = HashMap::new();
    let mut out = Sequence {
        courses: Vec::with_capacity(index.len()),
        broken_edges: Vec::new(),
    };

    for &course in courses {
        if index.get(course.id.as_str()).is_some_and(|&c| std::ptr::eq(c, course)) {
            visit(course, &index, &mut state, &mut out);
        }
    }

    out
}

fn visit<'a>(
    course: &'a Course,
    index: &HashMap<&str, &'a Course>,
    state: &mut HashMap<&'a str, VisitState>,
    out: &mut Sequence<'a>,
) {
    match state.get(course.id.as_str()).copied().unwrap_or(VisitState::Unvisited) {
        VisitState::Done | VisitState::InProgress => return,
        VisitState::Unvisited => {}
    }

    state.insert(&course.id, VisitState::InProgress);

    for prereq in &course.prerequisites {
        if let Some(&p) = index.get(prereq.as_str()) {
            visit(p, index, state, out);
        }
    }

    // Any in-set prerequisite not done by now was cut off by a cycle.
    for prereq in &course.prerequisites {
        if !index.contains_key(prereq.as_str()) {
            continue;
        }
        if state.get(prereq.as_str()) != Some(&VisitState::Done) {
            out.broken_edges.push(BrokenEdge {
                course_id: course.id.clone(),
                prerequisite_id: prereq.clone(),
            });
        }
    }

    state.insert(&course.id, VisitState::Done);
    out.courses.push(course);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, prereqs: &[&str]) -> Course {
        prereqs
            .iter()
            .fold(Course::new(id, format!("{id}101")), |c, p| c.with_prerequisite(*p))
    }

    fn position(ids: &[&str], id: &str) -> usize {
        ids.iter().position(|x| *x == id).unwrap()
    }

    #[test]
    fn test_chain_ordering() {
        let c = course("C", &["B"]);
        let b = course("B", &["A"]);
        let a = course("A", &[]);
        let seq = sequence(&[&c, &b, &a]);
        assert_eq!(seq.ids(), vec!["A", "B", "C"]);
        assert!(seq.is_acyclic());
    }

    #[test]
    fn test_diamond() {
        let d = course("D", &["B", "C"]);
        let b = course("B", &["A"]);
        let c = course("C", &["A"]);
        let a = course("A", &[]);
        let seq = sequence(&[&d, &b, &c, &a]);
        let ids = seq.ids();
        assert_eq!(ids.len(), 4);
        assert!(position(&ids, "A") < position(&ids, "B"));
        assert!(position(&ids, "A") < position(&ids, "C"));
        assert!(position(&ids, "B") < position(&ids, "D"));
        assert!(position(&ids, "C") < position(&ids, "D"));
    }

    #[test]
    fn test_outside_prerequisites_ignored() {
        let b = course("B", &["PASSED"]);
        let a = course("A", &["GHOST"]);
        let seq = sequence(&[&b, &a]);
        assert_eq!(seq.ids(), vec!["B", "A"]);
        assert!(seq.is_acyclic());
    }

    #[test]
    fn test_two_cycle_breaks_deterministically() {
        let x = course("X", &["Y"]);
        let y = course("Y", &["X"]);
        let seq = sequence(&[&x, &y]);
        assert_eq!(seq.ids(), vec!["Y", "X"]);
        assert_eq!(
            seq.broken_edges,
            vec![BrokenEdge {
                course_id: "Y".into(),
                prerequisite_id: "X".into()
            }]
        );

        let again = sequence(&[&x, &y]);
        assert_eq!(again.ids(), seq.ids());
    }

    #[test]
    fn test_three_cycle_emits_all_once() {
        let a = course("A", &["C"]);
        let b = course("B", &["A"]);
        let c = course("C", &["B"]);
        let seq = sequence(&[&a, &b, &c]);
        let mut ids = seq.ids();
        ids.sort();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(seq.broken_edges.len(), 1);
    }

    #[test]
    fn test_self_prerequisite_is_broken_edge() {
        let s = course("S", &["S"]);
        let seq = sequence(&[&s]);
        assert_eq!(seq.ids(), vec!["S"]);
        assert!(seq.broken_edge_set().contains(&("S".into(), "S".into())));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let a1 = course("A", &[]);
        let a2 = course("A", &[]);
        let seq = sequence(&[&a1, &a2]);
        assert_eq!(seq.ids(), vec!["A"]);
        assert!(std::ptr::eq(seq.courses[0], &a1));
    }

    #[test]
    fn test_empty() {
        let seq = sequence(&[]);
        assert!(seq.courses.is_empty());
        assert!(seq.is_acyclic());
    }
}
