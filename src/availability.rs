//! Section availability resolution.
//!
//! Maps courses to their open sections in a section-feed snapshot, picks a
//! recommended section, and decides whether a petition will be needed.
//!
//! Sections relate to courses by normalized course code (one code, many
//! sections), never by course ID.
//!
//! # Worst-case rules
//! - An empty feed means "unknown": every course needs a petition.
//! - A course with no open section needs a petition, whether it is not
//!   offered at all or every section is full.
//! - An unparseable seat count is treated as zero seats.

use std::collections::HashMap;

use crate::models::{Course, CourseSection, ScheduledCourse};

/// Normalizes a catalog code for matching: trimmed, uppercase, no inner
/// whitespace.
pub fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Sections of one feed snapshot grouped by normalized course code.
#[derive(Debug, Clone, Default)]
pub struct SectionIndex<'a> {
    by_code: HashMap<String, Vec<&'a CourseSection>>,
    total: usize,
}

impl<'a> SectionIndex<'a> {
    /// Indexes a feed snapshot, keeping feed order within each code.
    pub fn new(sections: &'a [CourseSection]) -> Self {
        let mut by_code: HashMap<String, Vec<&'a CourseSection>> = HashMap::new();
        for section in sections {
            by_code
                .entry(normalize_code(&section.course_code))
                .or_default()
                .push(section);
        }
        Self {
            by_code,
            total: sections.len(),
        }
    }

    /// Whether the feed had no sections at all.
    pub fn is_feed_empty(&self) -> bool {
        self.total == 0
    }

    /// Every section offered for a code, open or not.
    pub fn sections(&self, code: &str) -> &[&'a CourseSection] {
        self.by_code
            .get(&normalize_code(code))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sections for a code that still have seats, in feed order.
    pub fn available_sections(&self, code: &str) -> Vec<&'a CourseSection> {
        self.sections(code)
            .iter()
            .copied()
            .filter(|s| s.has_slots)
            .collect()
    }

    /// Whether a course will need a petition.
    pub fn needs_petition(&self, code: &str) -> bool {
        self.is_feed_empty() || self.available_sections(code).is_empty()
    }

    /// The open section with the most remaining seats (first one on ties).
    pub fn recommended_section(&self, code: &str) -> Option<&'a CourseSection> {
        let mut best: Option<&'a CourseSection> = None;
        for section in self.available_sections(code) {
            match best {
                Some(b) if section.remaining_slot_count() <= b.remaining_slot_count() => {}
                _ => best = Some(section),
            }
        }
        best
    }

    /// Annotates a course with its availability.
    pub fn resolve(&self, course: &Course) -> ScheduledCourse {
        let available: Vec<CourseSection> = self
            .available_sections(&course.code)
            .into_iter()
            .cloned()
            .collect();

        ScheduledCourse {
            course: course.clone(),
            needs_petition: self.is_feed_empty() || available.is_empty(),
            recommended_section: self.recommended_section(&course.code).cloned(),
            available_sections: available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> Vec<CourseSection> {
        vec![
            CourseSection::new("CPE101", "S11").with_seats(40, 0),
            CourseSection::new("CPE102", "S11").with_seats(40, 5),
            CourseSection::new("cpe 102", "S12").with_seats(40, 12),
            CourseSection::new("CPE102", "S13").with_seats(40, 12),
            CourseSection::new("MTH101", "S11").with_raw_remaining("??", true),
        ]
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" cpe 101 "), "CPE101");
        assert_eq!(normalize_code("CPE101"), "CPE101");
    }

    #[test]
    fn test_full_section_needs_petition() {
        let sections = feed();
        let index = SectionIndex::new(&sections);
        assert!(index.available_sections("CPE101").is_empty());
        assert!(index.needs_petition("CPE101"));
        assert!(index.recommended_section("CPE101").is_none());
    }

    #[test]
    fn test_unoffered_course_needs_petition() {
        let sections = feed();
        let index = SectionIndex::new(&sections);
        assert!(index.sections("PHY999").is_empty());
        assert!(index.needs_petition("PHY999"));
    }

    #[test]
    fn test_codes_match_after_normalization() {
        let sections = feed();
        let index = SectionIndex::new(&sections);
        assert_eq!(index.available_sections("cpe102").len(), 3);
        assert!(!index.needs_petition("CPE102"));
    }

    #[test]
    fn test_recommended_is_max_first_seen() {
        let sections = feed();
        let index = SectionIndex::new(&sections);
        let best = index.recommended_section("CPE102").unwrap();
        assert_eq!(best.section, "S12");
    }

    #[test]
    fn test_unparseable_slots_still_available() {
        let sections = feed();
        let index = SectionIndex::new(&sections);
        let best = index.recommended_section("MTH101").unwrap();
        assert_eq!(best.remaining_slot_count(), 0);
        assert!(!index.needs_petition("MTH101"));
    }

    #[test]
    fn test_empty_feed_forces_petition() {
        let index = SectionIndex::new(&[]);
        assert!(index.is_feed_empty());
        let course = Course::new("c1", "CPE102").with_credits(3);
        let scheduled = index.resolve(&course);
        assert!(scheduled.needs_petition);
        assert!(scheduled.available_sections.is_empty());
        assert!(scheduled.recommended_section.is_none());
    }

    #[test]
    fn test_resolve_annotates() {
        let sections = feed();
        let index = SectionIndex::new(&sections);
        let course = Course::new("c2", "CPE102").with_credits(3);
        let scheduled = index.resolve(&course);
        assert!(!scheduled.needs_petition);
        assert_eq!(scheduled.available_section_count(), 3);
        assert_eq!(
            scheduled.recommended_section.as_ref().map(|s| s.section.as_str()),
            Some("S12")
        );
    }
}
