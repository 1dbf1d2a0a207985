//! Course section model.
//!
//! A section is one concrete offering of a course in the live feed. Sections
//! are keyed by course code, not by course ID, and one code may have many
//! sections.

use serde::{Deserialize, Serialize};

/// One offering of a course in the section feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSection {
    /// Catalog code of the offered course.
    pub course_code: String,
    /// Section label (e.g. "S11").
    pub section: String,
    /// Seats in total.
    pub class_size: u32,
    /// Seats left, as reported by the feed (numeric string).
    pub remaining_slots: String,
    /// Compact day code, e.g. "MW" or "TTh".
    pub meeting_days: String,
    /// Meeting time as reported by the feed.
    pub meeting_time: String,
    /// Room label.
    pub room: String,
    /// Whether any seat is left.
    pub has_slots: bool,
}

/// A weekday in a compact meeting-day code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl CourseSection {
    /// Creates a section with no seat information.
    pub fn new(course_code: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            section: section.into(),
            class_size: 0,
            remaining_slots: "0".to_string(),
            meeting_days: String::new(),
            meeting_time: String::new(),
            room: String::new(),
            has_slots: false,
        }
    }

    /// Sets seat counts; `has_slots` follows `remaining > 0`.
    pub fn with_seats(mut self, class_size: u32, remaining: u32) -> Self {
        self.class_size = class_size;
        self.remaining_slots = remaining.to_string();
        self.has_slots = remaining > 0;
        self
    }

    /// Sets the raw remaining-slots string as delivered by the feed.
    pub fn with_raw_remaining(mut self, remaining: impl Into<String>, has_slots: bool) -> Self {
        self.remaining_slots = remaining.into();
        self.has_slots = has_slots;
        self
    }

    /// Sets the meeting pattern.
    pub fn with_meeting(
        mut self,
        days: impl Into<String>,
        time: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        self.meeting_days = days.into();
        self.meeting_time = time.into();
        self.room = room.into();
        self
    }

    /// Remaining seats as a number. Unparseable values count as zero.
    pub fn remaining_slot_count(&self) -> u32 {
        self.remaining_slots.trim().parse().unwrap_or(0)
    }

    /// Whether `remaining_slots` is a valid number.
    pub fn has_numeric_remaining(&self) -> bool {
        self.remaining_slots.trim().parse::<u32>().is_ok()
    }

    /// Expands the compact day code.
    ///
    /// "Th", "Sa" and "Su" are two-letter codes; M, T, W, F, S are single
    /// letters. Unknown characters are skipped.
    pub fn meeting_day_list(&self) -> Vec<MeetingDay> {
        let chars: Vec<char> = self.meeting_days.chars().collect();
        let mut days = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let next = chars.get(i + 1).copied();
            let (day, width) = match (chars[i], next) {
                ('T', Some('h')) => (Some(MeetingDay::Thursday), 2),
                ('S', Some('a')) => (Some(MeetingDay::Saturday), 2),
                ('S', Some('u')) => (Some(MeetingDay::Sunday), 2),
                ('M', _) => (Some(MeetingDay::Monday), 1),
                ('T', _) => (Some(MeetingDay::Tuesday), 1),
                ('W', _) => (Some(MeetingDay::Wednesday), 1),
                ('F', _) => (Some(MeetingDay::Friday), 1),
                ('S', _) => (Some(MeetingDay::Saturday), 1),
                _ => (None, 1),
            };
            days.extend(day);
            i += width;
        }

        days
    }
}
