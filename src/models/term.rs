//! Academic calendar model.
//!
//! An academic year is divided into three fixed terms. A [`TermSlot`]
//! identifies one term of one year and is the unit of placement in a plan.
//!
//! # Ordering
//! Slots are ordered chronologically: first by year, then by term.
//! The successor of term 3 is term 1 of the following year.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of terms in one academic year.
pub const TERMS_PER_YEAR: u8 = 3;

/// One of the three scheduling periods of an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Term {
    First,
    Second,
    Third,
}

/// A term label that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid term label: {0:?}")]
pub struct TermParseError(pub String);

impl Term {
    /// 1-based position within the year.
    pub fn index(self) -> u8 {
        match self {
            Term::First => 1,
            Term::Second => 2,
            Term::Third => 3,
        }
    }

    /// Term from its 1-based position.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Term::First),
            2 => Some(Term::Second),
            3 => Some(Term::Third),
            _ => None,
        }
    }

    /// Next term, and whether the year rolls over.
    pub fn next(self) -> (Self, bool) {
        match self {
            Term::First => (Term::Second, false),
            Term::Second => (Term::Third, false),
            Term::Third => (Term::First, true),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term {}", self.index())
    }
}

/// Accepts `"1"`, `"Term 1"`, `"term1"`, `" TERM 2 "` and the like.
impl FromStr for Term {
    type Err = TermParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        let digits = compact.strip_prefix("term").unwrap_or(&compact);

        digits
            .parse::<u8>()
            .ok()
            .and_then(Term::from_index)
            .ok_or_else(|| TermParseError(s.to_string()))
    }
}

impl TryFrom<String> for Term {
    type Error = TermParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.to_string()
    }
}

/// A `(year, term)` placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TermSlot {
    /// Academic year.
    pub year: i32,
    /// Term within the year.
    pub term: Term,
}

impl TermSlot {
    /// Creates a slot.
    pub fn new(year: i32, term: Term) -> Self {
        Self { year, term }
    }

    /// Parses the term label and builds a slot.
    pub fn parse(year: i32, term: &str) -> Result<Self, TermParseError> {
        Ok(Self::new(year, term.parse()?))
    }

    /// The slot immediately after this one.
    ///
    /// The year must not be `i32::MAX` when rolling over; use
    /// [`checked_advance`](Self::checked_advance) near the end of the range.
    pub fn successor(self) -> Self {
        let (term, rolled) = self.term.next();
        let year = if rolled { self.year + 1 } else { self.year };
        Self { year, term }
    }

    /// The slot `terms` steps later, or `None` if the year would overflow.
    pub fn checked_advance(self, terms: u32) -> Option<Self> {
        let per_year = i64::from(TERMS_PER_YEAR);
        let position = i64::from(self.term.index() - 1) + i64::from(terms);
        let year = i32::try_from(i64::from(self.year) + position / per_year).ok()?;
        let term = Term::from_index(u8::try_from(position % per_year).ok()? + 1)?;
        Some(Self { year, term })
    }

    /// Whether this slot lies at least one full term before `other`.
    #[inline]
    pub fn precedes(self, other: Self) -> bool {
        self < other
    }

    /// Number of term steps from `self` to `later` (0 if not later).
    pub fn terms_until(self, later: Self) -> u32 {
        let ordinal = |s: Self| s.year as i64 * TERMS_PER_YEAR as i64 + s.term.index() as i64;
        (ordinal(later) - ordinal(self)).max(0) as u32
    }
}

impl fmt::Display for TermSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_parse_variants() {
        assert_eq!("1".parse::<Term>().unwrap(), Term::First);
        assert_eq!("Term 2".parse::<Term>().unwrap(), Term::Second);
        assert_eq!(" term3 ".parse::<Term>().unwrap(), Term::Third);
        assert_eq!("TERM 1".parse::<Term>().unwrap(), Term::First);
    }

    #[test]
    fn test_term_parse_rejects_garbage() {
        assert!("Term 4".parse::<Term>().is_err());
        assert!("0".parse::<Term>().is_err());
        assert!("summer".parse::<Term>().is_err());
        assert!("".parse::<Term>().is_err());
    }

    #[test]
    fn test_successor_rolls_year() {
        let s = TermSlot::new(2025, Term::First);
        assert_eq!(s.successor(), TermSlot::new(2025, Term::Second));
        assert_eq!(s.successor().successor(), TermSlot::new(2025, Term::Third));
        assert_eq!(
            s.successor().successor().successor(),
            TermSlot::new(2026, Term::First)
        );
    }

    #[test]
    fn test_checked_advance() {
        let start = TermSlot::new(2025, Term::Second);
        assert_eq!(start.checked_advance(0), Some(start));
        assert_eq!(start.checked_advance(1), Some(start.successor()));
        assert_eq!(start.checked_advance(5), Some(TermSlot::new(2027, Term::First)));

        let last = TermSlot::new(i32::MAX, Term::Second);
        assert_eq!(last.checked_advance(1), Some(TermSlot::new(i32::MAX, Term::Third)));
        assert_eq!(last.checked_advance(2), None);
        assert_eq!(TermSlot::new(i32::MAX, Term::Third).checked_advance(1), None);
    }

    #[test]
    fn test_slot_ordering() {
        let t3_2025 = TermSlot::new(2025, Term::Third);
        let t1_2026 = TermSlot::new(2026, Term::First);
        assert!(t3_2025.precedes(t1_2026));
        assert!(!t1_2026.precedes(t3_2025));
        assert!(!t1_2026.precedes(t1_2026));
    }

    #[test]
    fn test_terms_until() {
        let a = TermSlot::new(2025, Term::Second);
        let b = TermSlot::new(2026, Term::First);
        assert_eq!(a.terms_until(b), 2);
        assert_eq!(b.terms_until(a), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(TermSlot::new(2025, Term::First).to_string(), "Term 1 2025");
    }

    #[test]
    fn test_term_serde_as_label() {
        let json = serde_json::to_string(&Term::Second).unwrap();
        assert_eq!(json, "\"Term 2\"");
        let back: Term = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(back, Term::Third);
    }
}
