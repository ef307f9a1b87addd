//! Meeting selection: a type and a date, each from a closed list.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{MEETING_DATES, MEETING_TYPES};

/// Rejected meeting selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeetingError {
    #[error("unknown meeting type {0:?}")]
    UnknownType(String),
    #[error("unknown meeting date {0:?} (expected one of the scheduled MM-DD-YYYY dates)")]
    UnknownDate(String),
}

/// The meeting a packet is prepared for. Both fields always hold a value
/// from their static list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeetingContext {
    meeting_type: &'static str,
    date: &'static str,
}

impl MeetingContext {
    /// Select a meeting by type and date.
    pub fn new(meeting_type: &str, date: &str) -> Result<Self, MeetingError> {
        Ok(Self {
            meeting_type: lookup_type(meeting_type)?,
            date: lookup_date(date)?,
        })
    }

    pub fn meeting_type(&self) -> &'static str {
        self.meeting_type
    }

    pub fn date(&self) -> &'static str {
        self.date
    }

    /// Same meeting type, different date.
    pub fn with_date(self, date: &str) -> Result<Self, MeetingError> {
        Ok(Self {
            date: lookup_date(date)?,
            ..self
        })
    }

    /// Archive name delivered for this meeting, e.g. `meeting_files_09-17-2025.zip`.
    pub fn archive_name(&self) -> String {
        format!("meeting_files_{}.zip", self.date)
    }
}

impl Default for MeetingContext {
    /// First entry of each list.
    fn default() -> Self {
        Self {
            meeting_type: MEETING_TYPES[0],
            date: MEETING_DATES[0],
        }
    }
}

fn lookup_type(value: &str) -> Result<&'static str, MeetingError> {
    MEETING_TYPES
        .iter()
        .copied()
        .find(|t| *t == value.trim())
        .ok_or_else(|| MeetingError::UnknownType(value.to_string()))
}

fn lookup_date(value: &str) -> Result<&'static str, MeetingError> {
    MEETING_DATES
        .iter()
        .copied()
        .find(|d| *d == value.trim())
        .ok_or_else(|| MeetingError::UnknownDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_first_entries() {
        let ctx = MeetingContext::default();
        assert_eq!(ctx.meeting_type(), "CAECD Board of Managers");
        assert_eq!(ctx.date(), "09-17-2025");
    }

    #[test]
    fn new_accepts_listed_values() {
        let ctx = MeetingContext::new("CAPCOG Executive Committee", "12-10-2025").unwrap();
        assert_eq!(ctx.meeting_type(), "CAPCOG Executive Committee");
        assert_eq!(ctx.date(), "12-10-2025");
    }

    #[test]
    fn new_rejects_unlisted_values() {
        assert_eq!(
            MeetingContext::new("Book Club", "09-17-2025"),
            Err(MeetingError::UnknownType("Book Club".into()))
        );
        assert_eq!(
            MeetingContext::new("CAECD Board of Managers", "2025-09-17"),
            Err(MeetingError::UnknownDate("2025-09-17".into()))
        );
    }

    #[test]
    fn with_date_keeps_type() {
        let ctx = MeetingContext::default().with_date("01-14-2026").unwrap();
        assert_eq!(ctx.meeting_type(), MEETING_TYPES[0]);
        assert_eq!(ctx.date(), "01-14-2026");
        assert!(MeetingContext::default().with_date("").is_err());
    }

    #[test]
    fn archive_name_embeds_date() {
        let ctx = MeetingContext::default().with_date("10-15-2025").unwrap();
        assert_eq!(ctx.archive_name(), "meeting_files_10-15-2025.zip");
    }
}
