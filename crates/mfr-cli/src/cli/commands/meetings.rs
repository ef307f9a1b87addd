//! `mfr meetings` – list selectable meeting types and dates.

use mfr_core::catalog::{MEETING_DATES, MEETING_TYPES};

pub fn run_meetings() {
    println!("Meeting types:");
    for t in MEETING_TYPES {
        println!("  {t}");
    }
    println!("Meeting dates:");
    for d in MEETING_DATES {
        println!("  {d}");
    }
}
