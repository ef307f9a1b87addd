//! `mfr preview` – show old → new names without writing anything.

use anyhow::Result;
use mfr_core::identifier::DerivedTitle;
use mfr_core::meeting::MeetingContext;
use mfr_core::plan::RenamePlan;
use mfr_core::session::Session;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PreviewReport<'a> {
    meeting: &'a MeetingContext,
    title: &'a DerivedTitle,
    archive: String,
    plan: RenamePlan,
}

pub fn run_preview(session: &Session, json: bool) -> Result<()> {
    let report = PreviewReport {
        meeting: session.meeting(),
        title: session.primary().derived(),
        archive: session.meeting().archive_name(),
        plan: session.rename_plan(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Meeting: {} ({})",
        report.meeting.meeting_type(),
        report.meeting.date()
    );
    if report.title.is_empty() {
        println!("Title:   (none yet)");
    } else if report.title.truncated {
        println!("Title:   {} (shortened)", report.title.title);
    } else {
        println!("Title:   {}", report.title.title);
    }
    println!("Archive: {}", report.archive);

    if report.plan.is_empty() {
        println!("No files ready to rename.");
        return Ok(());
    }
    println!(
        "Ready:   {} file(s), {} attachment(s)",
        report.plan.len(),
        report.plan.attachment_count()
    );
    let width = report
        .plan
        .entries()
        .iter()
        .map(|e| e.original.chars().count())
        .max()
        .unwrap_or(0)
        .max("ORIGINAL".len());
    println!("{:<width$}    {}", "ORIGINAL", "NEW");
    for e in report.plan.entries() {
        println!("{:<width$} -> {}", e.original, e.canonical);
    }
    Ok(())
}
