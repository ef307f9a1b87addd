//! `mfr title <description>` – show the derived agenda title.

use anyhow::Result;
use mfr_core::catalog::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use mfr_core::identifier::derive_title;

pub fn run_title(description: &str) -> Result<()> {
    let len = description.chars().count();
    if len > DESCRIPTION_MAX_CHARS {
        anyhow::bail!("description is {len} characters; the limit is {DESCRIPTION_MAX_CHARS}");
    }
    let derived = derive_title(description);
    if derived.is_empty() {
        println!("(no title: the description has no usable words)");
        return Ok(());
    }
    println!("{}", derived.title);
    if derived.truncated {
        println!("note: shortened to whole words within {TITLE_MAX_CHARS} characters");
    }
    Ok(())
}
