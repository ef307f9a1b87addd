//! `mfr suggest-keyword <text>` – propose an attachment keyword.

use mfr_core::identifier::suggest_keyword;

pub fn run_suggest_keyword(text: &str) {
    let keyword = suggest_keyword(text);
    if keyword.is_empty() {
        println!("(no suggestion)");
    } else {
        println!("{keyword}");
    }
}
