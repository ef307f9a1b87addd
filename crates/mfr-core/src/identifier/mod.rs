//! Identifier derivation: free text to short, filesystem-safe identifiers.
//!
//! Two policies live here:
//!
//! - [`derive_title`] is the canonical one. It feeds every filename: stop
//!   words are dropped and whole tokens are accumulated up to 25 characters.
//! - [`suggest_keyword`] only proposes an attachment keyword. Its output is
//!   shown to the user and never used for a filename unless the user adopts it
//!   as the keyword, which then goes through the usual keyword sanitization.

mod keyword;
mod title;

pub use keyword::suggest_keyword;
pub use title::{derive_title, DerivedTitle};
