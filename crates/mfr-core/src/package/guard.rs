//! RAII guard that clears the assembler's busy flag when dropped.

use std::sync::atomic::{AtomicBool, Ordering};

use super::error::PackageError;

/// Holds the busy flag for one assembly. Dropping it marks the assembler idle.
pub(super) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Marks the assembler busy, or fails if it already is.
    pub(super) fn acquire(flag: &'a AtomicBool) -> Result<Self, PackageError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PackageError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
