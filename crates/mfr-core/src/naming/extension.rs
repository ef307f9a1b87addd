//! Extension extraction from an original filename.

/// Returns the text after the last `.` in `name`.
///
/// Returns `None` when the name has no dot or ends with one.
pub fn extension_of(name: &str) -> Option<&str> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext)
}
