//! Validation of client-supplied `fields` lists against a shape's declared
//! fields.

use super::shaping::Shaped;

/// Checks that every name in a comma-separated `fields` string is a declared
/// field of `T`.
///
/// An empty or blank string is always valid (it means "all fields"). Tokens
/// are trimmed and matched case-insensitively; unlike sort-key validation, no
/// space truncation is applied, so a token like `"name desc"` is rejected
/// here.
///
/// # Returns
/// - `true` - Every requested field exists on the shape
/// - `false` - At least one requested field is unknown
pub fn has_properties<T: Shaped + 'static>(fields: &str) -> bool {
    if fields.trim().is_empty() {
        return true;
    }

    let descriptors = T::field_descriptors();

    fields.split(',').all(|token| {
        let requested = token.trim();
        descriptors
            .iter()
            .any(|descriptor| descriptor.name.eq_ignore_ascii_case(requested))
    })
}
