//! Stable column identities.

use super::ColumnDescriptor;

/// Prefix of the positional fallback identity.
pub const DEFAULT_POSITIONAL_PREFIX: &str = "col_";

/// Derives the identity of a column.
///
/// Resolution order: explicit id, field key, label, then `col_<index>`.
/// Empty strings count as absent. The index only participates when every
/// other source is missing.
pub fn identity_of(descriptor: &ColumnDescriptor, index: usize) -> String {
    identity_with_prefix(descriptor, index, DEFAULT_POSITIONAL_PREFIX)
}

/// Same as [`identity_of`] with a custom positional prefix.
pub fn identity_with_prefix(descriptor: &ColumnDescriptor, index: usize, prefix: &str) -> String {
    [&descriptor.id, &descriptor.prop, &descriptor.label]
        .into_iter()
        .flatten()
        .find(|source| !source.is_empty())
        .cloned()
        .unwrap_or_else(|| format!("{}{}", prefix, index))
}
