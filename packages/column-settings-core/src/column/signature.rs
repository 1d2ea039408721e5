//! Order-independent schema fingerprints.

use std::collections::BTreeSet;

use super::{identity_with_prefix, ColumnDescriptor, DEFAULT_POSITIONAL_PREFIX};

/// Separator between identities in a signature.
pub const DEFAULT_SIGNATURE_SEPARATOR: &str = "|";

/// Fingerprints the identity set of a column schema.
///
/// Identities are deduplicated and sorted, so two schemas holding the same
/// columns in a different order share a signature.
pub fn signature_of(descriptors: &[ColumnDescriptor]) -> String {
    signature_with_separator(
        descriptors,
        DEFAULT_SIGNATURE_SEPARATOR,
        DEFAULT_POSITIONAL_PREFIX,
    )
}

/// Same as [`signature_of`] with a custom separator and positional prefix.
pub fn signature_with_separator(
    descriptors: &[ColumnDescriptor],
    separator: &str,
    positional_prefix: &str,
) -> String {
    let identities: BTreeSet<String> = descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| identity_with_prefix(descriptor, index, positional_prefix))
        .collect();

    identities.into_iter().collect::<Vec<_>>().join(separator)
}
