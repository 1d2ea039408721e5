//! Column descriptors, identities, schema signatures and settings.

mod descriptor;
mod identity;
mod setting;
mod signature;

pub use descriptor::{ColumnDescriptor, FixedSide};
pub use identity::{identity_of, identity_with_prefix, DEFAULT_POSITIONAL_PREFIX};
pub use setting::ColumnSetting;
pub use signature::{signature_of, signature_with_separator, DEFAULT_SIGNATURE_SEPARATOR};
