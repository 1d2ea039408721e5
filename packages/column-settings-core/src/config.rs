//! Reconciler and storage configuration.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::column::FixedSide;

/// Policy knobs for identity, signature and system column handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Separator joining identities in a schema signature
    pub signature_separator: String,
    /// Prefix for positional identities of columns with no identity source
    pub positional_prefix: String,
    /// Column types that can never be reordered
    pub locked_types: Vec<String>,
    /// Fixed side applied to a column type when neither cache nor descriptor sets one
    pub type_fixed_sides: HashMap<String, FixedSide>,
    /// Label used for a column type when the descriptor has no label
    pub type_labels: HashMap<String, String>,
    /// Key written and removed when probing storage availability
    pub probe_key: String,
    /// Retry budget for transient storage errors
    pub retry: RetryPolicy,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            signature_separator: "|".to_string(),
            positional_prefix: "col_".to_string(),
            locked_types: vec!["action".to_string(), "selection".to_string()],
            type_fixed_sides: HashMap::from([
                ("action".to_string(), FixedSide::Right),
                ("selection".to_string(), FixedSide::Left),
            ]),
            type_labels: HashMap::from([("selection".to_string(), "Select".to_string())]),
            probe_key: "__column_settings_probe__".to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl ReconcilerConfig {
    /// Returns true if columns of this type may never be dragged.
    pub fn is_locked_type(&self, column_type: Option<&str>) -> bool {
        column_type.is_some_and(|t| self.locked_types.iter().any(|locked| locked == t))
    }

    /// Default fixed side for a column type.
    pub fn fixed_side_for(&self, column_type: Option<&str>) -> Option<FixedSide> {
        column_type.and_then(|t| self.type_fixed_sides.get(t).copied())
    }

    /// Placeholder label for a column type.
    pub fn label_for(&self, column_type: Option<&str>) -> Option<&str> {
        column_type.and_then(|t| self.type_labels.get(t).map(String::as_str))
    }
}

/// How often and how patiently a cache operation is retried after a
/// transient storage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub max_retries: u32,
    /// Pause between attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            delay_ms: 20,
        }
    }
}

impl RetryPolicy {
    /// Policy that makes a single attempt.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay_ms: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Directory-backed store configuration.
#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    /// Directory holding one file per key
    pub root_dir: PathBuf,
    /// File extension appended to each key's file name
    pub extension: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("./column-settings"),
            extension: "json".to_string(),
        }
    }
}
