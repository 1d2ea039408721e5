//! I/O error classification and retry helpers for stores.

use std::io::ErrorKind;

use crate::config::RetryPolicy;
use crate::error::StoreError;

/// Classifies I/O errors into specific StoreError variants.
pub fn classify_io_error(error: std::io::Error, context: &str) -> StoreError {
    match error.kind() {
        ErrorKind::StorageFull | ErrorKind::OutOfMemory => {
            StoreError::StorageFull(format!("{}: {}", context, error))
        }
        ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted => {
            StoreError::TransientIo(format!("{}: {}", context, error))
        }
        ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => {
            StoreError::Unavailable(format!("{}: {}", context, error))
        }
        _ => StoreError::Io(format!("{}: {}", context, error)),
    }
}

/// Runs `operation` against the cache entry `key`, retrying it while the
/// store reports a transient error and the policy has attempts left.
///
/// Any other error, or the last transient one, is returned as is.
pub fn retry_transient<T>(
    policy: &RetryPolicy,
    action: &str,
    key: &str,
    mut operation: impl FnMut() -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    let mut attempt = 0;
    loop {
        let err = match operation() {
            Ok(value) => return Ok(value),
            Err(err @ StoreError::TransientIo(_)) if attempt < policy.max_retries => err,
            Err(err) => return Err(err),
        };
        attempt += 1;
        tracing::warn!(
            "Transient error on {} of '{}' (retry {}/{}): {}",
            action,
            key,
            attempt,
            policy.max_retries,
            err
        );
        if policy.delay_ms > 0 {
            std::thread::sleep(policy.delay());
        }
    }
}
