//! The sequential rotation pass

use crate::error::Result;
use crate::registry::HandlerRegistry;
use rotator_core::Credential;

/// Rotate every credential in configuration order.
///
/// Credentials whose type has no registered handler are skipped with a
/// warning; the run continues. The first handler error aborts the pass and
/// is returned to the caller — credentials already rotated stay rotated,
/// later ones are untouched.
///
/// Returns the number of credentials actually rotated.
///
/// # Errors
///
/// Returns the first provisioning or publishing error encountered.
pub async fn rotate_all(registry: &HandlerRegistry, credentials: &[Credential]) -> Result<usize> {
    let mut rotated = 0;
    for credential in credentials {
        let Some(handler) = registry.get(&credential.kind) else {
            tracing::warn!(
                credential_type = %credential.kind,
                variable = %credential.variable,
                "no handler registered for credential type; skipping"
            );
            continue;
        };
        handler.rotate(credential).await?;
        rotated += 1;
    }
    Ok(rotated)
}
