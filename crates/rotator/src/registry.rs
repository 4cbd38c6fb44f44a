//! Handler registration and lookup

use crate::handler::RotationHandler;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping credential-type tags to rotation handlers.
///
/// The orchestrator looks handlers up by the credential's `kind` tag; a
/// credential whose tag has no registered handler is skipped with a warning.
///
/// # Example
///
/// ```ignore
/// let mut registry = HandlerRegistry::new();
/// registry.register(Arc::new(GitlabHandler::new(iam, gitlab)));
///
/// let handler = registry.get("gitlab").unwrap();
/// handler.rotate(&credential).await?;
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Arc<dyn RotationHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler.
    ///
    /// The handler's `credential_type()` is used as the key. If a handler
    /// with the same tag already exists, it is replaced.
    pub fn register(&mut self, handler: Arc<dyn RotationHandler>) {
        self.handlers.insert(handler.credential_type(), handler);
    }

    /// Get a handler by credential-type tag.
    ///
    /// Returns `None` if no handler is registered for the given tag.
    #[must_use]
    pub fn get(&self, credential_type: &str) -> Option<Arc<dyn RotationHandler>> {
        self.handlers.get(credential_type).cloned()
    }

    /// Check if a handler is registered for the given tag
    #[must_use]
    pub fn has(&self, credential_type: &str) -> bool {
        self.handlers.contains_key(credential_type)
    }

    /// Get all registered credential-type tags
    #[must_use]
    pub fn credential_types(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("credential_types", &self.credential_types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;
    use rotator_core::Credential;

    struct NoopHandler;

    #[async_trait]
    impl RotationHandler for NoopHandler {
        fn credential_type(&self) -> &'static str {
            "noop"
        }

        async fn rotate(&self, _credential: &Credential) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn registry_starts_empty() {
        let registry = HandlerRegistry::new();
        assert!(registry.credential_types().is_empty());
        assert!(registry.get("noop").is_none());
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = HandlerRegistry::new();
        registry.register(Arc::new(NoopHandler));

        assert!(registry.has("noop"));
        assert!(!registry.has("gitlab"));
        assert_eq!(registry.credential_types(), vec!["noop"]);
        assert_eq!(registry.get("noop").unwrap().credential_type(), "noop");
    }
}
