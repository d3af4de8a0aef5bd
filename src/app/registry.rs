//! Descriptor resolution for applications.
//!
//! # Responsibilities
//! - Map descriptor strings to application factories
//! - Produce a fresh Application instance for bootstrap
//! - Surface resolution failures as descriptive errors
//!
//! # Design Decisions
//! - Explicit registration replaces construct-by-name reflection
//! - Factories, not instances: each bootstrap gets its own Application
//! - Resolution failures are fatal to startup, never defaulted

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::Application;

/// Failure to turn a descriptor into an application.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no application descriptor configured")]
    MissingDescriptor,

    #[error("application `{0}` is not registered")]
    Unknown(String),
}

type Factory = Box<dyn Fn() -> Arc<dyn Application> + Send + Sync>;

/// Registry mapping descriptor strings to application factories.
#[derive(Default)]
pub struct AppRegistry {
    factories: HashMap<String, Factory>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under a descriptor name. A later registration
    /// under the same name replaces the earlier one.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn Application> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Resolve a descriptor to a fresh application instance.
    pub fn resolve(&self, descriptor: &str) -> Result<Arc<dyn Application>, ResolveError> {
        if descriptor.trim().is_empty() {
            return Err(ResolveError::MissingDescriptor);
        }
        self.factories
            .get(descriptor)
            .map(|factory| factory())
            .ok_or_else(|| ResolveError::Unknown(descriptor.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Handler;

    struct Bare;

    impl Application for Bare {
        fn handlers(&self) -> Vec<Arc<dyn Handler>> {
            Vec::new()
        }
    }

    fn registry() -> AppRegistry {
        let mut registry = AppRegistry::new();
        registry.register("bare", || -> Arc<dyn Application> { Arc::new(Bare) });
        registry
    }

    #[test]
    fn resolves_registered_descriptor() {
        assert!(registry().resolve("bare").is_ok());
    }

    #[test]
    fn empty_descriptor_is_missing() {
        let err = registry().resolve("  ").unwrap_err();
        assert!(matches!(err, ResolveError::MissingDescriptor));
    }

    #[test]
    fn unknown_descriptor_is_reported_by_name() {
        let err = registry().resolve("ghost").unwrap_err();
        assert!(matches!(err, ResolveError::Unknown(name) if name == "ghost"));
    }
}
