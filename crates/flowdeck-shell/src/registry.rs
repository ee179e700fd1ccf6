//! Explicit pipeline definition registry.
//!
//! Replaces scanning the session's type namespace with explicit registration:
//! the host registers a named factory per user definition, and resolution
//! fails loudly on zero or more-than-one candidates instead of picking the
//! first match.

use flowdeck_types::{Result, ShellError};

use crate::definition::PipelineDefinition;

type DefinitionFactory = Box<dyn Fn() -> anyhow::Result<Box<dyn PipelineDefinition>> + Send + Sync>;

struct Registration {
    name: String,
    factory: DefinitionFactory,
}

/// Registered pipeline definitions for the current session.
#[derive(Default)]
pub struct PipelineRegistry {
    registrations: Vec<Registration>,
}

impl PipelineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named definition factory.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::DuplicateDefinition`] if the name is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn() -> anyhow::Result<Box<dyn PipelineDefinition>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.registrations.iter().any(|r| r.name == name) {
            return Err(ShellError::DuplicateDefinition(name));
        }
        self.registrations.push(Registration {
            name,
            factory: Box::new(factory),
        });
        Ok(())
    }

    /// Remove a registration by name; returns whether it existed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.name != name);
        self.registrations.len() != before
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    pub fn names(&self) -> Vec<String> {
        self.registrations.iter().map(|r| r.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Resolve the single registered definition and construct it.
    ///
    /// # Errors
    ///
    /// - [`ShellError::NoDefinition`] if nothing is registered.
    /// - [`ShellError::AmbiguousDefinition`] if more than one is registered.
    /// - [`ShellError::Construction`] naming the definition if its factory
    ///   fails.
    pub fn instantiate(&self) -> Result<(String, Box<dyn PipelineDefinition>)> {
        match self.registrations.as_slice() {
            [] => Err(ShellError::NoDefinition),
            [single] => {
                let definition = (single.factory)().map_err(|source| ShellError::Construction {
                    name: single.name.clone(),
                    source,
                })?;
                Ok((single.name.clone(), definition))
            }
            many => Err(ShellError::AmbiguousDefinition {
                names: many.iter().map(|r| r.name.clone()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use flowdeck_types::PipelineOptions;

    use super::*;
    use crate::definition::Pipeline;

    struct NoopDefinition;

    impl PipelineDefinition for NoopDefinition {
        fn build(&self, _options: &PipelineOptions) -> anyhow::Result<Box<dyn Pipeline>> {
            anyhow::bail!("not built in these tests")
        }
    }

    fn noop_factory() -> anyhow::Result<Box<dyn PipelineDefinition>> {
        Ok(Box::new(NoopDefinition))
    }

    #[test]
    fn empty_registry_resolves_to_no_definition() {
        let registry = PipelineRegistry::new();
        assert!(matches!(
            registry.instantiate(),
            Err(ShellError::NoDefinition)
        ));
    }

    #[test]
    fn single_registration_resolves_by_name() {
        let mut registry = PipelineRegistry::new();
        registry.register("WordCount", noop_factory).unwrap();
        let (name, _definition) = registry.instantiate().expect("should resolve");
        assert_eq!(name, "WordCount");
    }

    #[test]
    fn two_registrations_are_ambiguous() {
        let mut registry = PipelineRegistry::new();
        registry.register("WordCount", noop_factory).unwrap();
        registry.register("Census", noop_factory).unwrap();
        let err = registry.instantiate().map(|(name, _)| name).unwrap_err();
        match err {
            ShellError::AmbiguousDefinition { names } => {
                assert_eq!(names, vec!["WordCount".to_string(), "Census".to_string()]);
            }
            other => panic!("expected ambiguity error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_name_is_rejected_at_registration() {
        let mut registry = PipelineRegistry::new();
        registry.register("WordCount", noop_factory).unwrap();
        let err = registry.register("WordCount", noop_factory).unwrap_err();
        assert!(matches!(err, ShellError::DuplicateDefinition(name) if name == "WordCount"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn failing_factory_reports_construction_error_with_name() {
        let mut registry = PipelineRegistry::new();
        registry
            .register("Broken", || anyhow::bail!("no default credentials"))
            .unwrap();
        let err = registry.instantiate().map(|(name, _)| name).unwrap_err();
        match err {
            ShellError::Construction { name, source } => {
                assert_eq!(name, "Broken");
                assert!(source.to_string().contains("no default credentials"));
            }
            other => panic!("expected construction error, got {other:?}"),
        }
    }

    #[test]
    fn unregister_frees_the_name() {
        let mut registry = PipelineRegistry::new();
        registry.register("WordCount", noop_factory).unwrap();
        assert!(registry.unregister("WordCount"));
        assert!(!registry.unregister("WordCount"));
        assert!(registry.is_empty());
        registry.register("WordCount", noop_factory).unwrap();
    }
}
