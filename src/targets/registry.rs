//! Registry for target language adapters

use std::collections::HashMap;
use std::sync::Arc;

use crate::generation::{GenerationError, Target};
use crate::targets::PhpTarget;

/// Lookup table from target name to adapter.
///
/// Names are matched case-insensitively, so `php`, `PHP` and `Php` all select
/// the PHP adapter.
pub struct TargetRegistry {
    targets: HashMap<String, Arc<dyn Target>>,
}

impl TargetRegistry {
    /// Create a new registry with the built-in targets
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(PhpTarget::new()));
        registry
    }

    /// Create a registry without any targets
    pub fn empty() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    /// Register a target under its own name, replacing any previous adapter
    pub fn register(&mut self, target: Arc<dyn Target>) {
        tracing::debug!(target_language = %target.identity(), "Registering target");
        self.targets.insert(target.name().to_lowercase(), target);
    }

    /// Get the adapter for `name`
    pub fn get(&self, name: &str) -> Result<Arc<dyn Target>, GenerationError> {
        self.targets
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| GenerationError::UnknownTarget(name.to_string()))
    }

    /// Check if a target is registered
    pub fn has_target(&self, name: &str) -> bool {
        self.targets.contains_key(&name.to_lowercase())
    }

    /// All registered adapters, sorted by name
    pub fn targets(&self) -> Vec<Arc<dyn Target>> {
        let mut targets: Vec<_> = self.targets.values().cloned().collect();
        targets.sort_by(|a, b| a.name().cmp(b.name()));
        targets
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
