//! Per-context cache of template groups

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::generation::{Target, TargetIdentity};
use crate::infrastructure::templates::{TemplateError, TemplateGroup, TemplateGroupLoader};

/// Template groups already built within one execution context, keyed by
/// target identity (name and version).
///
/// The cache belongs to a single context and is used by one generation run at
/// a time, so it needs no locking. Failed constructions are never stored.
/// Adapters reporting the same identity share one group, and with it the
/// string renderer of whichever adapter loaded it first.
#[derive(Debug, Default)]
pub struct TemplateGroupCache {
    groups: HashMap<TargetIdentity, Arc<TemplateGroup>>,
}

impl TemplateGroupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached group for `target`, or build it with `loader`,
    /// register the target's string renderer on it, and cache it
    pub fn get_or_load(
        &mut self,
        target: &dyn Target,
        loader: &dyn TemplateGroupLoader,
    ) -> Result<Arc<TemplateGroup>, TemplateError> {
        if let Some(group) = self.groups.get(target.identity()) {
            debug!(target_language = target.name(), "Template group cache hit");
            return Ok(Arc::clone(group));
        }

        debug!(target_language = target.name(), "Template group cache miss");
        let mut group = loader.load(target.identity()).map_err(|e| {
            warn!(
                target_language = target.name(),
                error = %e,
                "Failed to construct template group"
            );
            e
        })?;
        group.register_renderer(target.string_renderer());

        let group = Arc::new(group);
        self.groups
            .insert(target.identity().clone(), Arc::clone(&group));
        Ok(group)
    }

    pub fn contains(&self, identity: &TargetIdentity) -> bool {
        self.groups.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
