//! Template loading traits for the infrastructure layer

use crate::generation::TargetIdentity;
use crate::infrastructure::templates::{TemplateError, TemplateGroup};

/// Builds the template group for a target.
///
/// Each call parses from scratch; callers that want reuse go through
/// [`TemplateGroupCache`](crate::infrastructure::templates::TemplateGroupCache).
pub trait TemplateGroupLoader: Send + Sync {
    fn load(&self, target: &TargetIdentity) -> Result<TemplateGroup, TemplateError>;
}
