//! Concrete target language adapters and the registry selecting them by name

pub mod php;
pub mod registry;

pub use php::PhpTarget;
pub use registry::TargetRegistry;
