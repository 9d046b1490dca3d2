//! Generation infrastructure implementations

pub mod context_builder;
pub mod recognizer_renderer;

pub use context_builder::build_recognizer_context;
pub use recognizer_renderer::RecognizerRenderer;
