//! Infrastructure layer - template loading, rendering and output

pub mod generation;
pub mod output;
pub mod templates;

pub use generation::*;
pub use output::*;
pub use templates::*;
