//! Template group loading and caching

pub mod cache;
pub mod embedded;
pub mod errors;
pub mod filesystem;
pub mod group;
pub mod traits;

pub use cache::*;
pub use embedded::*;
pub use errors::*;
pub use filesystem::*;
pub use group::*;
pub use traits::*;
