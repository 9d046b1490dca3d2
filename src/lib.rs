//! targetgen library
//!
//! Target-language adaptation layer for a template-driven grammar code
//! generator. Each output language is described by a [`generation::Target`]
//! adapter that supplies its reserved words, string escaping rules and
//! capability flags; the shared rendering pipeline consults the adapter
//! instead of hard-coding any language.
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod generation;
pub mod infrastructure;
pub mod targets;

pub use crate::{
    config::Config,
    error::{Error, Result},
    generation::{GenerationContext, GenerationError, Target},
    targets::TargetRegistry,
};
