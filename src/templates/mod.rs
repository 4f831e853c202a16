//! Shared surface for exposing the resolver to template engines.
//!
//! Engines differ only in the names they register the resolver operations under, so each
//! engine is described by a [`NamingScheme`] and plugs in through [`TemplateEngine`].

mod functions;
mod naming;

pub use functions::{TemplateEngine, TemplateFunctions, register_functions};
pub use naming::{NamingScheme, Operation};
