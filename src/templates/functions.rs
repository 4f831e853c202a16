use std::sync::Arc;

use crate::error::TemplateCallError;
use crate::resolver::{DEFAULT_IMAGE_RESOURCE_PATH, ManifestResolver};

use super::naming::{NamingScheme, Operation};

/// Registration hook a template engine integration implements.
pub trait TemplateEngine {
    /// Expose `operation` to templates under `name`.
    fn register(&mut self, name: &'static str, operation: Operation);
}

/// Register every canonical and legacy name of `scheme` with `engine`.
pub fn register_functions<E: TemplateEngine + ?Sized>(engine: &mut E, scheme: &NamingScheme) {
    for (name, operation) in scheme.bindings() {
        engine.register(name, operation);
    }
}

/// Template-facing wrapper forwarding positional string arguments to a shared resolver.
#[derive(Debug, Clone)]
pub struct TemplateFunctions {
    resolver: Arc<ManifestResolver>,
    scheme: NamingScheme,
}

impl TemplateFunctions {
    /// Wrap `resolver` for an engine using `scheme`.
    pub fn new(resolver: Arc<ManifestResolver>, scheme: NamingScheme) -> Self {
        Self { resolver, scheme }
    }

    /// Shared resolver the functions forward to.
    pub fn resolver(&self) -> &ManifestResolver {
        &self.resolver
    }

    /// Naming scheme the functions are registered under.
    pub fn scheme(&self) -> &NamingScheme {
        &self.scheme
    }

    /// Register this wrapper's naming scheme with `engine`.
    pub fn register<E: TemplateEngine + ?Sized>(&self, engine: &mut E) {
        register_functions(engine, &self.scheme);
    }

    /// Run `operation` and return the text to write into the document.
    ///
    /// An image that cannot be found renders as an empty string.
    pub fn call(&self, operation: Operation, args: &[&str]) -> Result<String, TemplateCallError> {
        let resolver = &self.resolver;
        let rendered = match (operation, args) {
            (Operation::Asset, [entry]) => resolver.asset(entry),
            (Operation::EntryLinkTags, [entry]) => resolver.entry_link_tags(entry),
            (Operation::EntryScriptTags, [entry]) => resolver.entry_script_tags(entry),
            (Operation::Image, [path]) => resolver
                .image(path, DEFAULT_IMAGE_RESOURCE_PATH, None)
                .unwrap_or_default(),
            (Operation::Image, [path, resource_path]) => resolver
                .image(path, resource_path, None)
                .unwrap_or_default(),
            (Operation::Image, [path, resource_path, placeholder]) => resolver
                .image(path, resource_path, Some(*placeholder))
                .unwrap_or_default(),
            (Operation::Font, [path]) => resolver.font(path),
            (operation, args) => {
                return Err(TemplateCallError::Arity {
                    function: operation.id(),
                    expected: operation.arity(),
                    given: args.len(),
                });
            }
        };
        Ok(rendered)
    }

    /// Dispatch by a registered name, canonical or legacy.
    pub fn call_named(&self, name: &str, args: &[&str]) -> Result<String, TemplateCallError> {
        let operation = self
            .scheme
            .lookup(name)
            .ok_or_else(|| TemplateCallError::UnknownFunction(name.to_string()))?;
        self.call(operation, args)
    }
}
