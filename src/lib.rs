#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod resolver;
pub mod tags;
pub mod templates;

pub use config::{AssetDirectories, ResolverConfig};
pub use error::{ConfigError, ManifestError, TemplateCallError};
pub use models::{Manifest, ManifestEntry};
pub use resolver::{DEFAULT_IMAGE_RESOURCE_PATH, FONT_RESOURCE_PATH, ManifestResolver};
pub use templates::{NamingScheme, Operation, TemplateEngine, TemplateFunctions};
