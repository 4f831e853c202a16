//! Locating and parsing the manifest written by a Vite build.

mod loader;

pub use loader::{LoadedManifest, discover_manifest, load_manifest};
