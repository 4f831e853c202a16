//! Helpers for locating manifests and building asset URLs.
//!
//! The logic is split into focused submodules so that manifest discovery, key matching and
//! URL assembly can be tested independently of the resolver that strings them together.

mod bundle;
mod candidates;
mod filters;

pub use bundle::{build_url, dev_server_url, public_file, static_url};
pub use candidates::manifest_candidates;
pub use filters::{basename, basename_without_js, matches_basename, matches_entry_stem};
