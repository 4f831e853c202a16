use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.json";
const VITE_METADATA_DIR: &str = ".vite";

/// Locations a Vite build may have written its manifest to, in lookup order.
///
/// Vite 4 writes `manifest.json` directly into the output directory while Vite 5 moved it
/// into a `.vite` subdirectory, so both are tried with the older layout first.
pub fn manifest_candidates(public_root: &Path, build_directory: &str) -> Vec<PathBuf> {
    let build_root = public_root.join(build_directory.trim_matches('/'));
    vec![
        build_root.join(MANIFEST_FILE),
        build_root.join(VITE_METADATA_DIR).join(MANIFEST_FILE),
    ]
}
