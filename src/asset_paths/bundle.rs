use std::path::{Path, PathBuf};

/// Public URL for a file emitted into the build directory.
pub fn build_url(build_directory: &str, file: &str) -> String {
    format!("/{}/{}", build_directory, file)
}

/// Public URL for a static file served from one of the asset directories.
pub fn static_url(directory: &str, file: &str) -> String {
    format!("/{}/{}", directory, file)
}

/// URL of an unbundled source file served by the dev server.
pub fn dev_server_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path)
}

/// Filesystem location of a static file below the public root.
///
/// The path is rebuilt segment by segment, so leading or doubled slashes stay below
/// `public_root`. Returns `None` when a segment would climb out with `..`.
pub fn public_file(public_root: &Path, directory: &str, file: &str) -> Option<PathBuf> {
    let mut path = public_root.to_path_buf();
    for segment in directory.split('/').chain(file.split('/')) {
        match segment {
            "" | "." => {}
            ".." => return None,
            segment => path.push(segment),
        }
    }
    Some(path)
}
