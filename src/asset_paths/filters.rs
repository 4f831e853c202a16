const SCRIPT_SUFFIX: &str = ".js";

/// Final path segment of a manifest key or requested entry.
///
/// Trailing slashes are ignored, so `resources/js/` yields `js`.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return trimmed;
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Basename with a trailing `.js` removed, unless the basename is nothing but the suffix.
pub fn basename_without_js(path: &str) -> &str {
    let name = basename(path);
    match name.strip_suffix(SCRIPT_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Whether a manifest key and a requested entry share the same final path segment.
pub fn matches_basename(key: &str, requested: &str) -> bool {
    basename(key) == basename(requested)
}

/// Whether a manifest key names the script entry a template asked for by its short name.
///
/// `resources/js/app.js` matches a request for `app`, but not for `js/app` or `app.js`.
pub fn matches_entry_stem(key: &str, requested: &str) -> bool {
    basename_without_js(key) == requested
}
