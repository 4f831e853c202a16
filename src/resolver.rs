//! Resolution of logical asset names to dev server or manifest-backed URLs and tags.

use std::path::{Path, PathBuf};

use crate::asset_paths::{
    basename, build_url, dev_server_url, manifest_candidates, matches_basename, matches_entry_stem,
    public_file, static_url,
};
use crate::config::ResolverConfig;
use crate::manifest::{LoadedManifest, discover_manifest};
use crate::models::{Manifest, ManifestEntry};
use crate::tags::{TagList, link_tag, script_tag};

/// Source directory images are looked up under when a template does not name one.
pub const DEFAULT_IMAGE_RESOURCE_PATH: &str = "resources/images";

/// Source directory fonts are looked up under.
pub const FONT_RESOURCE_PATH: &str = "resources/fonts";

/// Resolves entry names against a build manifest loaded once at construction.
///
/// Every lookup is a read-only operation on immutable state, so one resolver can be shared
/// across request handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct ManifestResolver {
    config: ResolverConfig,
    manifest: Manifest,
    manifest_path: Option<PathBuf>,
}

impl ManifestResolver {
    /// Create a resolver, loading the manifest from the first usable candidate location.
    ///
    /// A missing or unparseable manifest is not an error: the resolver falls back to an empty
    /// manifest and every lookup degrades to its guessed path.
    pub fn new(config: ResolverConfig) -> Self {
        let config = config.normalised();
        let candidates = manifest_candidates(&config.public_root, &config.build_directory);

        match discover_manifest(&candidates) {
            Ok(LoadedManifest { path, manifest }) => Self {
                config,
                manifest,
                manifest_path: Some(path),
            },
            Err(err) => {
                if config.is_dev {
                    log::debug!("{err}; resolving against an empty manifest");
                } else {
                    log::warn!("{err}; resolving against an empty manifest");
                }
                Self {
                    config,
                    manifest: Manifest::empty(),
                    manifest_path: None,
                }
            }
        }
    }

    /// Create a resolver around a manifest the host already parsed.
    pub fn with_manifest(config: ResolverConfig, manifest: Manifest) -> Self {
        Self {
            config: config.normalised(),
            manifest,
            manifest_path: None,
        }
    }

    /// Settings the resolver was built with, after normalisation.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Whether lookups go to the dev server.
    pub fn is_dev(&self) -> bool {
        self.config.is_dev
    }

    /// Loaded manifest, for diagnostics.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// File the manifest was read from, if any candidate loaded.
    pub fn manifest_path(&self) -> Option<&Path> {
        self.manifest_path.as_deref()
    }

    /// URL of the output file built from `entry`.
    ///
    /// Falls back to a basename match anywhere in the manifest, then to a guessed path under
    /// `assets/` in the build directory.
    pub fn asset(&self, entry: &str) -> String {
        if self.config.is_dev {
            return dev_server_url(&self.config.dev_server_url, entry);
        }

        if let Some(file) = self.manifest.file_of(entry) {
            return self.build_url(file);
        }

        let by_basename = self
            .manifest
            .iter()
            .filter(|(key, _)| matches_basename(key, entry))
            .find_map(|(_, record)| record.file.as_deref());
        if let Some(file) = by_basename {
            return self.build_url(file);
        }

        self.build_url(&format!("assets/{}", basename(entry)))
    }

    /// Stylesheet `<link>` tags for `entry`, or an empty string when none are known.
    ///
    /// Always empty in dev mode, where the dev server injects styles from the script.
    pub fn entry_link_tags(&self, entry: &str) -> String {
        if self.config.is_dev {
            return String::new();
        }

        if let Some(record) = self.manifest.get(entry) {
            let tags = self.stylesheet_tags(&record.css);
            if !tags.is_empty() {
                return tags.into_html();
            }
        }

        let by_stem = self
            .manifest
            .iter()
            .find(|(key, record)| matches_entry_stem(key, entry) && !record.css.is_empty());
        if let Some((_, record)) = by_stem {
            return self.stylesheet_tags(&record.css).into_html();
        }

        let by_substring = self
            .manifest
            .iter()
            .filter(|(key, _)| key.contains(entry))
            .find_map(|(_, record)| record.file.as_deref().filter(|file| file.contains(".css")));
        if let Some(file) = by_substring {
            return link_tag(&self.build_url(file));
        }

        String::new()
    }

    /// Module `<script>` tags for `entry`, preceded by the chunks it imports.
    pub fn entry_script_tags(&self, entry: &str) -> String {
        if self.config.is_dev {
            return script_tag(&dev_server_url(&self.config.dev_server_url, entry));
        }

        if let Some(record) = self.manifest.get(entry)
            && let Some(file) = record.file.as_deref()
        {
            return self.module_script_tags(entry, record, file);
        }

        let by_stem = self
            .manifest
            .iter()
            .filter(|(key, _)| matches_entry_stem(key, entry))
            .find_map(|(key, record)| record.file.as_deref().map(|file| (key, record, file)));
        if let Some((key, record, file)) = by_stem {
            return self.module_script_tags(key, record, file);
        }

        let by_substring = self
            .manifest
            .iter()
            .filter(|(key, _)| key.contains(entry))
            .find_map(|(_, record)| record.file.as_deref().filter(|file| file.contains(".js")));
        if let Some(file) = by_substring {
            return script_tag(&self.build_url(file));
        }

        script_tag(&self.build_url(&format!("assets/{entry}.js")))
    }

    /// URL of an image, or `None` when it cannot be found and no placeholder was given.
    ///
    /// The manifest is consulted under `resource_path` first, then the static images
    /// directory below the public root. With a placeholder the same lookup is repeated for
    /// it, ending in an unverified guess inside the static images directory.
    pub fn image(
        &self,
        path: &str,
        resource_path: &str,
        placeholder: Option<&str>,
    ) -> Option<String> {
        if self.config.is_dev {
            return Some(dev_server_url(
                &self.config.dev_server_url,
                &format!("{resource_path}/{path}"),
            ));
        }

        if let Some(url) = self.locate_image(path, resource_path) {
            return Some(url);
        }

        let placeholder = placeholder?;
        Some(
            self
                .locate_image(placeholder, resource_path)
                .unwrap_or_else(|| static_url(&self.config.asset_directories.images, placeholder)),
        )
    }

    /// URL of a font, falling back to the static fonts directory without checking the disk.
    pub fn font(&self, path: &str) -> String {
        let key = format!("{FONT_RESOURCE_PATH}/{path}");
        if self.config.is_dev {
            return dev_server_url(&self.config.dev_server_url, &key);
        }

        match self.manifest.file_of(&key) {
            Some(file) => self.build_url(file),
            None => static_url(&self.config.asset_directories.fonts, path),
        }
    }

    fn build_url(&self, file: &str) -> String {
        build_url(&self.config.build_directory, file)
    }

    fn stylesheet_tags(&self, css: &[String]) -> TagList {
        let mut tags = TagList::new();
        for file in css {
            tags.push_link(&self.build_url(file));
        }
        tags
    }

    fn module_script_tags(&self, key: &str, record: &ManifestEntry, file: &str) -> String {
        let mut tags = TagList::new();
        for import in &record.imports {
            match self.manifest.file_of(import) {
                Some(chunk) => tags.push_script(&self.build_url(chunk)),
                None => log::warn!(
                    "manifest entry '{key}' imports '{import}', which has no output file; skipping it"
                ),
            }
        }
        tags.push_script(&self.build_url(file));
        tags.into_html()
    }

    fn locate_image(&self, path: &str, resource_path: &str) -> Option<String> {
        if let Some(file) = self.manifest.file_of(&format!("{resource_path}/{path}")) {
            return Some(self.build_url(file));
        }

        let images_dir = &self.config.asset_directories.images;
        public_file(&self.config.public_root, images_dir, path)
            .filter(|candidate| candidate.exists())
            .map(|_| static_url(images_dir, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn manifest(value: Value) -> Manifest {
        serde_json::from_value(value).unwrap()
    }

    fn production(value: Value) -> ManifestResolver {
        ManifestResolver::with_manifest(ResolverConfig::new("public"), manifest(value))
    }

    fn sample() -> Value {
        json!({
            "resources/js/app.js": {
                "file": "assets/app-ABC123.js",
                "css": ["assets/app-DEF456.css"],
                "imports": ["_chunk-GHI789.js"]
            },
            "_chunk-GHI789.js": {"file": "assets/_chunk-GHI789-JKL012.js"},
            "resources/images/logo.png": {"file": "assets/logo-MNO345.png"},
            "resources/fonts/custom.woff2": {"file": "assets/custom-PQR678.woff2"}
        })
    }

    fn public_root_with_images(files: &[&str]) -> TempDir {
        let dir = tempdir().unwrap();
        let images = dir.path().join("assets/images");
        fs::create_dir_all(&images).unwrap();
        for file in files {
            fs::write(images.join(file), b"img").unwrap();
        }
        dir
    }

    #[test]
    fn asset_falls_back_to_basename_match() {
        let resolver = production(sample());
        assert_eq!(resolver.asset("app.js"), "/build/assets/app-ABC123.js");
        assert_eq!(resolver.asset("legacy/js/app.js"), "/build/assets/app-ABC123.js");
    }

    #[test]
    fn asset_basename_match_skips_entries_without_file() {
        let resolver = production(json!({
            "a/app.js": {"css": ["assets/app.css"]},
            "b/app.js": {"file": "assets/app-2.js"}
        }));
        assert_eq!(resolver.asset("app.js"), "/build/assets/app-2.js");
    }

    #[test]
    fn asset_guesses_path_from_basename() {
        let resolver = production(sample());
        assert_eq!(resolver.asset("resources/js/missing.js"), "/build/assets/missing.js");
    }

    #[test]
    fn link_tags_preserve_css_order_and_escape() {
        let resolver = production(json!({
            "main.js": {"file": "assets/main.js", "css": ["assets/a.css", "assets/b&c.css"]}
        }));
        assert_eq!(
            resolver.entry_link_tags("main.js"),
            concat!(
                r#"<link rel="stylesheet" href="/build/assets/a.css">"#,
                r#"<link rel="stylesheet" href="/build/assets/b&amp;c.css">"#,
            )
        );
    }

    #[test]
    fn link_tags_match_entry_by_short_name() {
        let resolver = production(sample());
        assert_eq!(
            resolver.entry_link_tags("app"),
            r#"<link rel="stylesheet" href="/build/assets/app-DEF456.css">"#
        );
    }

    #[test]
    fn link_tags_fall_back_to_css_entries_containing_name() {
        let resolver = production(json!({
            "resources/js/admin.js": {"file": "assets/admin-1.js"},
            "resources/css/admin.css": {"file": "assets/admin-2.css"}
        }));
        assert_eq!(
            resolver.entry_link_tags("admin"),
            r#"<link rel="stylesheet" href="/build/assets/admin-2.css">"#
        );
    }

    #[test]
    fn link_tags_continue_past_exact_match_without_css() {
        let resolver = production(json!({
            "theme": {"file": "assets/theme.js"},
            "resources/css/theme.css": {"file": "assets/theme-9.css"}
        }));
        assert_eq!(
            resolver.entry_link_tags("theme"),
            r#"<link rel="stylesheet" href="/build/assets/theme-9.css">"#
        );
    }

    #[test]
    fn link_tags_are_empty_for_unknown_entries() {
        assert_eq!(production(sample()).entry_link_tags("unknown"), "");
        assert_eq!(production(json!({})).entry_link_tags("resources/js/app.js"), "");
    }

    #[test]
    fn script_tags_emit_imports_before_entry() {
        let resolver = production(sample());
        assert_eq!(
            resolver.entry_script_tags("resources/js/app.js"),
            concat!(
                r#"<script type="module" src="/build/assets/_chunk-GHI789-JKL012.js"></script>"#,
                r#"<script type="module" src="/build/assets/app-ABC123.js"></script>"#,
            )
        );
    }

    #[test]
    fn script_tags_match_entry_by_short_name_with_imports() {
        let resolver = production(sample());
        assert_eq!(
            resolver.entry_script_tags("app"),
            resolver.entry_script_tags("resources/js/app.js")
        );
    }

    #[test]
    fn script_tags_substring_match_omits_imports() {
        let resolver = production(json!({
            "resources/js/dashboard/index.js": {
                "file": "assets/dashboard-1.js",
                "imports": ["_vendor.js"]
            },
            "_vendor.js": {"file": "assets/vendor-2.js"}
        }));
        assert_eq!(
            resolver.entry_script_tags("dashboard"),
            r#"<script type="module" src="/build/assets/dashboard-1.js"></script>"#
        );
    }

    #[test]
    fn script_tags_skip_imports_missing_from_manifest() {
        let resolver = production(json!({
            "app.js": {"file": "assets/app.js", "imports": ["gone.js", "chunk.js"]},
            "chunk.js": {"file": "assets/chunk-Y.js"}
        }));
        assert_eq!(
            resolver.entry_script_tags("app.js"),
            concat!(
                r#"<script type="module" src="/build/assets/chunk-Y.js"></script>"#,
                r#"<script type="module" src="/build/assets/app.js"></script>"#,
            )
        );
    }

    #[test]
    fn script_tags_guess_path_as_last_resort() {
        let resolver = production(json!({}));
        assert_eq!(
            resolver.entry_script_tags("main"),
            r#"<script type="module" src="/build/assets/main.js"></script>"#
        );
    }

    #[test]
    fn image_resolves_static_file_from_public_root() {
        let root = public_root_with_images(&["hero.jpg"]);
        let resolver =
            ManifestResolver::with_manifest(ResolverConfig::new(root.path()), manifest(sample()));

        assert_eq!(
            resolver.image("hero.jpg", DEFAULT_IMAGE_RESOURCE_PATH, None),
            Some("/assets/images/hero.jpg".to_string())
        );
    }

    #[test]
    fn image_lookup_never_leaves_public_root() {
        let root = public_root_with_images(&[]);
        fs::write(root.path().join("assets/secret.png"), b"img").unwrap();
        let resolver =
            ManifestResolver::with_manifest(ResolverConfig::new(root.path()), Manifest::empty());

        assert_eq!(resolver.image("/etc/hostname", DEFAULT_IMAGE_RESOURCE_PATH, None), None);
        assert_eq!(resolver.image("../secret.png", DEFAULT_IMAGE_RESOURCE_PATH, None), None);
    }

    #[test]
    fn image_prefers_manifest_over_static_file() {
        let root = public_root_with_images(&["logo.png"]);
        let resolver =
            ManifestResolver::with_manifest(ResolverConfig::new(root.path()), manifest(sample()));

        assert_eq!(
            resolver.image("logo.png", DEFAULT_IMAGE_RESOURCE_PATH, None),
            Some("/build/assets/logo-MNO345.png".to_string())
        );
    }

    #[test]
    fn image_placeholder_resolves_through_manifest_and_disk() {
        let root = public_root_with_images(&["ph.svg"]);
        let resolver =
            ManifestResolver::with_manifest(ResolverConfig::new(root.path()), manifest(sample()));

        assert_eq!(
            resolver.image("missing.png", DEFAULT_IMAGE_RESOURCE_PATH, Some("logo.png")),
            Some("/build/assets/logo-MNO345.png".to_string())
        );
        assert_eq!(
            resolver.image("missing.png", DEFAULT_IMAGE_RESOURCE_PATH, Some("ph.svg")),
            Some("/assets/images/ph.svg".to_string())
        );
    }

    #[test]
    fn image_rechecks_disk_on_every_call() {
        let root = public_root_with_images(&[]);
        let resolver =
            ManifestResolver::with_manifest(ResolverConfig::new(root.path()), Manifest::empty());

        assert_eq!(resolver.image("late.png", DEFAULT_IMAGE_RESOURCE_PATH, None), None);
        fs::write(root.path().join("assets/images/late.png"), b"img").unwrap();
        assert_eq!(
            resolver.image("late.png", DEFAULT_IMAGE_RESOURCE_PATH, None),
            Some("/assets/images/late.png".to_string())
        );
    }

    #[test]
    fn image_uses_custom_resource_path_for_manifest_key() {
        let resolver = production(json!({
            "src/img/icon.svg": {"file": "assets/icon-7.svg"}
        }));
        assert_eq!(
            resolver.image("icon.svg", "src/img", None),
            Some("/build/assets/icon-7.svg".to_string())
        );
        assert_eq!(resolver.image("icon.svg", DEFAULT_IMAGE_RESOURCE_PATH, None), None);
    }

    #[test]
    fn font_falls_back_to_static_directory() {
        let resolver = production(sample());
        assert_eq!(resolver.font("custom.woff2"), "/build/assets/custom-PQR678.woff2");
        assert_eq!(resolver.font("other.woff2"), "/assets/fonts/other.woff2");
    }

    #[test]
    fn dev_mode_ignores_manifest() {
        let resolver = ManifestResolver::with_manifest(
            ResolverConfig::new("public").with_dev(true),
            manifest(sample()),
        );

        assert!(resolver.is_dev());
        assert_eq!(
            resolver.asset("resources/js/app.js"),
            "http://localhost:5173/resources/js/app.js"
        );
        assert_eq!(resolver.entry_link_tags("resources/js/app.js"), "");
        assert_eq!(
            resolver.entry_script_tags("resources/js/app.js"),
            r#"<script type="module" src="http://localhost:5173/resources/js/app.js"></script>"#
        );
        assert_eq!(
            resolver.image("logo.png", DEFAULT_IMAGE_RESOURCE_PATH, None),
            Some("http://localhost:5173/resources/images/logo.png".to_string())
        );
        assert_eq!(
            resolver.font("custom.woff2"),
            "http://localhost:5173/resources/fonts/custom.woff2"
        );
    }

    #[test]
    fn custom_build_directory_prefixes_urls() {
        let resolver = ManifestResolver::with_manifest(
            ResolverConfig::new("public").with_build_directory("/dist/"),
            manifest(sample()),
        );
        assert_eq!(resolver.asset("resources/js/app.js"), "/dist/assets/app-ABC123.js");
    }

    #[test]
    fn resolver_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ManifestResolver>();
    }
}
