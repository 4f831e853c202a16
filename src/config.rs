//! Resolver configuration describing where built assets live and how they are served.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_CONFIG_FILE: &str = "vite.config.json";

/// Default URL segment the bundler writes its output to, relative to the public root.
pub const DEFAULT_BUILD_DIRECTORY: &str = "build";

/// Default address of the Vite dev server.
pub const DEFAULT_DEV_SERVER_URL: &str = "http://localhost:5173";

/// URL segments for static, non-bundled assets served straight from the public root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetDirectories {
    /// Directory holding static images.
    pub images: String,
    /// Directory holding static fonts.
    pub fonts: String,
}

impl Default for AssetDirectories {
    fn default() -> Self {
        Self {
            images: "assets/images".into(),
            fonts: "assets/fonts".into(),
        }
    }
}

/// Immutable settings consumed by [`crate::ManifestResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Filesystem directory served as the web root. Only used for file existence checks.
    pub public_root: PathBuf,
    /// URL segment prefixed to every manifest-derived output path.
    pub build_directory: String,
    /// Serve assets from the dev server instead of the manifest.
    pub is_dev: bool,
    /// Base URL of the dev server.
    pub dev_server_url: String,
    /// Static asset directories used as fallbacks for images and fonts.
    pub asset_directories: AssetDirectories,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            public_root: PathBuf::from("public"),
            build_directory: DEFAULT_BUILD_DIRECTORY.into(),
            is_dev: false,
            dev_server_url: DEFAULT_DEV_SERVER_URL.into(),
            asset_directories: AssetDirectories::default(),
        }
    }
}

impl ResolverConfig {
    /// Configuration with default settings rooted at `public_root`.
    pub fn new(public_root: impl Into<PathBuf>) -> Self {
        Self {
            public_root: public_root.into(),
            ..Self::default()
        }
    }

    /// Attempt to load configuration from the provided directory.
    ///
    /// A missing or malformed configuration file yields the defaults, so hosts can always
    /// build a resolver even before a project has been configured.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Ok(config) => config,
            Err(err) => {
                log::debug!("using default resolver configuration: {err}");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override the build output directory.
    pub fn with_build_directory(mut self, build_directory: impl Into<String>) -> Self {
        self.build_directory = build_directory.into();
        self
    }

    /// Switch between dev server and manifest resolution.
    pub fn with_dev(mut self, is_dev: bool) -> Self {
        self.is_dev = is_dev;
        self
    }

    /// Override the dev server base URL.
    pub fn with_dev_server_url(mut self, url: impl Into<String>) -> Self {
        self.dev_server_url = url.into();
        self
    }

    /// Override the static asset directories.
    pub fn with_asset_directories(mut self, directories: AssetDirectories) -> Self {
        self.asset_directories = directories;
        self
    }

    /// Strip surrounding slashes from URL segments so later joins never double them.
    pub(crate) fn normalised(mut self) -> Self {
        self.build_directory = self.build_directory.trim_matches('/').to_string();
        self.dev_server_url = self.dev_server_url.trim_end_matches('/').to_string();
        self.asset_directories.images = self.asset_directories.images.trim_matches('/').to_string();
        self.asset_directories.fonts = self.asset_directories.fonts.trim_matches('/').to_string();
        self
    }
}
