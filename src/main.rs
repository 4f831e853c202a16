//! vite-assets - inspect how a Vite build manifest resolves template asset references
//!
//! Usage: vite-assets [OPTIONS] <COMMAND>
//!
//! Commands:
//!   asset     URL of an entry's output file
//!   css       Stylesheet tags for an entry
//!   js        Script tags for an entry and its imported chunks
//!   image     URL of an image
//!   font      URL of a font
//!   manifest  Dump the loaded manifest

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use vite_manifest::{
    DEFAULT_IMAGE_RESOURCE_PATH, Manifest, ManifestResolver, ResolverConfig,
};

/// Resolve template asset references against a Vite build
#[derive(Parser, Debug)]
#[command(name = "vite-assets")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON resolver configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory served as the web root
    #[arg(long)]
    public_root: Option<PathBuf>,

    /// Build output directory below the public root
    #[arg(long)]
    build_dir: Option<String>,

    /// Resolve against the dev server instead of the manifest
    #[arg(long)]
    dev: bool,

    /// Dev server base URL
    #[arg(long)]
    dev_server_url: Option<String>,

    /// Static images directory below the public root
    #[arg(long)]
    images_dir: Option<String>,

    /// Static fonts directory below the public root
    #[arg(long)]
    fonts_dir: Option<String>,

    /// Log manifest discovery details
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// URL of an entry's output file
    Asset {
        /// Manifest entry key, e.g. resources/js/app.js
        entry: String,
    },

    /// Stylesheet tags for an entry
    Css {
        /// Manifest entry key or short entry name
        entry: String,
    },

    /// Script tags for an entry and its imported chunks
    Js {
        /// Manifest entry key or short entry name
        entry: String,
    },

    /// URL of an image
    Image {
        /// Image file name
        path: String,

        /// Source directory the image was bundled from
        #[arg(long, default_value = DEFAULT_IMAGE_RESOURCE_PATH)]
        resource_path: String,

        /// Image to fall back to when the requested one is missing
        #[arg(long)]
        placeholder: Option<String>,
    },

    /// URL of a font
    Font {
        /// Font file name
        path: String,
    },

    /// Dump the loaded manifest
    Manifest,
}

#[derive(Serialize)]
struct ManifestDump<'a> {
    path: Option<&'a Path>,
    entries: &'a Manifest,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let resolver = ManifestResolver::new(resolve_config(&cli, Path::new("."))?);

    let output = match cli.command {
        Commands::Asset { entry } => resolver.asset(&entry),
        Commands::Css { entry } => resolver.entry_link_tags(&entry),
        Commands::Js { entry } => resolver.entry_script_tags(&entry),
        Commands::Image {
            path,
            resource_path,
            placeholder,
        } => match resolver.image(&path, &resource_path, placeholder.as_deref()) {
            Some(url) => url,
            None => {
                eprintln!(
                    "image '{path}' not found under {resource_path} or the static images directory"
                );
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Font { path } => resolver.font(&path),
        Commands::Manifest => serde_json::to_string_pretty(&ManifestDump {
            path: resolver.manifest_path(),
            entries: resolver.manifest(),
        })
        .context("failed to serialise manifest")?,
    };

    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

/// Build the resolver configuration from `--config`, or `vite.config.json` in `working_dir`,
/// with command line flags applied on top.
fn resolve_config(cli: &Cli, working_dir: &Path) -> Result<ResolverConfig> {
    let mut config = match &cli.config {
        Some(path) => ResolverConfig::from_path(path)
            .with_context(|| format!("failed to load resolver configuration {}", path.display()))?,
        None => ResolverConfig::discover(working_dir),
    };

    if let Some(public_root) = &cli.public_root {
        config.public_root = public_root.clone();
    }
    if let Some(build_dir) = &cli.build_dir {
        config.build_directory = build_dir.clone();
    }
    if cli.dev {
        config.is_dev = true;
    }
    if let Some(url) = &cli.dev_server_url {
        config.dev_server_url = url.clone();
    }

    if let Some(images) = &cli.images_dir {
        config.asset_directories.images = images.clone();
    }
    if let Some(fonts) = &cli.fonts_dir {
        config.asset_directories.fonts = fonts.clone();
    }

    Ok(config)
}
