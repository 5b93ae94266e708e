use anyhow::Context;
use ignore::WalkBuilder;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

use crate::fs::has_json_extension;
use crate::settings::Settings;
use crate::toml::{VARLINT_TOML, parse_varlint_toml};

#[derive(Debug)]
pub struct DiscoveredSettings {
    /// The directory containing the configuration file. It applies to every
    /// file below it that has no closer configuration.
    pub directory: PathBuf,
    pub settings: Settings,
    pub config_path: PathBuf,
}

/// For every path, find the closest `varlint.toml` in the path itself or in
/// one of its ancestors, as well as every `varlint.toml` below it when the
/// path is a directory. Each configuration file is loaded once.
pub fn discover_settings<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Vec<DiscoveredSettings>> {
    let mut config_paths: Vec<PathBuf> = Vec::new();

    for path in paths {
        let path = path.as_ref().absolutize()?;

        if let Some(directory) = path
            .ancestors()
            .find(|dir| dir.join(VARLINT_TOML).is_file())
        {
            config_paths.push(directory.join(VARLINT_TOML));
        }

        if path.is_dir() {
            for entry in WalkBuilder::new(&*path).build().flatten() {
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                if is_file && entry.file_name() == VARLINT_TOML {
                    config_paths.push(entry.into_path());
                }
            }
        }
    }

    let mut discovered: Vec<DiscoveredSettings> = Vec::new();
    for config_path in config_paths {
        if discovered.iter().any(|ds| ds.config_path == config_path) {
            continue;
        }
        tracing::debug!("Loading configuration from {}", config_path.display());
        discovered.push(load_settings(&config_path)?);
    }

    Ok(discovered)
}

/// Load a single configuration file, e.g. one passed explicitly by the user.
pub fn load_settings(config_path: &Path) -> anyhow::Result<DiscoveredSettings> {
    let config_path = config_path.absolutize()?.to_path_buf();
    let settings = parse_varlint_toml(&config_path)?
        .into_settings()
        .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
    let directory = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    Ok(DiscoveredSettings { directory, settings, config_path })
}

/// The settings whose directory is the closest ancestor of `path`.
pub fn resolve_settings<'a>(
    path: &Path,
    discovered: &'a [DiscoveredSettings],
) -> Option<&'a DiscoveredSettings> {
    let path = path.absolutize().ok()?;
    discovered
        .iter()
        .filter(|ds| path.starts_with(&ds.directory))
        .max_by_key(|ds| ds.directory.components().count())
}

/// Collect the stylesheet trees to lint. Directories are walked recursively
/// (respecting ignore files) for `*.json` files, while files passed
/// explicitly are always kept.
pub fn discover_stylesheet_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<anyhow::Result<PathBuf>> {
    let mut results = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_file() {
            results.push(Ok(path.to_path_buf()));
            continue;
        }
        if !path.exists() {
            results.push(Err(anyhow::anyhow!("No such file or directory: {}", path.display())));
            continue;
        }

        for entry in WalkBuilder::new(path).build() {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                    if is_file && has_json_extension(entry.path()) {
                        results.push(Ok(entry.into_path()));
                    }
                }
                Err(err) => results.push(Err(err.into())),
            }
        }
    }

    results
}
