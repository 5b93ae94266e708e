use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use varlint_core::config::build_config;
use varlint_core::diagnostic::Diagnostic;
use varlint_core::discovery::{
    DiscoveredSettings, discover_settings, discover_stylesheet_paths, load_settings,
    resolve_settings,
};

use crate::args::CheckCommand;
use crate::output_format::{ConciseEmitter, Emitter, FullEmitter, JsonEmitter, OutputFormat};
use crate::status::ExitStatus;

pub fn check(args: CheckCommand) -> Result<ExitStatus> {
    // An explicit `--config` applies to every file, otherwise each file uses
    // its closest `varlint.toml`.
    let discovered: Vec<DiscoveredSettings> = match &args.config {
        Some(config_path) => vec![load_settings(config_path)?],
        None => discover_settings(args.files.as_slice())?,
    };

    let mut all_errors: Vec<(PathBuf, anyhow::Error)> = Vec::new();
    let mut paths = Vec::new();
    for result in discover_stylesheet_paths(args.files.as_slice()) {
        match result {
            Ok(path) => paths.push(path),
            Err(err) => all_errors.push((PathBuf::new(), err)),
        }
    }

    if paths.is_empty() && all_errors.is_empty() {
        println!(
            "{}: {}",
            "Warning".yellow().bold(),
            "No stylesheet trees found under the given path(s).".white().bold()
        );
        return Ok(ExitStatus::Success);
    }

    // Group paths by the directory of the settings that apply to them, so
    // each group is checked with one configuration.
    let mut groups: BTreeMap<Option<PathBuf>, Vec<PathBuf>> = BTreeMap::new();
    for path in paths {
        let key = if args.config.is_some() {
            discovered.first().map(|ds| ds.directory.clone())
        } else {
            resolve_settings(&path, &discovered).map(|ds| ds.directory.clone())
        };
        groups.entry(key).or_default().push(path);
    }

    let mut all_diagnostics: Vec<Diagnostic> = Vec::new();
    for (dir_key, group_paths) in groups {
        let settings = dir_key
            .as_deref()
            .and_then(|dir| discovered.iter().find(|ds| ds.directory == dir))
            .map(|ds| &ds.settings);
        if settings.is_none() {
            tracing::info!("No `varlint.toml` found for {} file(s)", group_paths.len());
        }

        let config = build_config(settings, group_paths);
        for (path, result) in varlint_core::check(config) {
            match result {
                Ok(diagnostics) => all_diagnostics.extend(diagnostics),
                Err(err) => all_errors.push((path, err)),
            }
        }
    }

    let mut all_diagnostics: Vec<&Diagnostic> = all_diagnostics.iter().collect();
    all_diagnostics.sort();
    all_errors.sort_by(|a, b| a.0.cmp(&b.0));

    let mut stdout = std::io::stdout();
    match args.output_format {
        OutputFormat::Full => FullEmitter.emit(&mut stdout, &all_diagnostics, &all_errors)?,
        OutputFormat::Concise => {
            ConciseEmitter.emit(&mut stdout, &all_diagnostics, &all_errors)?
        }
        OutputFormat::Json => JsonEmitter.emit(&mut stdout, &all_diagnostics, &all_errors)?,
    }

    if !all_errors.is_empty() {
        Ok(ExitStatus::Error)
    } else if !all_diagnostics.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
