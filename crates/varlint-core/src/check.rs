use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyze;
use crate::ast::Stylesheet;
pub use crate::checker::Checker;
use crate::config::Config;
use crate::diagnostic::*;
use crate::fs::relativize_path;
use crate::rule_options::ResolvedRuleOptions;

/// Lint every file of `config` in parallel. Each file gets its own result so
/// that a file that cannot be read or parsed doesn't prevent reporting on the
/// others.
pub fn check(config: Config) -> Vec<(PathBuf, Result<Vec<Diagnostic>>)> {
    config
        .paths
        .par_iter()
        .map(|file| {
            let path = relativize_path(file);
            let res = check_path(&path, &config.rule_options);
            (path, res)
        })
        .collect()
}

pub fn check_path(path: &Path, rule_options: &ResolvedRuleOptions) -> Result<Vec<Diagnostic>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let stylesheet = Stylesheet::from_json(&contents)
        .with_context(|| format!("Failed to parse stylesheet tree: {}", path.display()))?;

    Ok(check_stylesheet(&stylesheet, path, rule_options))
}

/// Walk the whole stylesheet and run the rules on every property
/// declaration. Diagnostics come out in document order.
pub fn check_stylesheet(
    stylesheet: &Stylesheet,
    filename: &Path,
    rule_options: &ResolvedRuleOptions,
) -> Vec<Diagnostic> {
    if !rule_options.variable_for_property.is_active() {
        tracing::debug!(
            "No property to check in {}, skipping traversal",
            filename.display()
        );
        return vec![];
    }

    let mut checker = Checker::new(filename.to_path_buf(), rule_options);
    for node in &stylesheet.nodes {
        analyze::node::node(node, &mut checker);
    }

    tracing::debug!(
        "Found {} diagnostic(s) in {}",
        checker.diagnostics.len(),
        filename.display()
    );
    checker.diagnostics
}
