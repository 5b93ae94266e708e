use std::path::PathBuf;

use crate::rule_options::ResolvedRuleOptions;
use crate::settings::Settings;

/// Everything needed to lint one group of files sharing the same settings.
#[derive(Clone, Debug)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub rule_options: ResolvedRuleOptions,
}

/// Without settings (no `varlint.toml` found), the default rule options
/// apply, which watch no property at all.
pub fn build_config(settings: Option<&Settings>, paths: Vec<PathBuf>) -> Config {
    let rule_options = settings
        .map(|settings| settings.linter.rule_options.clone())
        .unwrap_or_default();

    Config { paths, rule_options }
}
