use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::rule_options::ResolvedRuleOptions;
use crate::rule_options::variable_for_property::VariableForPropertyOptions;
use crate::settings::{LinterSettings, Settings};

pub const VARLINT_TOML: &str = "varlint.toml";

pub fn parse_varlint_toml(path: &Path) -> Result<TomlOptions, ParseTomlError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ParseTomlError::Read(path.to_path_buf(), err))?;
    parse_toml_str(&contents).map_err(|err| ParseTomlError::Deserialize(path.to_path_buf(), err))
}

pub fn parse_toml_str(contents: &str) -> Result<TomlOptions, toml::de::Error> {
    toml::from_str(contents)
}

#[derive(Debug, thiserror::Error)]
pub enum ParseTomlError {
    #[error("Failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, io::Error),
    #[error("Failed to parse {}: {}", .0.display(), .1)]
    Deserialize(PathBuf, toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    pub lint: Option<LinterTomlOptions>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LinterTomlOptions {
    pub variable_for_property: Option<VariableForPropertyOptions>,
}

impl TomlOptions {
    pub fn into_settings(self) -> anyhow::Result<Settings> {
        let linter = self.lint.unwrap_or_default();

        let rule_options = ResolvedRuleOptions::resolve(linter.variable_for_property.as_ref())?;

        Ok(Settings { linter: LinterSettings { rule_options } })
    }
}
