use rustc_hash::FxHashSet;

use super::resolve_with_extend;

/// Literal values that never need to be replaced by a variable.
pub const DEFAULT_IGNORED_VALUES: &[&str] = &["currentColor", "inherit", "initial", "transparent"];

/// TOML options for `[lint.variable-for-property]`.
///
/// `properties` lists the property names that must use variables. Use
/// `ignored-values` to fully replace the default list of acceptable literal
/// values, or `extend-ignored-values` to add to it. Specifying both is an
/// error.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct VariableForPropertyOptions {
    pub properties: Option<Vec<String>>,
    pub ignored_values: Option<Vec<String>>,
    pub extend_ignored_values: Option<Vec<String>>,
    pub ignore_important: Option<bool>,
}

/// Resolved options for the `variable_for_property` rule.
///
/// Built once per traversal and only read afterwards.
#[derive(Clone, Debug)]
pub struct ResolvedVariableForPropertyOptions {
    pub properties: FxHashSet<String>,
    pub ignored_values: FxHashSet<String>,
    /// Drop a trailing `!important` from list values before classifying them.
    pub ignore_important: bool,
}

impl ResolvedVariableForPropertyOptions {
    pub fn new<P, S>(properties: P, ignored_values: Option<Vec<String>>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ignored_values = match ignored_values {
            Some(values) if !values.is_empty() => values.into_iter().collect(),
            _ => DEFAULT_IGNORED_VALUES.iter().map(|s| (*s).to_string()).collect(),
        };

        Self {
            properties: properties.into_iter().map(Into::into).collect(),
            ignored_values,
            ignore_important: false,
        }
    }

    pub fn resolve(options: Option<&VariableForPropertyOptions>) -> anyhow::Result<Self> {
        let Some(opts) = options else {
            return Ok(Self::default());
        };

        let ignored_values = resolve_with_extend(
            opts.ignored_values.as_ref(),
            opts.extend_ignored_values.as_ref(),
            DEFAULT_IGNORED_VALUES,
            "variable-for-property",
            "ignored-values",
        )?;

        Ok(Self {
            properties: opts.properties.iter().flatten().cloned().collect(),
            ignored_values,
            ignore_important: opts.ignore_important.unwrap_or(false),
        })
    }

    /// Without any watched property there is nothing to check.
    pub fn is_active(&self) -> bool {
        !self.properties.is_empty()
    }

    pub fn watches(&self, property: &str) -> bool {
        self.properties.contains(property)
    }

    pub fn is_ignored_value(&self, value: &str) -> bool {
        self.ignored_values.contains(value)
    }
}

impl Default for ResolvedVariableForPropertyOptions {
    fn default() -> Self {
        Self::new(Vec::<String>::new(), None)
    }
}
