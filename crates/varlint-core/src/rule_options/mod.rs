pub mod variable_for_property;

use rustc_hash::FxHashSet;
use variable_for_property::ResolvedVariableForPropertyOptions;
use variable_for_property::VariableForPropertyOptions;

/// Resolve a pair of `field` / `extend-field` options against a set of defaults.
///
/// - If both are `Some`, returns an error.
/// - If `base` is `Some` and non-empty, uses it as the full replacement.
/// - If `extend` is `Some`, merges it with the defaults.
/// - Otherwise, returns the defaults.
///
/// `rule_section` and `field_name` are used for the error message, e.g.
/// `"variable-for-property"` and `"ignored-values"`.
pub fn resolve_with_extend(
    base: Option<&Vec<String>>,
    extend: Option<&Vec<String>>,
    defaults: &[&str],
    rule_section: &str,
    field_name: &str,
) -> anyhow::Result<FxHashSet<String>> {
    if base.is_some() && extend.is_some() {
        return Err(anyhow::anyhow!(
            "Cannot specify both `{field_name}` and `extend-{field_name}` \
             in `[lint.{rule_section}]`."
        ));
    }

    let default_set: FxHashSet<String> = defaults.iter().map(|s| (*s).to_string()).collect();

    match (base, extend) {
        (Some(values), _) if !values.is_empty() => Ok(values.iter().cloned().collect()),
        (_, Some(values)) => {
            let mut set = default_set;
            set.extend(values.iter().cloned());
            Ok(set)
        }
        _ => Ok(default_set),
    }
}

/// Resolved per-rule options, ready for use during linting.
///
/// To add options for a new rule:
/// 1. Create `rule_options/<rule_name>.rs` with the TOML and resolved types.
/// 2. Add a field to `ResolvedRuleOptions` and a resolve line in `resolve()`.
/// 3. Add the TOML field to `LinterTomlOptions` in `toml.rs` and pass it to
///    `resolve()` in `into_settings()`.
#[derive(Clone, Debug, Default)]
pub struct ResolvedRuleOptions {
    pub variable_for_property: ResolvedVariableForPropertyOptions,
}

impl ResolvedRuleOptions {
    pub fn resolve(
        variable_for_property: Option<&VariableForPropertyOptions>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            variable_for_property: ResolvedVariableForPropertyOptions::resolve(
                variable_for_property,
            )?,
        })
    }
}
