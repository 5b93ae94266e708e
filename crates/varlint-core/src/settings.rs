use crate::rule_options::ResolvedRuleOptions;

/// Resolved configuration settings used within varlint
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub linter: LinterSettings,
}

#[derive(Clone, Debug, Default)]
pub struct LinterSettings {
    pub rule_options: ResolvedRuleOptions,
}
