use std::path::PathBuf;

use crate::diagnostic::Diagnostic;
use crate::rule_options::ResolvedRuleOptions;

#[derive(Debug)]
// The object that collects diagnostics while walking a stylesheet. One per
// analyzed file.
pub struct Checker<'a> {
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
    // The file being checked, attached to every diagnostic.
    pub filename: PathBuf,
    // Per-rule options resolved from configuration
    pub rule_options: &'a ResolvedRuleOptions,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(filename: PathBuf, rule_options: &'a ResolvedRuleOptions) -> Self {
        Self { diagnostics: vec![], filename, rule_options }
    }

    // This takes an Option<Diagnostic> because each lint rule reports a
    // Some(Diagnostic) or None.
    pub(crate) fn report_diagnostic(&mut self, diagnostic: Option<Diagnostic>) {
        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }
    }
}
