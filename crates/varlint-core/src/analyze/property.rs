use crate::ast::PropertyDeclaration;
use crate::checker::Checker;
use crate::lints::variable_for_property::variable_for_property::variable_for_property;

pub fn property(declaration: &PropertyDeclaration, checker: &mut Checker<'_>) {
    if checker.rule_options.variable_for_property.is_active() {
        let diagnostic = variable_for_property(declaration, checker);
        checker.report_diagnostic(diagnostic);
    }
}
