use crate::ast::{Expression, PropertyDeclaration};
use crate::checker::Checker;
use crate::diagnostic::*;
use crate::rule_options::variable_for_property::ResolvedVariableForPropertyOptions;

const IMPORTANT: &str = "!important";

pub struct VariableForProperty {
    pub property: String,
    pub literals: String,
}

/// ## What it does
///
/// Checks that the properties listed in the configuration get their value
/// from a variable rather than from a literal.
///
/// ## Why is this bad?
///
/// Colors, font sizes and the like are usually part of a design system.
/// Writing them as raw literals scatters magic values across stylesheets
/// that then drift apart from the variables meant to hold them.
///
/// A literal combined with a variable through `+` or `-` is still reported,
/// since it sneaks in an unreviewed offset. Scaling a variable with `*` or
/// `/` is allowed: only operations where both sides are literals are
/// reported.
///
/// Interpolations (`#{...}`) are never reported.
///
/// ## Configuration
///
/// The rule does nothing until some properties are listed in `varlint.toml`:
///
/// ```toml
/// [lint.variable-for-property]
/// properties = ["color", "font-size"]
///
/// # Replace the default acceptable values
/// # (`currentColor`, `inherit`, `initial`, `transparent`):
/// ignored-values = ["inherit", "none"]
///
/// # Or add to the defaults:
/// extend-ignored-values = ["none"]
///
/// # Do not report a trailing `!important`:
/// ignore-important = true
/// ```
///
/// ## Example
///
/// ```scss
/// p {
///   color: #f00;
///   font-size: $base-font-size + 2px;
/// }
/// ```
///
/// Use instead:
/// ```scss
/// p {
///   color: $red;
///   font-size: $base-font-size * 1.2;
/// }
/// ```
impl Violation for VariableForProperty {
    fn name(&self) -> String {
        "variable_for_property".to_string()
    }
    fn body(&self) -> String {
        format!(
            "Property {} should use a variable rather than '{}'",
            self.property, self.literals
        )
    }
}

/// Outcome of classifying a value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<'a> {
    Clean,
    /// The offending literals, in the order they appear in the tree.
    Offending(Vec<&'a str>),
}

impl<'a> Verdict<'a> {
    fn from_literals(literals: Vec<&'a str>) -> Self {
        if literals.is_empty() {
            Self::Clean
        } else {
            Self::Offending(literals)
        }
    }

    fn concat(verdicts: impl IntoIterator<Item = Verdict<'a>>) -> Self {
        Self::from_literals(verdicts.into_iter().flat_map(Verdict::into_literals).collect())
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }

    pub fn literals(&self) -> &[&'a str] {
        match self {
            Self::Clean => &[],
            Self::Offending(literals) => literals,
        }
    }

    pub fn into_literals(self) -> Vec<&'a str> {
        match self {
            Self::Clean => Vec::new(),
            Self::Offending(literals) => literals,
        }
    }
}

/// Finds the literals of `expression` that should have been variables.
pub fn classify<'a>(
    expression: &'a Expression,
    options: &ResolvedVariableForPropertyOptions,
) -> Verdict<'a> {
    match expression {
        Expression::Variable { .. } => Verdict::Clean,
        Expression::ListLiteral { elements } => {
            Verdict::concat(elements.iter().map(|element| classify(element, options)))
        }
        Expression::Literal { value } => {
            if options.is_ignored_value(value) {
                Verdict::Clean
            } else {
                Verdict::Offending(vec![value.as_str()])
            }
        }
        Expression::UnaryOperation { operand, .. } => classify(operand, options),
        Expression::FunctionCall { args, .. } => {
            Verdict::concat(args.iter().map(|arg| classify(arg, options)))
        }
        Expression::BinaryOperation { operator, left, right } => {
            let left = classify(left, options);
            let right = classify(right, options);
            // `$var * 100` is fine, `$var + 2px` is not.
            if operator.is_additive() || (!left.is_clean() && !right.is_clean()) {
                Verdict::concat([left, right])
            } else {
                Verdict::Clean
            }
        }
        Expression::Interpolation { .. } | Expression::Unknown => Verdict::Clean,
    }
}

pub fn variable_for_property(
    declaration: &PropertyDeclaration,
    checker: &Checker<'_>,
) -> Option<Diagnostic> {
    let options = &checker.rule_options.variable_for_property;
    if !options.watches(&declaration.name) {
        return None;
    }

    let mut elements = match &declaration.value {
        Expression::ListLiteral { elements } => elements.as_slice(),
        value => std::slice::from_ref(value),
    };
    if options.ignore_important
        && let Some((last, rest)) = elements.split_last()
        && last.as_literal() == Some(IMPORTANT)
    {
        elements = rest;
    }

    let invalid: Vec<&str> = elements
        .iter()
        .flat_map(|element| classify(element, options).into_literals())
        .collect();

    if invalid.is_empty() {
        return None;
    }

    Some(Diagnostic::new(
        VariableForProperty {
            property: declaration.name.clone(),
            literals: invalid.concat(),
        },
        checker.filename.clone(),
        declaration.location,
    ))
}
