//! The stylesheet tree consumed by the linter.
//!
//! varlint does not parse stylesheet source itself: an external parser hands
//! over the tree below, serialized as JSON where every node carries a `type`
//! tag. Node kinds that this crate does not know about deserialize to an
//! `Unknown` variant and are skipped rather than rejected.

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// One node of a property's value expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    /// A reference to a named variable, e.g. `$base`.
    Variable { name: String },
    /// A comma- or space-separated sequence of values.
    ListLiteral { elements: Vec<Expression> },
    /// A value written directly in source: number, color, string, keyword.
    Literal { value: String },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    FunctionCall {
        name: String,
        #[serde(default)]
        args: Vec<Expression>,
    },
    BinaryOperation {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `#{...}`. Its content cannot be classified statically.
    Interpolation { expression: Box<Expression> },
    #[serde(other)]
    Unknown,
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal { value: value.into() }
    }

    pub fn list(elements: impl IntoIterator<Item = Expression>) -> Self {
        Self::ListLiteral { elements: elements.into_iter().collect() }
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Self::UnaryOperation { operator, operand: Box::new(operand) }
    }

    pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Expression>) -> Self {
        Self::FunctionCall {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self::BinaryOperation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn interpolation(expression: Expression) -> Self {
        Self::Interpolation { expression: Box::new(expression) }
    }

    /// The literal's text, if this is a `Literal`.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal { value } => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Plus,
    Minus,
    Times,
    Div,
    Mod,
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    And,
    Or,
    SingleEq,
    /// Any operator this crate does not know about. Never additive.
    #[serde(other)]
    Other,
}

impl BinaryOperator {
    /// `+` and `-`.
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOperator {
    Plus,
    Minus,
    Div,
    Not,
    #[serde(other)]
    Other,
}

/// A `name: value` declaration inside a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    pub name: String,
    pub value: Expression,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Rule {
        selector: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    Property(PropertyDeclaration),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }
}
