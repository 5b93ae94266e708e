use crate::analyze;
use crate::ast::Node;
use crate::checker::Checker;

/// Walks `node` depth-first, in document order.
pub fn node(node: &Node, checker: &mut Checker<'_>) {
    match node {
        Node::Rule { children, .. } => {
            for child in children {
                analyze::node::node(child, checker);
            }
        }
        Node::Property(declaration) => analyze::property::property(declaration, checker),
        Node::Unknown => {}
    }
}
