//! Assignments.

use adder_ast::{Assign, Span};
use serde::Serialize;

use crate::env::Environment;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::{pad, TypedNode};
use crate::ty::Ty;

/// An annotated assignment: `x = value`, or chained `x = y = value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TAssign {
    pub targets: Vec<String>,
    pub value: Box<TypedNode>,
    pub ty: Ty,
    pub span: Span,
}

impl TAssign {
    /// Infer an assignment: infer the value, then bind every target name
    /// to the value's type. The node's own type is the value's type, so a
    /// chained assignment reads uniformly.
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &Assign,
        env: Environment,
    ) -> (TAssign, Substitution, Environment) {
        let (value, sub, mut env) = TypedNode::traverse(ck, &node.value, env);
        let ty = value.ty().clone();
        let mut targets = Vec::with_capacity(node.targets.len());
        for target in &node.targets {
            env.bind(target.id.clone(), ty.clone());
            targets.push(target.id.clone());
        }
        let typed = TAssign {
            targets,
            value: Box::new(value),
            ty,
            span: node.span,
        };
        (typed, sub, env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Assignment\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s.push_str(&format!(
            "{}targets: {}\n",
            pad(indent + 1),
            self.targets.join(", ")
        ));
        s.push_str(&self.value.format_tree(indent + 1));
        s
    }
}
