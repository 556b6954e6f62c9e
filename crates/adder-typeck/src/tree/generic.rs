//! The fallback rule for constructs with no dedicated inference.

use adder_ast::{Node, Span};
use serde::Serialize;

use crate::env::Environment;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::pad;
use crate::ty::{ObjectTy, Ty};

/// A node the inferencer has no rule for, passed through unchanged: the
/// original label, an empty object type, an empty substitution, and the
/// environment untouched. Guarantees the pass terminates on any input
/// the contract allows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TGeneric {
    pub label: &'static str,
    pub ty: Ty,
    pub span: Span,
}

impl TGeneric {
    pub(crate) fn traverse(
        _ck: &mut Checker,
        node: &Node,
        env: Environment,
    ) -> (TGeneric, Substitution, Environment) {
        let typed = TGeneric {
            label: node.label(),
            ty: Ty::Object(ObjectTy::empty()),
            span: node.span(),
        };
        (typed, Substitution::new(), env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}{}\n", pad(indent), self.label);
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s
    }
}
