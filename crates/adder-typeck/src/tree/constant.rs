//! Literal constants.

use adder_ast::{Constant, Literal, Span};
use serde::Serialize;

use crate::env::Environment;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::pad;
use crate::ty::Ty;

/// An annotated literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TConstant {
    pub value: Literal,
    pub ty: Ty,
    pub span: Span,
}

impl TConstant {
    /// Infer a literal: look its builtin type name up in the environment
    /// (the prelude binds all of them). A missing prelude entry falls back
    /// to the canonical builtin, so a constant never infers to `Error`.
    pub(crate) fn traverse(
        _ck: &mut Checker,
        node: &Constant,
        env: Environment,
    ) -> (TConstant, Substitution, Environment) {
        let ty = env
            .lookup(node.value.type_name())
            .cloned()
            .unwrap_or_else(|| canonical(&node.value));
        let typed = TConstant {
            value: node.value.clone(),
            ty,
            span: node.span,
        };
        (typed, Substitution::new(), env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Constant\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s.push_str(&format!("{}value: {}\n", pad(indent + 1), self.value));
        s
    }
}

/// The builtin type a literal belongs to, independent of the environment.
fn canonical(value: &Literal) -> Ty {
    match value {
        Literal::Int(_) => Ty::int(),
        Literal::Float(_) => Ty::float(),
        Literal::Str(_) => Ty::string(),
        Literal::Bool(_) => Ty::bool(),
        Literal::None => Ty::none(),
    }
}
