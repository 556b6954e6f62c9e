//! Statement wrappers: `return` and expression statements.

use adder_ast::{ExprStmt, Return, Span};
use serde::Serialize;

use crate::env::Environment;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::{pad, TypedNode};
use crate::ty::Ty;

/// An annotated `return` statement. A bare `return` types as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TReturn {
    pub value: Option<Box<TypedNode>>,
    pub ty: Ty,
    pub span: Span,
}

impl TReturn {
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &Return,
        env: Environment,
    ) -> (TReturn, Substitution, Environment) {
        let (value, sub, env) = match &node.value {
            Some(v) => {
                let (typed, sub, env) = TypedNode::traverse(ck, v, env);
                (Some(Box::new(typed)), sub, env)
            }
            None => (None, Substitution::new(), env),
        };
        let ty = value
            .as_ref()
            .map(|v| v.ty().clone())
            .unwrap_or_else(Ty::none);
        (TReturn { value, ty, span: node.span }, sub, env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Return\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        if let Some(value) = &self.value {
            s.push_str(&value.format_tree(indent + 1));
        }
        s
    }
}

/// An annotated expression statement: the expression's type, passed
/// through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TExprStmt {
    pub value: Box<TypedNode>,
    pub ty: Ty,
    pub span: Span,
}

impl TExprStmt {
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &ExprStmt,
        env: Environment,
    ) -> (TExprStmt, Substitution, Environment) {
        let (value, sub, env) = TypedNode::traverse(ck, &node.value, env);
        let ty = value.ty().clone();
        let typed = TExprStmt {
            value: Box::new(value),
            ty,
            span: node.span,
        };
        (typed, sub, env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Expression\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s.push_str(&self.value.format_tree(indent + 1));
        s
    }
}
