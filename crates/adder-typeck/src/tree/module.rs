//! The module root: the traversal driver's own node.

use adder_ast::{Module, Span};
use serde::Serialize;

use crate::env::Environment;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::{pad, TypedNode};
use crate::ty::{ObjectTy, Ty};

/// The annotated root of a source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TModule {
    pub body: Vec<TypedNode>,
    pub ty: Ty,
    pub span: Span,
}

impl TModule {
    /// Traverse a whole module: statements in source order, each seeing
    /// the environment its predecessors produced. Statement substitutions
    /// are merged in order (later bindings win) and the accumulated
    /// result is applied to the final environment, so call-site bindings
    /// resolve function signatures already published there.
    pub(crate) fn traverse(
        ck: &mut Checker,
        module: &Module,
        env: Environment,
    ) -> (TModule, Substitution, Environment) {
        let mut env = env;
        let mut sub = Substitution::new();
        let mut body = Vec::with_capacity(module.body.len());
        for stmt in &module.body {
            let (typed, stmt_sub, next) = TypedNode::traverse(ck, stmt, env);
            env = next;
            sub.merge(stmt_sub);
            body.push(typed);
        }
        env.apply(&sub);

        let span = module
            .body
            .iter()
            .map(|n| n.span())
            .reduce(Span::merge)
            .unwrap_or(Span::at(0));
        let typed = TModule {
            body,
            ty: Ty::Object(ObjectTy::empty()),
            span,
        };
        (typed, sub, env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Module\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        for stmt in &self.body {
            s.push_str(&stmt.format_tree(indent + 1));
        }
        s
    }
}
