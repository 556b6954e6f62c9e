//! Name references.

use adder_ast::{Name, Span};
use serde::Serialize;

use crate::env::Environment;
use crate::error::TypeError;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::pad;
use crate::ty::Ty;

/// An annotated identifier reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TName {
    pub id: String,
    pub ty: Ty,
    pub span: Span,
}

impl TName {
    /// Infer a name reference.
    ///
    /// A bound name takes the bound type. An unbound name takes
    /// `Error("Undefined")`, and that error is registered back into the
    /// environment under the name: every later reference in the scope
    /// resolves to the same memoized failure instead of being diagnosed
    /// again. The error is a value; nothing is thrown.
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &Name,
        mut env: Environment,
    ) -> (TName, Substitution, Environment) {
        let ty = match env.lookup(&node.id) {
            Some(ty) => ty.clone(),
            None => {
                let err = Ty::undefined();
                env.bind(node.id.clone(), err.clone());
                ck.errors.push(TypeError::UnboundName {
                    name: node.id.clone(),
                    span: node.span,
                });
                err
            }
        };
        let typed = TName {
            id: node.id.clone(),
            ty,
            span: node.span,
        };
        (typed, Substitution::new(), env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Name\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s.push_str(&format!("{}id: {}\n", pad(indent + 1), self.id));
        s
    }
}
