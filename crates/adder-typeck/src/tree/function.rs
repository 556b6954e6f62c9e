//! Function definitions.

use adder_ast::{FunctionDef, Span};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::env::Environment;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::{pad, TypedNode};
use crate::ty::{ObjectTy, Ty, PARAMS_ATTR, RETURN_ATTR};

/// An annotated function definition.
///
/// The synthesized type is an object carrying the two reserved callable
/// attributes: `*params`, the parameter tuple, and `*return`, the type the
/// function produces when called.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TFunctionDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<TypedNode>,
    pub ty: Ty,
    pub span: Span,
}

impl TFunctionDef {
    /// Infer a function definition.
    ///
    /// The body runs in an independent scoped copy of the environment. A
    /// parameter named `self` is bound to the self-reference marker; every
    /// other parameter gets a fresh type variable, to be resolved by
    /// call-site or operator bindings. The declared return type is the
    /// first top-level `return` statement's type, or the none builtin.
    /// Only the function's name escapes to the outer environment; body
    /// locals are dropped with the scoped copy.
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &FunctionDef,
        env: Environment,
    ) -> (TFunctionDef, Substitution, Environment) {
        let mut scoped = env.scoped();

        let mut param_tys = Vec::with_capacity(node.params.len());
        let mut params = Vec::with_capacity(node.params.len());
        for param in &node.params {
            let ty = if param.name == "self" {
                Ty::SelfRef
            } else {
                Ty::Var(ck.vars.fresh())
            };
            scoped.bind(param.name.clone(), ty.clone());
            param_tys.push(ty);
            params.push(param.name.clone());
        }

        let mut body = Vec::with_capacity(node.body.len());
        let mut body_sub = Substitution::new();
        for stmt in &node.body {
            let (typed, sub, next) = TypedNode::traverse(ck, stmt, scoped);
            scoped = next;
            body_sub.merge(sub);
            body.push(typed);
        }

        let ret = body
            .iter()
            .find_map(|n| match n {
                TypedNode::Return(r) => Some(r.ty.clone()),
                _ => None,
            })
            .unwrap_or_else(Ty::none);

        // Bindings produced inside the body (e.g. a parameter used in
        // arithmetic) concretize the signature before it is published.
        let param_tys: Vec<Ty> = param_tys.iter().map(|t| body_sub.apply(t)).collect();
        let ret = body_sub.apply(&ret);

        let mut attrs = FxHashMap::default();
        attrs.insert(PARAMS_ATTR.to_string(), Ty::Tuple(param_tys));
        attrs.insert(RETURN_ATTR.to_string(), ret);
        let ty = Ty::Object(ObjectTy::new(attrs, None));

        let mut env = env;
        env.bind(node.name.clone(), ty.clone());

        let typed = TFunctionDef {
            name: node.name.clone(),
            params,
            body,
            ty,
            span: node.span,
        };
        (typed, Substitution::new(), env)
    }

    /// The declared type of the first parameter, read back from the
    /// synthesized `*params` tuple. Class traversal uses this to tell
    /// instance methods from class-level callables.
    pub fn first_param_ty(&self) -> Option<&Ty> {
        match &self.ty {
            Ty::Object(obj) => match obj.get_attr(PARAMS_ATTR) {
                Some(Ty::Tuple(params)) => params.first(),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Function Definition\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s.push_str(&format!("{}name: {}\n", pad(indent + 1), self.name));
        s.push_str(&format!(
            "{}params: {}\n",
            pad(indent + 1),
            self.params.join(", ")
        ));
        for stmt in &self.body {
            s.push_str(&stmt.format_tree(indent + 1));
        }
        s
    }
}
