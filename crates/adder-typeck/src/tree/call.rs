//! Call expressions.

use adder_ast::{Call, Span};
use serde::Serialize;

use crate::env::Environment;
use crate::error::TypeError;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::{pad, TypedNode};
use crate::ty::{Ty, PARAMS_ATTR, RETURN_ATTR};

/// An annotated call expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TCall {
    pub func: Box<TypedNode>,
    pub args: Vec<TypedNode>,
    pub ty: Ty,
    pub span: Span,
}

impl TCall {
    /// Infer a call.
    ///
    /// - A builtin callee types as a constructor-style call: the result is
    ///   the builtin itself (`int(x)` is int, `print(...)` is `None`).
    /// - An object callee with a `*return` attribute is a function or
    ///   class: its `*params` tuple is zipped against the argument types,
    ///   binding parameter variables to arguments, and the result is
    ///   `*return` resolved through those bindings.
    /// - An `Error` callee propagates unchanged; anything else yields
    ///   `Error("Not callable")`.
    ///
    /// Arity is not checked; extra arguments and unbound parameters are
    /// simply left out of the zip.
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &Call,
        env: Environment,
    ) -> (TCall, Substitution, Environment) {
        let (func, fsub, env) = TypedNode::traverse(ck, &node.func, env);
        let mut sub = fsub;
        let mut env = env;
        let mut args = Vec::with_capacity(node.args.len());
        for arg in &node.args {
            let (typed, asub, next) = TypedNode::traverse(ck, arg, env);
            sub.merge(asub);
            env = next;
            args.push(typed);
        }

        let fty = sub.apply(func.ty());
        let ty = match &fty {
            Ty::Error(_) => fty.clone(),
            Ty::Builtin(_) => fty.clone(),
            Ty::Object(obj) => match obj.get_attr(RETURN_ATTR) {
                Some(ret) => {
                    let ret = ret.clone();
                    if let Some(Ty::Tuple(params)) = obj.get_attr(PARAMS_ATTR) {
                        let bindings: Vec<_> = params
                            .iter()
                            .zip(args.iter())
                            .filter_map(|(param, arg)| match param {
                                Ty::Var(v) => {
                                    // A variable must not be bound to a
                                    // type mentioning itself (a function
                                    // passed to itself); applying such a
                                    // substitution would never terminate.
                                    let arg_ty = sub.apply(arg.ty());
                                    if arg_ty.mentions(*v) {
                                        None
                                    } else {
                                        Some((*v, arg_ty))
                                    }
                                }
                                _ => None,
                            })
                            .collect();
                        for (var, arg_ty) in bindings {
                            sub.bind(var, arg_ty);
                        }
                    }
                    sub.apply(&ret)
                }
                None => not_callable(ck, &fty, node.span),
            },
            _ => not_callable(ck, &fty, node.span),
        };

        let typed = TCall {
            func: Box::new(func),
            args,
            ty,
            span: node.span,
        };
        (typed, sub, env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Call\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s.push_str(&self.func.format_tree(indent + 1));
        for arg in &self.args {
            s.push_str(&arg.format_tree(indent + 1));
        }
        s
    }
}

fn not_callable(ck: &mut Checker, ty: &Ty, span: Span) -> Ty {
    ck.errors.push(TypeError::NotCallable {
        ty: ty.clone(),
        span,
    });
    Ty::Error("Not callable".into())
}
