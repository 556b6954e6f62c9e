//! Binary arithmetic expressions.

use adder_ast::{BinOp, BinOpKind, Span};
use serde::Serialize;

use crate::builtins;
use crate::env::Environment;
use crate::error::TypeError;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::{pad, TypedNode};
use crate::ty::Ty;

/// An annotated binary expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TBinOp {
    pub op: BinOpKind,
    pub left: Box<TypedNode>,
    pub right: Box<TypedNode>,
    pub ty: Ty,
    pub span: Span,
}

impl TBinOp {
    /// Infer a binary expression against the arithmetic grid.
    ///
    /// Operand types are resolved through the substitutions produced so
    /// far. A variable operand meeting a builtin is bound to it -- the
    /// partial unification this engine materializes. An `Error` operand
    /// propagates unchanged (continue policy, never abort); a combination
    /// outside the grid yields `Error("Unsupported operands")`.
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &BinOp,
        env: Environment,
    ) -> (TBinOp, Substitution, Environment) {
        let (left, lsub, env) = TypedNode::traverse(ck, &node.left, env);
        let (right, rsub, env) = TypedNode::traverse(ck, &node.right, env);
        let mut sub = lsub;
        sub.merge(rsub);

        let lty = sub.apply(left.ty());
        let rty = sub.apply(right.ty());

        let ty = match (&lty, &rty) {
            (Ty::Error(_), _) => lty.clone(),
            (_, Ty::Error(_)) => rty.clone(),
            (Ty::Var(l), Ty::Var(r)) => {
                // Two unknowns: alias the left to the right and leave the
                // result open. The same variable on both sides (`a + a`)
                // must not be bound to itself; applying such a
                // substitution would never terminate.
                if l != r {
                    sub.bind(*l, Ty::Var(*r));
                }
                Ty::Var(*r)
            }
            (Ty::Var(v), Ty::Builtin(_)) => {
                sub.bind(*v, rty.clone());
                result_or_error(ck, node, &rty, &rty)
            }
            (Ty::Builtin(_), Ty::Var(v)) => {
                sub.bind(*v, lty.clone());
                result_or_error(ck, node, &lty, &lty)
            }
            _ => result_or_error(ck, node, &lty, &rty),
        };

        let typed = TBinOp {
            op: node.op,
            left: Box::new(left),
            right: Box::new(right),
            ty,
            span: node.span,
        };
        (typed, sub, env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Binary Op\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s.push_str(&format!("{}op: {}\n", pad(indent + 1), self.op));
        s.push_str(&self.left.format_tree(indent + 1));
        s.push_str(&self.right.format_tree(indent + 1));
        s
    }
}

/// Consult the grid; outside it, record the observation and synthesize
/// the error value.
fn result_or_error(ck: &mut Checker, node: &BinOp, lty: &Ty, rty: &Ty) -> Ty {
    match builtins::binop_result(node.op, lty, rty) {
        Some(ty) => ty,
        None => {
            ck.errors.push(TypeError::UnsupportedOperands {
                op: node.op,
                lhs: lty.clone(),
                rhs: rty.clone(),
                span: node.span,
            });
            Ty::Error("Unsupported operands".into())
        }
    }
}
