//! Observations recorded while inferring.
//!
//! Inference never aborts: an unresolvable node gets an `Error` type value
//! and traversal continues. Each such failure point is additionally
//! recorded as a [`TypeError`] so callers can render diagnostics without
//! re-walking the annotated tree.

use std::fmt;

use adder_ast::{BinOpKind, Span};
use serde::Serialize;

use crate::ty::Ty;

/// A failure point observed during inference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeError {
    /// A name was referenced but never bound in any visible scope.
    UnboundName { name: String, span: Span },
    /// A binary operator was applied to operand types outside the
    /// arithmetic grid.
    UnsupportedOperands {
        op: BinOpKind,
        lhs: Ty,
        rhs: Ty,
        span: Span,
    },
    /// A call target is neither a builtin nor an object with a
    /// `*return` attribute.
    NotCallable { ty: Ty, span: Span },
}

impl TypeError {
    /// The span of the failing node.
    pub fn span(&self) -> Span {
        match self {
            TypeError::UnboundName { span, .. } => *span,
            TypeError::UnsupportedOperands { span, .. } => *span,
            TypeError::NotCallable { span, .. } => *span,
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UnboundName { name, .. } => {
                write!(f, "name `{name}` is not defined")
            }
            TypeError::UnsupportedOperands { op, lhs, rhs, .. } => {
                write!(f, "unsupported operands for `{op}`: {lhs} and {rhs}")
            }
            TypeError::NotCallable { ty, .. } => {
                write!(f, "type {ty} is not callable")
            }
        }
    }
}

impl std::error::Error for TypeError {}
