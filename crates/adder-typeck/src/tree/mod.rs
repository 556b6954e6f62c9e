//! The annotated tree: one typed wrapper per untyped node.
//!
//! Every construct with a dedicated inference rule has its own variant
//! module; everything else falls through to [`generic::TGeneric`], which
//! is the identity rule -- inference degrades gracefully on unrecognized
//! syntax instead of failing the pass.
//!
//! All variants honor the same traversal protocol:
//! `traverse(ck, node, env) -> (typed node, substitution, environment)`.
//! The returned environment reflects every binding the node or its
//! children introduced, merged in child order. The returned substitution
//! carries the variable bindings produced while inferring the subtree,
//! except for class definitions, which return an empty substitution by
//! rule (structural synthesis, no unification).

pub mod assign;
pub mod binop;
pub mod call;
pub mod classdef;
pub mod constant;
pub mod function;
pub mod generic;
pub mod module;
pub mod name;
pub mod stmt;

use adder_ast::{Node, Span};
use serde::Serialize;

use crate::env::Environment;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::ty::Ty;

pub use assign::TAssign;
pub use binop::TBinOp;
pub use call::TCall;
pub use classdef::TClassDef;
pub use constant::TConstant;
pub use function::TFunctionDef;
pub use generic::TGeneric;
pub use module::TModule;
pub use name::TName;
pub use stmt::{TExprStmt, TReturn};

/// An annotated node: the data of one untyped node plus its inferred type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypedNode {
    Module(TModule),
    Name(TName),
    Constant(TConstant),
    Assign(TAssign),
    BinOp(TBinOp),
    Call(TCall),
    Return(TReturn),
    ExprStmt(TExprStmt),
    FunctionDef(TFunctionDef),
    ClassDef(TClassDef),
    Generic(TGeneric),
}

impl TypedNode {
    /// Dispatch an untyped node to its inference rule.
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &Node,
        env: Environment,
    ) -> (TypedNode, Substitution, Environment) {
        match node {
            Node::Name(n) => {
                let (t, sub, env) = TName::traverse(ck, n, env);
                (TypedNode::Name(t), sub, env)
            }
            Node::Constant(n) => {
                let (t, sub, env) = TConstant::traverse(ck, n, env);
                (TypedNode::Constant(t), sub, env)
            }
            Node::Assign(n) => {
                let (t, sub, env) = TAssign::traverse(ck, n, env);
                (TypedNode::Assign(t), sub, env)
            }
            Node::BinOp(n) => {
                let (t, sub, env) = TBinOp::traverse(ck, n, env);
                (TypedNode::BinOp(t), sub, env)
            }
            Node::Call(n) => {
                let (t, sub, env) = TCall::traverse(ck, n, env);
                (TypedNode::Call(t), sub, env)
            }
            Node::Return(n) => {
                let (t, sub, env) = TReturn::traverse(ck, n, env);
                (TypedNode::Return(t), sub, env)
            }
            Node::ExprStmt(n) => {
                let (t, sub, env) = TExprStmt::traverse(ck, n, env);
                (TypedNode::ExprStmt(t), sub, env)
            }
            Node::FunctionDef(n) => {
                let (t, sub, env) = TFunctionDef::traverse(ck, n, env);
                (TypedNode::FunctionDef(t), sub, env)
            }
            Node::ClassDef(n) => {
                let (t, sub, env) = TClassDef::traverse(ck, n, env);
                (TypedNode::ClassDef(t), sub, env)
            }
            // No dedicated rule: identity fallback.
            Node::Pass(_) | Node::Import(_) => {
                let (t, sub, env) = TGeneric::traverse(ck, node, env);
                (TypedNode::Generic(t), sub, env)
            }
        }
    }

    /// The inferred type of this node.
    pub fn ty(&self) -> &Ty {
        match self {
            TypedNode::Module(n) => &n.ty,
            TypedNode::Name(n) => &n.ty,
            TypedNode::Constant(n) => &n.ty,
            TypedNode::Assign(n) => &n.ty,
            TypedNode::BinOp(n) => &n.ty,
            TypedNode::Call(n) => &n.ty,
            TypedNode::Return(n) => &n.ty,
            TypedNode::ExprStmt(n) => &n.ty,
            TypedNode::FunctionDef(n) => &n.ty,
            TypedNode::ClassDef(n) => &n.ty,
            TypedNode::Generic(n) => &n.ty,
        }
    }

    /// The display tag of this node.
    pub fn label(&self) -> &'static str {
        match self {
            TypedNode::Module(_) => "Module",
            TypedNode::Name(_) => "Name",
            TypedNode::Constant(_) => "Constant",
            TypedNode::Assign(_) => "Assignment",
            TypedNode::BinOp(_) => "Binary Op",
            TypedNode::Call(_) => "Call",
            TypedNode::Return(_) => "Return",
            TypedNode::ExprStmt(_) => "Expression",
            TypedNode::FunctionDef(_) => "Function Definition",
            TypedNode::ClassDef(_) => "Class Definition",
            TypedNode::Generic(n) => n.label,
        }
    }

    /// The source span this node covers.
    pub fn span(&self) -> Span {
        match self {
            TypedNode::Module(n) => n.span,
            TypedNode::Name(n) => n.span,
            TypedNode::Constant(n) => n.span,
            TypedNode::Assign(n) => n.span,
            TypedNode::BinOp(n) => n.span,
            TypedNode::Call(n) => n.span,
            TypedNode::Return(n) => n.span,
            TypedNode::ExprStmt(n) => n.span,
            TypedNode::FunctionDef(n) => n.span,
            TypedNode::ClassDef(n) => n.span,
            TypedNode::Generic(n) => n.span,
        }
    }

    /// Human-readable dump of the annotated subtree: the node label, its
    /// type, per-variant details, then children one indent deeper.
    pub fn format_tree(&self, indent: usize) -> String {
        match self {
            TypedNode::Module(n) => n.format_tree(indent),
            TypedNode::Name(n) => n.format_tree(indent),
            TypedNode::Constant(n) => n.format_tree(indent),
            TypedNode::Assign(n) => n.format_tree(indent),
            TypedNode::BinOp(n) => n.format_tree(indent),
            TypedNode::Call(n) => n.format_tree(indent),
            TypedNode::Return(n) => n.format_tree(indent),
            TypedNode::ExprStmt(n) => n.format_tree(indent),
            TypedNode::FunctionDef(n) => n.format_tree(indent),
            TypedNode::ClassDef(n) => n.format_tree(indent),
            TypedNode::Generic(n) => n.format_tree(indent),
        }
    }
}

/// Two spaces per indent level, shared by every printer.
pub(crate) fn pad(indent: usize) -> String {
    "  ".repeat(indent)
}
