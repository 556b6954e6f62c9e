//! Untyped syntax tree for Adder, a small dynamically-typed scripting
//! language in the Python family.
//!
//! This crate is the input contract of the type inferencer: a parser (out
//! of scope here) produces a [`Module`] of [`Node`]s, and `adder-typeck`
//! annotates every node with an inferred type. Nodes are plain owned data
//! with byte-offset spans; there is no CST layer and no interning.
//!
//! - [`span`]: byte-offset source spans
//! - [`node`]: the node kinds, literals, and operators

pub mod node;
pub mod span;

pub use node::{Assign, BinOp, BinOpKind, Call, ClassDef, Constant, ExprStmt, FunctionDef, Import,
    Literal, Module, Name, Node, Param, Pass, Return};
pub use span::Span;
