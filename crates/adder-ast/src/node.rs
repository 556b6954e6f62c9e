//! Node kinds of the untyped Adder tree.
//!
//! Covers: Module, Name, Constant, Assign, BinOp, Call, Return, ExprStmt,
//! FunctionDef, ClassDef, Pass, Import. The enum is closed: constructs the
//! inferencer has no rule for (`Pass`, `Import`) still appear here so the
//! traversal's generic fallback has something real to fall back on.

use std::fmt;

use serde::Serialize;

use crate::span::Span;

// ── Module ───────────────────────────────────────────────────────────────

/// The root of a parsed source file: a sequence of statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    pub body: Vec<Node>,
}

impl Module {
    pub fn new(body: Vec<Node>) -> Self {
        Module { body }
    }
}

// ── Node enum ────────────────────────────────────────────────────────────

/// Any statement or expression in an Adder source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Name(Name),
    Constant(Constant),
    Assign(Assign),
    BinOp(BinOp),
    Call(Call),
    Return(Return),
    ExprStmt(ExprStmt),
    FunctionDef(FunctionDef),
    ClassDef(ClassDef),
    Pass(Pass),
    Import(Import),
}

impl Node {
    /// Human-readable tag for this node kind, used by the tree printer.
    pub fn label(&self) -> &'static str {
        match self {
            Node::Name(_) => "Name",
            Node::Constant(_) => "Constant",
            Node::Assign(_) => "Assignment",
            Node::BinOp(_) => "Binary Op",
            Node::Call(_) => "Call",
            Node::Return(_) => "Return",
            Node::ExprStmt(_) => "Expression",
            Node::FunctionDef(_) => "Function Definition",
            Node::ClassDef(_) => "Class Definition",
            Node::Pass(_) => "Pass",
            Node::Import(_) => "Import",
        }
    }

    /// The source span this node covers.
    pub fn span(&self) -> Span {
        match self {
            Node::Name(n) => n.span,
            Node::Constant(n) => n.span,
            Node::Assign(n) => n.span,
            Node::BinOp(n) => n.span,
            Node::Call(n) => n.span,
            Node::Return(n) => n.span,
            Node::ExprStmt(n) => n.span,
            Node::FunctionDef(n) => n.span,
            Node::ClassDef(n) => n.span,
            Node::Pass(n) => n.span,
            Node::Import(n) => n.span,
        }
    }
}

// ── Expressions ──────────────────────────────────────────────────────────

/// An identifier reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Name {
    pub id: String,
    pub span: Span,
}

impl Name {
    pub fn new(id: impl Into<String>, span: Span) -> Self {
        Name { id: id.into(), span }
    }
}

/// A literal constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constant {
    pub value: Literal,
    pub span: Span,
}

/// The value of a literal constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    None,
}

impl Literal {
    /// The builtin type name this literal belongs to.
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "int",
            Literal::Float(_) => "float",
            Literal::Str(_) => "str",
            Literal::Bool(_) => "bool",
            Literal::None => "None",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{v}"),
            Literal::Float(v) => write!(f, "{v}"),
            Literal::Str(v) => write!(f, "{v:?}"),
            Literal::Bool(true) => write!(f, "True"),
            Literal::Bool(false) => write!(f, "False"),
            Literal::None => write!(f, "None"),
        }
    }
}

/// A binary arithmetic expression: `left op right`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinOp {
    pub left: Box<Node>,
    pub op: BinOpKind,
    pub right: Box<Node>,
    pub span: Span,
}

/// Binary operators the inferencer knows a result rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::FloorDiv => "//",
            BinOpKind::Mod => "%",
        };
        write!(f, "{s}")
    }
}

/// A call expression: `func(args...)`. Positional arguments only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
    pub func: Box<Node>,
    pub args: Vec<Node>,
    pub span: Span,
}

// ── Statements ───────────────────────────────────────────────────────────

/// An assignment: one or more simple name targets bound to one value,
/// as in `x = y = 1`. Destructuring targets are not part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    pub targets: Vec<Name>,
    pub value: Box<Node>,
    pub span: Span,
}

/// A `return` statement, with or without a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Return {
    pub value: Option<Box<Node>>,
    pub span: Span,
}

/// An expression in statement position, e.g. a bare call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExprStmt {
    pub value: Box<Node>,
    pub span: Span,
}

/// A function definition with positional parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Node>,
    pub span: Span,
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    pub span: Span,
}

impl Param {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Param { name: name.into(), span }
    }
}

/// A class definition. Base classes are carried by name only; merging
/// superclass attributes is not implemented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDef {
    pub name: String,
    pub bases: Vec<String>,
    pub body: Vec<Node>,
    pub span: Span,
}

/// The `pass` statement. No inference rule; exercises the fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pass {
    pub span: Span,
}

/// An `import` statement. No inference rule; exercises the fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    pub module: String,
    pub span: Span,
}

// ── Construction helpers ─────────────────────────────────────────────────
//
// The engine consumes trees from an external parser; these constructors
// exist so tests and examples can build trees without a parser.

impl Node {
    pub fn name(id: impl Into<String>, span: Span) -> Node {
        Node::Name(Name::new(id, span))
    }

    pub fn constant(value: Literal, span: Span) -> Node {
        Node::Constant(Constant { value, span })
    }

    pub fn assign(targets: Vec<Name>, value: Node, span: Span) -> Node {
        Node::Assign(Assign { targets, value: Box::new(value), span })
    }

    pub fn binop(left: Node, op: BinOpKind, right: Node, span: Span) -> Node {
        Node::BinOp(BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span,
        })
    }

    pub fn call(func: Node, args: Vec<Node>, span: Span) -> Node {
        Node::Call(Call { func: Box::new(func), args, span })
    }

    pub fn ret(value: Option<Node>, span: Span) -> Node {
        Node::Return(Return { value: value.map(Box::new), span })
    }

    pub fn expr_stmt(value: Node, span: Span) -> Node {
        Node::ExprStmt(ExprStmt { value: Box::new(value), span })
    }
}
