//! Type representation for the Adder inferencer.
//!
//! Defines the core `Ty` tagged union, the builtin/native kind tags, type
//! variables, and the reserved attribute names used to model callables.
//! Exactly one variant of [`Ty`] is active per value; malformed types are
//! unrepresentable by construction.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Reserved attribute holding the type a callable produces when invoked
/// (for a class, the instance type).
pub const RETURN_ATTR: &str = "*return";

/// Reserved attribute holding a callable's parameter tuple.
pub const PARAMS_ATTR: &str = "*params";

/// The host representation a builtin primitive corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NativeKind {
    Int,
    Float,
    Str,
    Bool,
    NoneType,
}

/// A type variable, identified by index. Variables stand for types not yet
/// known (function parameters, chiefly) and are resolved by applying a
/// [`Substitution`](crate::subst::Substitution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TyVar(pub u32);

/// Monotonic generator of fresh type variables. One per inference pass.
#[derive(Debug, Default)]
pub struct TyVarGen {
    next: u32,
}

impl TyVarGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh, unbound type variable.
    pub fn fresh(&mut self) -> TyVar {
        let var = TyVar(self.next);
        self.next += 1;
        var
    }
}

/// A builtin primitive type: a surface name plus the native kind it maps to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltinTy {
    pub name: String,
    pub native: NativeKind,
}

impl BuiltinTy {
    pub fn new(name: impl Into<String>, native: NativeKind) -> Self {
        BuiltinTy { name: name.into(), native }
    }
}

/// A structural record type: named attributes, optionally tagged with the
/// class that produced it.
///
/// Objects model both plain values and classes. A class object carries its
/// class-level attributes plus the reserved [`RETURN_ATTR`] (the instance
/// type produced on instantiation) and [`PARAMS_ATTR`] (constructor
/// parameter tuple). Function types use the same two reserved attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ObjectTy {
    pub attrs: FxHashMap<String, Ty>,
    pub class_name: Option<String>,
}

impl ObjectTy {
    /// An empty, anonymous object.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(attrs: FxHashMap<String, Ty>, class_name: Option<String>) -> Self {
        ObjectTy { attrs, class_name }
    }

    /// Look up an attribute by name. Absent is a valid outcome.
    pub fn get_attr(&self, name: &str) -> Option<&Ty> {
        self.attrs.get(name)
    }

    /// Add or overwrite an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, ty: Ty) {
        self.attrs.insert(name.into(), ty);
    }
}

/// An inferred Adder type.
///
/// - `Builtin`: a primitive tagged with its host representation
/// - `Object`: a structural record, possibly a class
/// - `Tuple`: an ordered list of types (parameter lists, multi-value forms)
/// - `Var`: an inference variable awaiting substitution
/// - `SelfRef`: the type of the enclosing instance (method receivers)
/// - `Error`: inference failed here; carries the human-readable cause
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Ty {
    Builtin(BuiltinTy),
    Object(ObjectTy),
    Tuple(Vec<Ty>),
    Var(TyVar),
    SelfRef,
    Error(String),
}

impl Ty {
    /// The builtin `int` type.
    pub fn int() -> Ty {
        Ty::Builtin(BuiltinTy::new("int", NativeKind::Int))
    }

    /// The builtin `float` type.
    pub fn float() -> Ty {
        Ty::Builtin(BuiltinTy::new("float", NativeKind::Float))
    }

    /// The builtin `str` type.
    pub fn string() -> Ty {
        Ty::Builtin(BuiltinTy::new("str", NativeKind::Str))
    }

    /// The builtin `bool` type.
    pub fn bool() -> Ty {
        Ty::Builtin(BuiltinTy::new("bool", NativeKind::Bool))
    }

    /// The builtin `None` type.
    pub fn none() -> Ty {
        Ty::Builtin(BuiltinTy::new("None", NativeKind::NoneType))
    }

    /// The error sentinel for an unresolved name.
    pub fn undefined() -> Ty {
        Ty::Error("Undefined".into())
    }

    /// Whether this type is the error sentinel.
    pub fn is_error(&self) -> bool {
        matches!(self, Ty::Error(_))
    }

    /// The native kind, if this is a builtin primitive.
    pub fn native_kind(&self) -> Option<NativeKind> {
        match self {
            Ty::Builtin(b) => Some(b.native),
            _ => None,
        }
    }

    /// Whether this type mentions `var` anywhere. Binding sites use this
    /// to refuse bindings that would make a variable refer to itself.
    pub fn mentions(&self, var: TyVar) -> bool {
        match self {
            Ty::Var(v) => *v == var,
            Ty::Object(obj) => obj.attrs.values().any(|t| t.mentions(var)),
            Ty::Tuple(elems) => elems.iter().any(|t| t.mentions(var)),
            Ty::Builtin(_) | Ty::SelfRef | Ty::Error(_) => false,
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Builtin(b) => write!(f, "{}", b.name),
            Ty::Object(obj) => {
                if let Some(name) = &obj.class_name {
                    return write!(f, "<class {name}>");
                }
                // Sorted attribute order keeps dumps deterministic.
                let mut names: Vec<&String> = obj.attrs.keys().collect();
                names.sort();
                write!(f, "{{")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, obj.attrs[*name])?;
                }
                write!(f, "}}")
            }
            Ty::Tuple(elems) => {
                write!(f, "(")?;
                for (i, e) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{e}")?;
                }
                write!(f, ")")
            }
            Ty::Var(v) => write!(f, "?{}", v.0),
            Ty::SelfRef => write!(f, "self"),
            Ty::Error(reason) => write!(f, "<error: {reason}>"),
        }
    }
}
