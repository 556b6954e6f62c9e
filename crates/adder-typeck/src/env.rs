//! Type environment with deep-copy scoping.
//!
//! An environment is one scope's table of name->type bindings plus the
//! class definitions registered by class statements. Entering a nested
//! scope takes an independent deep copy ([`Environment::scoped`]); leaving
//! folds the child back in ([`Environment::merge`]). Sibling traversals
//! therefore never see each other's locals unless explicitly merged.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::json;

use crate::subst::Substitution;
use crate::ty::Ty;

/// A single scope: value bindings and class definitions.
///
/// Lookups that fail return `None`, never a fault; converting an absent
/// binding into an `Error` type is the caller's policy (see the name rule).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Environment {
    bindings: FxHashMap<String, Ty>,
    classes: FxHashMap<String, Ty>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value binding. Absent is a valid outcome.
    pub fn lookup(&self, name: &str) -> Option<&Ty> {
        self.bindings.get(name)
    }

    /// Bind or rebind a name. Last writer wins; there is no
    /// shadow-then-restore.
    pub fn bind(&mut self, name: impl Into<String>, ty: Ty) {
        self.bindings.insert(name.into(), ty);
    }

    /// Look up a registered class definition.
    pub fn lookup_class(&self, name: &str) -> Option<&Ty> {
        self.classes.get(name)
    }

    /// Register a class definition under its name.
    pub fn define_class(&mut self, name: impl Into<String>, ty: Ty) {
        self.classes.insert(name.into(), ty);
    }

    /// An independent snapshot for entering a nested scope. All types are
    /// owned data, so a clone is a deep copy.
    pub fn scoped(&self) -> Environment {
        self.clone()
    }

    /// Fold every binding from a child scope into this one, overwriting
    /// on key collision.
    pub fn merge(&mut self, child: Environment) {
        for (name, ty) in child.bindings {
            self.bindings.insert(name, ty);
        }
        for (name, ty) in child.classes {
            self.classes.insert(name, ty);
        }
    }

    /// Resolve every binding through a substitution.
    pub fn apply(&mut self, sub: &Substitution) {
        for ty in self.bindings.values_mut() {
            *ty = sub.apply(ty);
        }
        for ty in self.classes.values_mut() {
            *ty = sub.apply(ty);
        }
    }

    /// Printable report of all bindings, sorted by name for determinism.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        out.push_str("bindings:\n");
        let mut names: Vec<&String> = self.bindings.keys().collect();
        names.sort();
        for name in names {
            let _ = writeln!(out, "  {}: {}", name, self.bindings[name]);
        }
        if !self.classes.is_empty() {
            out.push_str("classes:\n");
            let mut names: Vec<&String> = self.classes.keys().collect();
            names.sort();
            for name in names {
                let _ = writeln!(out, "  {}: {}", name, self.classes[name]);
            }
        }
        out
    }

    /// Machine-readable dump: binding and class names mapped to their
    /// rendered types, in sorted order.
    pub fn to_json(&self) -> serde_json::Value {
        let bindings: BTreeMap<&str, String> = self
            .bindings
            .iter()
            .map(|(name, ty)| (name.as_str(), ty.to_string()))
            .collect();
        let classes: BTreeMap<&str, String> = self
            .classes
            .iter()
            .map(|(name, ty)| (name.as_str(), ty.to_string()))
            .collect();
        json!({ "bindings": bindings, "classes": classes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::TyVar;

    #[test]
    fn lookup_returns_most_recent_binding() {
        let mut env = Environment::new();
        env.bind("x", Ty::int());
        env.bind("x", Ty::string());

        assert_eq!(env.lookup("x"), Some(&Ty::string()));
        assert_eq!(env.lookup("y"), None);
    }

    #[test]
    fn scoped_copy_is_independent() {
        let mut env = Environment::new();
        env.bind("x", Ty::int());

        let mut child = env.scoped();
        child.bind("y", Ty::string());
        child.bind("x", Ty::float());

        // Parent untouched until an explicit merge.
        assert_eq!(env.lookup("x"), Some(&Ty::int()));
        assert_eq!(env.lookup("y"), None);

        env.merge(child);
        assert_eq!(env.lookup("x"), Some(&Ty::float()));
        assert_eq!(env.lookup("y"), Some(&Ty::string()));
    }

    #[test]
    fn class_definitions_are_separate_from_bindings() {
        let mut env = Environment::new();
        env.define_class("Point", Ty::none());

        assert_eq!(env.lookup("Point"), None);
        assert_eq!(env.lookup_class("Point"), Some(&Ty::none()));
    }

    #[test]
    fn apply_resolves_bound_vars() {
        let mut env = Environment::new();
        env.bind("x", Ty::Var(TyVar(0)));

        let mut sub = Substitution::new();
        sub.bind(TyVar(0), Ty::int());
        env.apply(&sub);

        assert_eq!(env.lookup("x"), Some(&Ty::int()));
    }

    #[test]
    fn dump_is_sorted() {
        let mut env = Environment::new();
        env.bind("b", Ty::int());
        env.bind("a", Ty::string());

        assert_eq!(env.dump(), "bindings:\n  a: str\n  b: int\n");
    }

    #[test]
    fn json_dump_shape() {
        let mut env = Environment::new();
        env.bind("x", Ty::int());

        let value = env.to_json();
        assert_eq!(value["bindings"]["x"], "int");
    }
}
