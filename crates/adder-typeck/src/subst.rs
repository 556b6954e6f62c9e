//! Substitutions: mappings from type variables to types.
//!
//! A substitution resolves partially-inferred types. Applying one walks a
//! type and replaces every bound variable with its binding, transitively.
//! Merging composes two substitutions, with the addend winning on keys
//! present in both.

use rustc_hash::FxHashMap;

use crate::ty::{ObjectTy, Ty, TyVar};

/// A mapping from type variables to types.
///
/// This layer cannot fail: malformed types are impossible by construction,
/// and binding an already-bound variable simply overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitution {
    map: FxHashMap<TyVar, Ty>,
}

impl Substitution {
    /// The empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `var` to `ty`, overwriting any previous binding.
    pub fn bind(&mut self, var: TyVar, ty: Ty) {
        self.map.insert(var, ty);
    }

    /// The binding for `var`, if any.
    pub fn get(&self, var: TyVar) -> Option<&Ty> {
        self.map.get(&var)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Compose `other` onto this substitution. Equivalent to applying
    /// `self` then `other`: for keys present in both, `other` wins.
    pub fn merge(&mut self, other: Substitution) {
        for (var, ty) in other.map {
            self.map.insert(var, ty);
        }
    }

    /// Resolve a type through this substitution.
    ///
    /// Bound variables are replaced transitively (a variable bound to
    /// another bound variable resolves all the way down). There is no
    /// occurs-check and no cycle detection: a substitution containing a
    /// cycle such as `?0 -> ?1, ?1 -> ?0` will not terminate. The binding
    /// sites in this crate refuse any binding that would make a variable
    /// refer to itself (see [`Ty::mentions`]), which keeps the
    /// substitutions they build acyclic.
    pub fn apply(&self, ty: &Ty) -> Ty {
        match ty {
            Ty::Var(v) => match self.map.get(v) {
                Some(bound) => self.apply(bound),
                None => ty.clone(),
            },
            Ty::Object(obj) => {
                let attrs = obj
                    .attrs
                    .iter()
                    .map(|(name, t)| (name.clone(), self.apply(t)))
                    .collect();
                Ty::Object(ObjectTy::new(attrs, obj.class_name.clone()))
            }
            Ty::Tuple(elems) => Ty::Tuple(elems.iter().map(|e| self.apply(e)).collect()),
            Ty::Builtin(_) | Ty::SelfRef | Ty::Error(_) => ty.clone(),
        }
    }
}
