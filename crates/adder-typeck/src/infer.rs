//! Inference driver.
//!
//! Owns the per-pass state (fresh variable generator, collected
//! observations), wraps the module root, and runs the traversal. One
//! `Checker` per pass; a pass either covers the whole tree or the caller
//! abandons everything -- partial results are never exposed.

use adder_ast::Module;

use crate::env::Environment;
use crate::error::TypeError;
use crate::tree::{TModule, TypedNode};
use crate::ty::TyVarGen;
use crate::TypeckResult;

/// Per-pass inference state, threaded through every traversal call.
pub(crate) struct Checker {
    /// Fresh type variable source.
    pub(crate) vars: TyVarGen,
    /// Failure points observed so far, in traversal order.
    pub(crate) errors: Vec<TypeError>,
}

impl Checker {
    pub(crate) fn new() -> Self {
        Checker {
            vars: TyVarGen::new(),
            errors: Vec::new(),
        }
    }
}

/// Run one inference pass over a module against a starting environment
/// (normally [`crate::builtins::prelude`], possibly extended by the
/// caller).
pub(crate) fn infer(module: &Module, env: Environment) -> TypeckResult {
    let mut ck = Checker::new();
    let (tree, substitution, env) = TModule::traverse(&mut ck, module, env);
    TypeckResult {
        tree: TypedNode::Module(tree),
        env,
        substitution,
        errors: ck.errors,
    }
}
