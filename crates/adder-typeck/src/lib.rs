//! Adder type inferencer.
//!
//! Walks an untyped Adder tree (from `adder-ast`) and annotates every node
//! with an inferred type, threading a substitution and a type environment
//! through the traversal. The engine is a miniature Hindley-Milner-style
//! pass over a dynamically-typed source language: scoped environments with
//! deep-copy/merge semantics, class and instance attribute synthesis, and
//! error-as-value propagation for unresolved names.
//!
//! The pass is single-threaded, synchronous, and depth-first; every node
//! is visited exactly once. Inference never aborts: nodes that cannot be
//! typed take an `Error` sentinel type and traversal continues.
//!
//! # Architecture
//!
//! - [`ty`]: the type model (builtins, objects, tuples, variables, the
//!   self-reference marker, the error sentinel)
//! - [`subst`]: substitutions -- mergeable maps from type variables to types
//! - [`env`]: the environment -- one scope's bindings, with deep-copy
//!   scoping and explicit merge
//! - [`builtins`]: the prelude environment and the arithmetic grid
//! - [`tree`]: the annotated tree, one variant per inference rule plus a
//!   generic fallback
//! - [`error`] / [`diagnostics`]: observations recorded at failure points
//!   and their ariadne rendering

pub mod builtins;
pub mod diagnostics;
pub mod env;
pub mod error;
mod infer;
pub mod subst;
pub mod tree;
pub mod ty;

use adder_ast::Module;

use crate::env::Environment;
use crate::error::TypeError;
use crate::subst::Substitution;
use crate::tree::TypedNode;

/// The result of one inference pass.
pub struct TypeckResult {
    /// The fully annotated tree.
    pub tree: TypedNode,
    /// The final environment, resolved through the accumulated
    /// substitution.
    pub env: Environment,
    /// The substitution accumulated across the whole pass. Node types in
    /// the tree are not pre-resolved; apply this to resolve any variables
    /// they still contain.
    pub substitution: Substitution,
    /// Failure points observed during the pass, in traversal order.
    pub errors: Vec<TypeError>,
}

impl TypeckResult {
    /// Human-readable dump of the whole annotated tree.
    pub fn format_tree(&self) -> String {
        self.tree.format_tree(0)
    }

    /// Printable report of the final environment.
    pub fn env_report(&self) -> String {
        self.env.dump()
    }

    /// Render every observed error as an ariadne diagnostic against the
    /// source text the upstream parser consumed.
    pub fn render_errors(&self, source: &str, filename: &str) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| diagnostics::render_diagnostic(e, source, filename))
            .collect()
    }
}

/// Type-check a parsed Adder module against a starting environment.
///
/// This is the main entry point. The environment is normally
/// [`builtins::prelude`], optionally extended by the caller with
/// additional bindings before the pass.
pub fn check(module: &Module, env: Environment) -> TypeckResult {
    infer::infer(module, env)
}
