//! Class definitions.

use adder_ast::{ClassDef, Span};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::env::Environment;
use crate::infer::Checker;
use crate::subst::Substitution;
use crate::tree::{pad, TypedNode};
use crate::ty::{ObjectTy, Ty, PARAMS_ATTR, RETURN_ATTR};

/// An annotated class definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TClassDef {
    pub name: String,
    pub bases: Vec<String>,
    pub body: Vec<TypedNode>,
    pub ty: Ty,
    pub span: Span,
}

impl TClassDef {
    /// Infer a class definition.
    ///
    /// The body runs in an independent scoped copy of the incoming
    /// environment, threaded statement to statement: a class body is one
    /// expanding scope, so each member sees everything defined before it.
    /// While traversing, two attribute maps are collected:
    ///
    /// - an assignment target contributes to both the class-level and the
    ///   instance-level map (simple class attributes are visible both
    ///   ways);
    /// - a function definition is class-level by default, reclassified as
    ///   instance-level when its first parameter is the self-reference
    ///   marker.
    ///
    /// The class type is the class-level map plus `*return` (an object
    /// built from exactly the instance-level attributes) and `*params`
    /// (an empty tuple), tagged with the class name. It is registered in
    /// the *outer* environment: the class is visible to its enclosing
    /// scope, its members are not. No unification happens here, so the
    /// returned substitution is empty.
    pub(crate) fn traverse(
        ck: &mut Checker,
        node: &ClassDef,
        env: Environment,
    ) -> (TClassDef, Substitution, Environment) {
        let mut scoped = env.scoped();
        let mut class_attrs: FxHashMap<String, Ty> = FxHashMap::default();
        let mut inst_attrs: FxHashMap<String, Ty> = FxHashMap::default();

        let mut body = Vec::with_capacity(node.body.len());
        for stmt in &node.body {
            let (typed, _sub, next) = TypedNode::traverse(ck, stmt, scoped);
            scoped = next;
            match &typed {
                TypedNode::Assign(assign) => {
                    for target in &assign.targets {
                        class_attrs.insert(target.clone(), assign.ty.clone());
                        inst_attrs.insert(target.clone(), assign.ty.clone());
                    }
                }
                TypedNode::FunctionDef(func) => {
                    if matches!(func.first_param_ty(), Some(Ty::SelfRef)) {
                        inst_attrs.insert(func.name.clone(), func.ty.clone());
                    } else {
                        class_attrs.insert(func.name.clone(), func.ty.clone());
                    }
                }
                _ => {}
            }
            body.push(typed);
        }

        let instance = Ty::Object(ObjectTy::new(inst_attrs, None));
        class_attrs.insert(RETURN_ATTR.to_string(), instance);
        class_attrs.insert(PARAMS_ATTR.to_string(), Ty::Tuple(Vec::new()));
        let ty = Ty::Object(ObjectTy::new(class_attrs, Some(node.name.clone())));

        let mut env = env;
        env.bind(node.name.clone(), ty.clone());
        env.define_class(node.name.clone(), ty.clone());

        let typed = TClassDef {
            name: node.name.clone(),
            bases: node.bases.clone(),
            body,
            ty,
            span: node.span,
        };
        (typed, Substitution::new(), env)
    }

    pub fn format_tree(&self, indent: usize) -> String {
        let mut s = format!("{}Class Definition\n", pad(indent));
        s.push_str(&format!("{}type: {}\n", pad(indent + 1), self.ty));
        s.push_str(&format!("{}name: {}\n", pad(indent + 1), self.name));
        if !self.bases.is_empty() {
            s.push_str(&format!(
                "{}bases: {}\n",
                pad(indent + 1),
                self.bases.join(", ")
            ));
        }
        for stmt in &self.body {
            s.push_str(&stmt.format_tree(indent + 1));
        }
        s
    }
}
