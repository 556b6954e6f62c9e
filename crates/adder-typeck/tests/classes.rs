//! Integration tests for class definition inference: attribute synthesis,
//! method classification, and class-body scoping.

use adder_ast::{ClassDef, FunctionDef, Literal, Module, Name, Node, Param, Pass, Span};
use adder_typeck::builtins;
use adder_typeck::ty::{ObjectTy, Ty, PARAMS_ATTR, RETURN_ATTR};
use adder_typeck::TypeckResult;

// ── Helpers ────────────────────────────────────────────────────────────

fn sp() -> Span {
    Span::new(0, 1)
}

fn check_stmts(body: Vec<Node>) -> TypeckResult {
    adder_typeck::check(&Module::new(body), builtins::prelude())
}

fn class(name: &str, body: Vec<Node>) -> Node {
    Node::ClassDef(ClassDef {
        name: name.into(),
        bases: Vec::new(),
        body,
        span: sp(),
    })
}

fn def(name: &str, params: &[&str], body: Vec<Node>) -> Node {
    Node::FunctionDef(FunctionDef {
        name: name.into(),
        params: params.iter().map(|p| Param::new(*p, sp())).collect(),
        body,
        span: sp(),
    })
}

fn assign(name: &str, value: Node) -> Node {
    Node::assign(vec![Name::new(name, sp())], value, sp())
}

/// The class object registered for `name`, unwrapped.
fn class_ty<'a>(result: &'a TypeckResult, name: &str) -> &'a ObjectTy {
    match result.env.lookup(name) {
        Some(Ty::Object(obj)) => obj,
        other => panic!("expected class object for {name}, got {other:?}"),
    }
}

/// The instance object a class produces on instantiation.
fn instance_ty<'a>(class: &'a ObjectTy) -> &'a ObjectTy {
    match class.get_attr(RETURN_ATTR) {
        Some(Ty::Object(obj)) => obj,
        other => panic!("expected instance object, got {other:?}"),
    }
}

// ── Synthesis (end-to-end scenario C) ──────────────────────────────────

#[test]
fn empty_class_synthesizes_an_empty_instance() {
    let result = check_stmts(vec![class("Point", vec![Node::Pass(Pass { span: sp() })])]);

    assert!(result.errors.is_empty(), "got errors: {:?}", result.errors);
    assert!(result.substitution.is_empty());

    let cls = class_ty(&result, "Point");
    assert_eq!(cls.class_name.as_deref(), Some("Point"));
    assert_eq!(cls.get_attr(PARAMS_ATTR), Some(&Ty::Tuple(Vec::new())));
    assert!(instance_ty(cls).attrs.is_empty());

    // Registered in the class table as well as the value bindings.
    assert!(result.env.lookup_class("Point").is_some());
}

#[test]
fn assigned_attributes_appear_on_class_and_instance() {
    let result = check_stmts(vec![class(
        "Config",
        vec![assign("retries", Node::constant(Literal::Int(3), sp()))],
    )]);

    let cls = class_ty(&result, "Config");
    assert_eq!(cls.get_attr("retries"), Some(&Ty::int()));
    assert_eq!(instance_ty(cls).get_attr("retries"), Some(&Ty::int()));
}

#[test]
fn methods_with_self_are_instance_level() {
    let result = check_stmts(vec![class(
        "Point",
        vec![def(
            "norm",
            &["self"],
            vec![Node::ret(Some(Node::constant(Literal::Float(0.0), sp())), sp())],
        )],
    )]);

    let cls = class_ty(&result, "Point");
    assert!(cls.get_attr("norm").is_none());

    let inst = instance_ty(cls);
    match inst.get_attr("norm") {
        Some(Ty::Object(method)) => {
            assert_eq!(method.get_attr(RETURN_ATTR), Some(&Ty::float()));
            assert_eq!(
                method.get_attr(PARAMS_ATTR),
                Some(&Ty::Tuple(vec![Ty::SelfRef]))
            );
        }
        other => panic!("expected method type, got {other:?}"),
    }
}

#[test]
fn functions_without_self_are_class_level() {
    let result = check_stmts(vec![class(
        "Point",
        vec![def(
            "origin_x",
            &[],
            vec![Node::ret(Some(Node::constant(Literal::Int(0), sp())), sp())],
        )],
    )]);

    let cls = class_ty(&result, "Point");
    assert!(cls.get_attr("origin_x").is_some());
    assert!(instance_ty(cls).get_attr("origin_x").is_none());
}

#[test]
fn mixed_members_are_classified_independently() {
    let result = check_stmts(vec![class(
        "Shape",
        vec![
            assign("sides", Node::constant(Literal::Int(4), sp())),
            def("area", &["self"], vec![Node::ret(None, sp())]),
            def("describe", &[], vec![Node::ret(None, sp())]),
        ],
    )]);

    let cls = class_ty(&result, "Shape");
    assert!(cls.get_attr("sides").is_some());
    assert!(cls.get_attr("describe").is_some());
    assert!(cls.get_attr("area").is_none());

    let inst = instance_ty(cls);
    assert!(inst.get_attr("sides").is_some());
    assert!(inst.get_attr("area").is_some());
    assert!(inst.get_attr("describe").is_none());
}

// ── Scoping ────────────────────────────────────────────────────────────

#[test]
fn body_bindings_do_not_escape_the_class() {
    let result = check_stmts(vec![class(
        "Config",
        vec![assign("retries", Node::constant(Literal::Int(3), sp()))],
    )]);

    assert_eq!(result.env.lookup("retries"), None);
    assert!(result.env.lookup("Config").is_some());
}

#[test]
fn class_body_is_one_expanding_scope() {
    // Later members see earlier ones: y = x resolves against the body's
    // own binding of x.
    let result = check_stmts(vec![class(
        "Pair",
        vec![
            assign("x", Node::constant(Literal::Int(1), sp())),
            assign("y", Node::name("x", sp())),
        ],
    )]);

    assert!(result.errors.is_empty(), "got errors: {:?}", result.errors);
    let cls = class_ty(&result, "Pair");
    assert_eq!(cls.get_attr("y"), Some(&Ty::int()));
    assert_eq!(instance_ty(cls).get_attr("y"), Some(&Ty::int()));
}

#[test]
fn class_body_sees_the_enclosing_scope() {
    let result = check_stmts(vec![
        assign("default", Node::constant(Literal::Int(8), sp())),
        class("Config", vec![assign("size", Node::name("default", sp()))]),
    ]);

    assert!(result.errors.is_empty());
    let cls = class_ty(&result, "Config");
    assert_eq!(cls.get_attr("size"), Some(&Ty::int()));
}

// ── Display ────────────────────────────────────────────────────────────

#[test]
fn class_type_renders_by_name() {
    let result = check_stmts(vec![class("Point", vec![])]);
    let ty = result.env.lookup("Point").unwrap();
    assert_eq!(ty.to_string(), "<class Point>");
}
