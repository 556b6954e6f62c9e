//! Integration tests for function definition and call-site inference.

use adder_ast::{BinOpKind, FunctionDef, Literal, Module, Name, Node, Param, Pass, Span};
use adder_typeck::builtins;
use adder_typeck::tree::TypedNode;
use adder_typeck::ty::{Ty, PARAMS_ATTR, RETURN_ATTR};
use adder_typeck::TypeckResult;

// ── Helpers ────────────────────────────────────────────────────────────

fn sp() -> Span {
    Span::new(0, 1)
}

fn check_stmts(body: Vec<Node>) -> TypeckResult {
    adder_typeck::check(&Module::new(body), builtins::prelude())
}

fn def(name: &str, params: &[&str], body: Vec<Node>) -> Node {
    Node::FunctionDef(FunctionDef {
        name: name.into(),
        params: params.iter().map(|p| Param::new(*p, sp())).collect(),
        body,
        span: sp(),
    })
}

/// Pull `*params` and `*return` out of a synthesized callable type.
fn signature(ty: &Ty) -> (&[Ty], &Ty) {
    let obj = match ty {
        Ty::Object(obj) => obj,
        other => panic!("expected a callable object type, got {other}"),
    };
    let params = match obj.get_attr(PARAMS_ATTR) {
        Some(Ty::Tuple(params)) => params.as_slice(),
        other => panic!("expected a parameter tuple, got {other:?}"),
    };
    let ret = obj
        .get_attr(RETURN_ATTR)
        .unwrap_or_else(|| panic!("callable has no return attribute"));
    (params, ret)
}

// ── Signature synthesis ────────────────────────────────────────────────

#[test]
fn body_arithmetic_concretizes_the_parameter() {
    // def inc(x): return x + 1
    let result = check_stmts(vec![def(
        "inc",
        &["x"],
        vec![Node::ret(
            Some(Node::binop(
                Node::name("x", sp()),
                BinOpKind::Add,
                Node::constant(Literal::Int(1), sp()),
                sp(),
            )),
            sp(),
        )],
    )]);

    assert!(result.errors.is_empty(), "got errors: {:?}", result.errors);
    let (params, ret) = signature(result.env.lookup("inc").unwrap());
    assert_eq!(params, &[Ty::int()]);
    assert_eq!(ret, &Ty::int());
}

#[test]
fn unconstrained_parameter_stays_a_variable() {
    // def ident(a): return a
    let result = check_stmts(vec![def(
        "ident",
        &["a"],
        vec![Node::ret(Some(Node::name("a", sp())), sp())],
    )]);

    let (params, ret) = signature(result.env.lookup("ident").unwrap());
    assert!(matches!(params[0], Ty::Var(_)));
    assert_eq!(ret, &params[0]);
}

#[test]
fn parameter_added_to_itself_stays_open() {
    // def f(a): return a + a -- both operands resolve to the same
    // variable; the pass must complete without binding it to itself.
    let result = check_stmts(vec![def(
        "f",
        &["a"],
        vec![Node::ret(
            Some(Node::binop(
                Node::name("a", sp()),
                BinOpKind::Add,
                Node::name("a", sp()),
                sp(),
            )),
            sp(),
        )],
    )]);

    assert!(result.errors.is_empty(), "got errors: {:?}", result.errors);
    let (params, ret) = signature(result.env.lookup("f").unwrap());
    assert!(matches!(params[0], Ty::Var(_)));
    assert_eq!(ret, &params[0]);
}

#[test]
fn bare_return_types_as_none() {
    let result = check_stmts(vec![def("f", &[], vec![Node::ret(None, sp())])]);
    let (params, ret) = signature(result.env.lookup("f").unwrap());
    assert!(params.is_empty());
    assert_eq!(ret, &Ty::none());
}

#[test]
fn missing_return_types_as_none() {
    let result = check_stmts(vec![def("f", &[], vec![Node::Pass(Pass { span: sp() })])]);
    let (_, ret) = signature(result.env.lookup("f").unwrap());
    assert_eq!(ret, &Ty::none());
}

#[test]
fn first_return_fixes_the_signature() {
    // Two top-level returns; the first one wins.
    let result = check_stmts(vec![def(
        "f",
        &[],
        vec![
            Node::ret(Some(Node::constant(Literal::Int(1), sp())), sp()),
            Node::ret(Some(Node::constant(Literal::Str("s".into()), sp())), sp()),
        ],
    )]);
    let (_, ret) = signature(result.env.lookup("f").unwrap());
    assert_eq!(ret, &Ty::int());
}

#[test]
fn self_parameter_is_the_self_reference_marker() {
    let result = check_stmts(vec![def(
        "method",
        &["self", "x"],
        vec![Node::ret(None, sp())],
    )]);
    let (params, _) = signature(result.env.lookup("method").unwrap());
    assert_eq!(params[0], Ty::SelfRef);
    assert!(matches!(params[1], Ty::Var(_)));
}

// ── Scoping ────────────────────────────────────────────────────────────

#[test]
fn body_locals_do_not_leak() {
    let result = check_stmts(vec![def(
        "f",
        &["x"],
        vec![
            Node::assign(
                vec![Name::new("local", sp())],
                Node::constant(Literal::Int(1), sp()),
                sp(),
            ),
            Node::ret(Some(Node::name("local", sp())), sp()),
        ],
    )]);

    assert!(result.env.lookup("f").is_some());
    assert_eq!(result.env.lookup("local"), None);
    assert_eq!(result.env.lookup("x"), None);
}

#[test]
fn body_sees_names_bound_before_the_definition() {
    let result = check_stmts(vec![
        Node::assign(
            vec![Name::new("base", sp())],
            Node::constant(Literal::Int(10), sp()),
            sp(),
        ),
        def(
            "f",
            &[],
            vec![Node::ret(Some(Node::name("base", sp())), sp())],
        ),
    ]);

    assert!(result.errors.is_empty());
    let (_, ret) = signature(result.env.lookup("f").unwrap());
    assert_eq!(ret, &Ty::int());
}

// ── Call sites ─────────────────────────────────────────────────────────

#[test]
fn call_binds_parameters_and_resolves_the_return() {
    // def ident(a): return a
    // y = ident(5)
    let result = check_stmts(vec![
        def(
            "ident",
            &["a"],
            vec![Node::ret(Some(Node::name("a", sp())), sp())],
        ),
        Node::assign(
            vec![Name::new("y", sp())],
            Node::call(
                Node::name("ident", sp()),
                vec![Node::constant(Literal::Int(5), sp())],
                sp(),
            ),
            sp(),
        ),
    ]);

    assert!(result.errors.is_empty(), "got errors: {:?}", result.errors);
    assert_eq!(result.env.lookup("y"), Some(&Ty::int()));

    // The module applies its accumulated substitution to the final
    // environment, so the published signature is concretized too.
    let (params, ret) = signature(result.env.lookup("ident").unwrap());
    assert_eq!(params, &[Ty::int()]);
    assert_eq!(ret, &Ty::int());
}

#[test]
fn function_passed_to_itself_stays_open() {
    // def ident(a): return a
    // r = ident(ident) -- the argument's type mentions the parameter
    // variable, so the call site must not bind it.
    let result = check_stmts(vec![
        def(
            "ident",
            &["a"],
            vec![Node::ret(Some(Node::name("a", sp())), sp())],
        ),
        Node::assign(
            vec![Name::new("r", sp())],
            Node::call(
                Node::name("ident", sp()),
                vec![Node::name("ident", sp())],
                sp(),
            ),
            sp(),
        ),
    ]);

    assert!(result.errors.is_empty(), "got errors: {:?}", result.errors);
    assert!(matches!(result.env.lookup("r"), Some(Ty::Var(_))));
}

#[test]
fn extra_arguments_are_ignored() {
    // Arity is not checked; surplus arguments bind nothing.
    let result = check_stmts(vec![
        def("f", &[], vec![Node::ret(None, sp())]),
        Node::assign(
            vec![Name::new("r", sp())],
            Node::call(
                Node::name("f", sp()),
                vec![Node::constant(Literal::Int(1), sp())],
                sp(),
            ),
            sp(),
        ),
    ]);

    assert!(result.errors.is_empty());
    assert_eq!(result.env.lookup("r"), Some(&Ty::none()));
}
