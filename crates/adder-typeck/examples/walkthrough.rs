//! Walkthrough of the inference pass over four small programs: straight
//! arithmetic, an unresolved name, a function, and a class definition.
//! Prints the annotated tree, the final environment, and any diagnostics
//! for each.
//!
//! Run with `cargo run --example walkthrough`.

use adder_ast::{BinOpKind, ClassDef, FunctionDef, Literal, Module, Name, Node, Param, Span};
use adder_typeck::builtins;

fn section(title: &str) {
    println!("\n=== {title} ===\n");
}

fn run(title: &str, source: &str, module: &Module) {
    section(title);
    for line in source.lines() {
        println!("    {line}");
    }
    println!();

    let result = adder_typeck::check(module, builtins::prelude());
    println!("{}", result.format_tree());
    println!("{}", result.env_report());
    for diagnostic in result.render_errors(source, "walkthrough.add") {
        println!("{diagnostic}");
    }
}

fn arithmetic() -> (String, Module) {
    let source = "\
x = 1
y = x + 2
ratio = y / 2
";
    let module = Module::new(vec![
        Node::assign(
            vec![Name::new("x", Span::new(0, 1))],
            Node::constant(Literal::Int(1), Span::new(4, 5)),
            Span::new(0, 5),
        ),
        Node::assign(
            vec![Name::new("y", Span::new(6, 7))],
            Node::binop(
                Node::name("x", Span::new(10, 11)),
                BinOpKind::Add,
                Node::constant(Literal::Int(2), Span::new(14, 15)),
                Span::new(10, 15),
            ),
            Span::new(6, 15),
        ),
        Node::assign(
            vec![Name::new("ratio", Span::new(16, 21))],
            Node::binop(
                Node::name("y", Span::new(24, 25)),
                BinOpKind::Div,
                Node::constant(Literal::Int(2), Span::new(28, 29)),
                Span::new(24, 29),
            ),
            Span::new(16, 29),
        ),
    ]);
    (source.to_string(), module)
}

fn unresolved_name() -> (String, Module) {
    let source = "\
greeting = \"hello\"
print(missing)
";
    let module = Module::new(vec![
        Node::assign(
            vec![Name::new("greeting", Span::new(0, 8))],
            Node::constant(Literal::Str("hello".into()), Span::new(11, 18)),
            Span::new(0, 18),
        ),
        Node::expr_stmt(
            Node::call(
                Node::name("print", Span::new(19, 24)),
                vec![Node::name("missing", Span::new(25, 32))],
                Span::new(19, 33),
            ),
            Span::new(19, 33),
        ),
    ]);
    (source.to_string(), module)
}

fn function_definition() -> (String, Module) {
    let source = "\
def scale(value):
    return value * 2

result = scale(21)
";
    let module = Module::new(vec![
        Node::FunctionDef(FunctionDef {
            name: "scale".into(),
            params: vec![Param::new("value", Span::new(10, 15))],
            body: vec![Node::ret(
                Some(Node::binop(
                    Node::name("value", Span::new(29, 34)),
                    BinOpKind::Mul,
                    Node::constant(Literal::Int(2), Span::new(37, 38)),
                    Span::new(29, 38),
                )),
                Span::new(22, 38),
            )],
            span: Span::new(0, 38),
        }),
        Node::assign(
            vec![Name::new("result", Span::new(40, 46))],
            Node::call(
                Node::name("scale", Span::new(49, 54)),
                vec![Node::constant(Literal::Int(21), Span::new(55, 57))],
                Span::new(49, 58),
            ),
            Span::new(40, 58),
        ),
    ]);
    (source.to_string(), module)
}

fn class_definition() -> (String, Module) {
    let source = "\
class Point:
    x = 0
    y = 0
    def dist(self):
        return 0.0

origin = Point()
";
    let module = Module::new(vec![
        Node::ClassDef(ClassDef {
            name: "Point".into(),
            bases: Vec::new(),
            body: vec![
                Node::assign(
                    vec![Name::new("x", Span::new(17, 18))],
                    Node::constant(Literal::Int(0), Span::new(21, 22)),
                    Span::new(17, 22),
                ),
                Node::assign(
                    vec![Name::new("y", Span::new(27, 28))],
                    Node::constant(Literal::Int(0), Span::new(31, 32)),
                    Span::new(27, 32),
                ),
                Node::FunctionDef(FunctionDef {
                    name: "dist".into(),
                    params: vec![Param::new("self", Span::new(46, 50))],
                    body: vec![Node::ret(
                        Some(Node::constant(Literal::Float(0.0), Span::new(68, 71))),
                        Span::new(61, 71),
                    )],
                    span: Span::new(37, 71),
                }),
            ],
            span: Span::new(0, 71),
        }),
        Node::assign(
            vec![Name::new("origin", Span::new(73, 79))],
            Node::call(
                Node::name("Point", Span::new(82, 87)),
                Vec::new(),
                Span::new(82, 89),
            ),
            Span::new(73, 89),
        ),
    ]);
    (source.to_string(), module)
}

fn main() {
    let (source, module) = arithmetic();
    run("arithmetic", &source, &module);

    let (source, module) = unresolved_name();
    run("unresolved name", &source, &module);

    let (source, module) = function_definition();
    run("function definition", &source, &module);

    let (source, module) = class_definition();
    run("class definition", &source, &module);
}
