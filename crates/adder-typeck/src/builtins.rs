//! Built-in type registration.
//!
//! Produces the prelude environment the driver expects as input: primitive
//! type names, literal constants, and the handful of built-in callables.
//! Also holds the arithmetic operator grid used by the binary-op rule.

use adder_ast::BinOpKind;

use crate::env::Environment;
use crate::ty::{NativeKind, Ty};

/// Build the prelude environment.
///
/// After this call the environment contains:
/// - Primitive type names: `int`, `float`, `str`, `bool`, `None`
/// - Constants: `True`, `False` (bool)
/// - IO: `print` (bound to the none builtin -- a builtin callee types as
///   a constructor-style call, so `print(...)` infers to `None`)
pub fn prelude() -> Environment {
    let mut env = Environment::new();

    env.bind("int", Ty::int());
    env.bind("float", Ty::float());
    env.bind("str", Ty::string());
    env.bind("bool", Ty::bool());
    env.bind("None", Ty::none());

    env.bind("True", Ty::bool());
    env.bind("False", Ty::bool());

    env.bind("print", Ty::none());

    env
}

/// Result type of a binary arithmetic expression over two builtins, or
/// `None` when the combination has no rule.
///
/// The grid: two ints stay int except true division, which widens to
/// float; a float operand makes any arithmetic float; `str + str`
/// concatenates; `str * int` repeats.
pub fn binop_result(op: BinOpKind, lhs: &Ty, rhs: &Ty) -> Option<Ty> {
    use NativeKind::{Float, Int, Str};

    let (l, r) = (lhs.native_kind()?, rhs.native_kind()?);
    let result = match (l, r) {
        (Int, Int) => {
            if op == BinOpKind::Div {
                Ty::float()
            } else {
                Ty::int()
            }
        }
        (Float, Int) | (Int, Float) | (Float, Float) => Ty::float(),
        (Str, Str) if op == BinOpKind::Add => Ty::string(),
        (Str, Int) | (Int, Str) if op == BinOpKind::Mul => Ty::string(),
        _ => return None,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_contains_primitives_and_constants() {
        let env = prelude();
        assert_eq!(env.lookup("int"), Some(&Ty::int()));
        assert_eq!(env.lookup("None"), Some(&Ty::none()));
        assert_eq!(env.lookup("True"), Some(&Ty::bool()));
        assert_eq!(env.lookup("print"), Some(&Ty::none()));
    }

    #[test]
    fn int_arithmetic_stays_int_except_division() {
        for op in [BinOpKind::Add, BinOpKind::Sub, BinOpKind::Mul, BinOpKind::FloorDiv, BinOpKind::Mod] {
            assert_eq!(binop_result(op, &Ty::int(), &Ty::int()), Some(Ty::int()));
        }
        assert_eq!(
            binop_result(BinOpKind::Div, &Ty::int(), &Ty::int()),
            Some(Ty::float())
        );
    }

    #[test]
    fn float_operand_widens() {
        assert_eq!(
            binop_result(BinOpKind::Add, &Ty::int(), &Ty::float()),
            Some(Ty::float())
        );
        assert_eq!(
            binop_result(BinOpKind::Mod, &Ty::float(), &Ty::float()),
            Some(Ty::float())
        );
    }

    #[test]
    fn string_rules() {
        assert_eq!(
            binop_result(BinOpKind::Add, &Ty::string(), &Ty::string()),
            Some(Ty::string())
        );
        assert_eq!(
            binop_result(BinOpKind::Mul, &Ty::string(), &Ty::int()),
            Some(Ty::string())
        );
        assert_eq!(binop_result(BinOpKind::Add, &Ty::string(), &Ty::int()), None);
    }

    #[test]
    fn non_builtin_operands_have_no_rule() {
        assert_eq!(binop_result(BinOpKind::Add, &Ty::SelfRef, &Ty::int()), None);
        assert_eq!(
            binop_result(BinOpKind::Add, &Ty::undefined(), &Ty::int()),
            None
        );
    }
}
