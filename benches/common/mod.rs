#![allow(dead_code)]
use std::collections::HashMap;

use exprlang::ast::Expression;
use exprlang::compiler::{FunctionRegistry, Symbol};
use exprlang::eval::Variables;
use exprlang::runtime::Value;
use exprlang::runtime::object::{Method, RecordObject};

fn identifier(name: &str) -> Expression {
    Expression::Identifier(name.to_string())
}

/// A deep access chain: user.get_label() style property reads stacked over
/// list indexing and a trailing method call.
pub fn chain_workload() -> Expression {
    let mut expr = Expression::index(identifier("arr"), Expression::Integer(1));
    for _ in 0..16 {
        expr = Expression::index(identifier("arr"), expr);
    }
    Expression::method(
        Expression::property(identifier("user"), "label"),
        Expression::String("shift".to_string()),
        vec![expr, Expression::Integer(1)],
    )
}

pub fn flat_workload() -> Expression {
    Expression::index(identifier("arr"), Expression::Integer(1))
}

pub fn workload_variables() -> Variables {
    let inner = RecordObject::new()
        .with_field("name", Value::String("bench".to_string()))
        .with_method(
            "shift",
            Method::new(2, |_receiver, args| match (&args[0], &args[1]) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a - b)),
                _ => Ok(Value::None),
            }),
        );
    let label = Value::record(inner);

    Variables::from([
        (
            "user".to_string(),
            Value::record(RecordObject::new().with_field("label", label)),
        ),
        (
            "arr".to_string(),
            Value::list((0..8).map(Value::Integer).collect()),
        ),
        (
            "config".to_string(),
            Value::map(HashMap::from([(
                "host".to_string(),
                Value::String("localhost".to_string()),
            )])),
        ),
    ])
}

pub fn workload_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    registry.register_symbol("user", Symbol::new().with_getter("label"));
    registry
}
