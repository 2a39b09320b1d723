//! Pluggable property resolution.
//!
//! The access node stays policy-free: how a named property is read off an
//! object (direct field, getter method, magic accessor) is decided by the
//! injected resolver, both at evaluation time and when emitting source text.
use crate::compiler::Symbol;
use crate::runtime::error::EvalError;
use crate::runtime::object::ObjectLike;
use crate::runtime::value::Value;

/// Method invoked as the last-resort accessor, with the property name as its
/// single argument.
pub const MAGIC_ACCESSOR: &str = "__get";

pub trait PropertyResolver {
    /// Evaluation-time form: read the named property off a live object.
    /// Fails with `NoSuchProperty` when no strategy applies.
    fn get_value(&self, object: &dyn ObjectLike, name: &str) -> Result<Value, EvalError>;

    /// Compile-time form: the raw source fragment appended after the
    /// compiled base expression to read the named property.
    fn accessor_path(&self, symbol: &Symbol, name: &str) -> String;
}

/// Default strategy: direct field, then zero-argument `get_<name>` getter,
/// then the magic accessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldThenGetter;

impl FieldThenGetter {
    fn getter_name(name: &str) -> String {
        format!("get_{name}")
    }
}

impl PropertyResolver for FieldThenGetter {
    fn get_value(&self, object: &dyn ObjectLike, name: &str) -> Result<Value, EvalError> {
        if let Some(value) = object.field(name) {
            return Ok(value);
        }
        let getter = Self::getter_name(name);
        if object.has_method(&getter) {
            return object.call_method(&getter, &[]);
        }
        if object.has_method(MAGIC_ACCESSOR) {
            return object.call_method(MAGIC_ACCESSOR, &[Value::String(name.to_string())]);
        }
        Err(EvalError::NoSuchProperty {
            property: name.to_string(),
            type_name: object.type_name().to_string(),
        })
    }

    fn accessor_path(&self, symbol: &Symbol, name: &str) -> String {
        if symbol.is_getter_backed(name) {
            format!(".{}()", Self::getter_name(name))
        } else {
            format!(".{name}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::object::{Method, RecordObject};

    fn int_field_record() -> RecordObject {
        RecordObject::new()
            .with_field("width", Value::Integer(7))
            .with_method(
                "get_width",
                Method::new(0, |_receiver, _args| Ok(Value::Integer(99))),
            )
            .with_method(
                "get_height",
                Method::new(0, |_receiver, _args| Ok(Value::Integer(12))),
            )
            .with_method(
                MAGIC_ACCESSOR,
                Method::new(1, |_receiver, args| match &args[0] {
                    Value::String(name) => Ok(Value::String(format!("magic:{name}"))),
                    _ => Ok(Value::None),
                }),
            )
    }

    #[test]
    fn direct_field_wins_over_getter() {
        let record = int_field_record();
        let resolver = FieldThenGetter;

        assert_eq!(resolver.get_value(&record, "width"), Ok(Value::Integer(7)));
    }

    #[test]
    fn getter_wins_over_magic_accessor() {
        let record = int_field_record();
        let resolver = FieldThenGetter;

        assert_eq!(
            resolver.get_value(&record, "height"),
            Ok(Value::Integer(12))
        );
    }

    #[test]
    fn magic_accessor_is_the_fallback() {
        let record = int_field_record();
        let resolver = FieldThenGetter;

        assert_eq!(
            resolver.get_value(&record, "depth"),
            Ok(Value::String("magic:depth".to_string()))
        );
    }

    #[test]
    fn unresolvable_property_fails_typed() {
        let record = RecordObject::new();
        let resolver = FieldThenGetter;

        assert_eq!(
            resolver.get_value(&record, "missing"),
            Err(EvalError::NoSuchProperty {
                property: "missing".to_string(),
                type_name: "record".to_string(),
            })
        );
    }

    #[test]
    fn accessor_path_reflects_symbol_metadata() {
        let resolver = FieldThenGetter;
        let plain = Symbol::new();
        let with_getter = Symbol::new().with_getter("name");

        assert_eq!(resolver.accessor_path(&plain, "name"), ".name");
        assert_eq!(
            resolver.accessor_path(&with_getter, "name"),
            ".get_name()"
        );
    }
}
