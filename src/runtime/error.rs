use thiserror::Error;

/// Typed errors produced while evaluating an expression tree.
///
/// Every failure propagates to the `evaluate` caller unmodified; evaluation
/// performs no recovery and never substitutes defaults for missing elements.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Property access on non-object value of type {type_name}")]
    PropertyAccessOnNonObject { type_name: String },
    #[error("Method call on non-object value of type {type_name}")]
    MethodCallOnNonObject { type_name: String },
    #[error("Index access on non-indexable value of type {type_name}")]
    IndexAccessOnNonIndexable { type_name: String },
    #[error("No such property '{property}' for type {type_name}")]
    NoSuchProperty {
        property: String,
        type_name: String,
    },
    #[error("No such method '{method}' for type {type_name}")]
    NoSuchMethod { method: String, type_name: String },
    #[error("Method '{method}' expected {expected} arguments, got {found}")]
    MethodArityMismatch {
        method: String,
        expected: usize,
        found: usize,
    },
    #[error("List index out of bounds: index {index}, len {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("List index must be non-negative, got {index}")]
    NegativeIndex { index: i64 },
    #[error("No such key '{key}' in map")]
    KeyNotFound { key: String },
    #[error("List index must be an integer, got {got}")]
    ExpectedIntegerIndex { got: String },
    #[error("Map key must be a string, got {got}")]
    ExpectedStringKey { got: String },
    #[error("Method name must evaluate to a string, got {got}")]
    ExpectedStringMethodName { got: String },
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },
}
