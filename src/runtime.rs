//! Runtime value model shared by the evaluator and the resolver.
//!
//! Contains `Value`, the reference-counted object model, the capability
//! traits checked during evaluation, and the typed evaluation errors.
pub mod error;
pub mod object;
pub mod value;

pub use error::EvalError;
pub use object::{Indexable, Method, Object, ObjectKind, ObjectLike, ObjectRef, RecordObject};
pub use value::Value;
