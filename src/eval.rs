//! Tree-walking evaluation.
//!
//! Pure recursive descent over the immutable tree: the only state is the
//! borrowed function registry and the injected property resolver, so the
//! same tree can be evaluated concurrently by independent evaluators.
use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::{Access, Arguments, Expression};
use crate::resolver::{FieldThenGetter, PropertyResolver};
use crate::runtime::error::EvalError;
use crate::runtime::value::Value;

pub type NativeFunction = Rc<dyn Fn(&[Value]) -> Result<Value, EvalError>>;

/// Evaluation-side function registry, threaded through recursion alongside
/// the variable map.
pub type Functions = HashMap<String, NativeFunction>;

pub type Variables = HashMap<String, Value>;

pub struct Evaluator<'a> {
    functions: &'a Functions,
    resolver: &'a dyn PropertyResolver,
}

impl<'a> Evaluator<'a> {
    pub fn new(functions: &'a Functions) -> Self {
        Self::with_resolver(functions, &FieldThenGetter)
    }

    pub fn with_resolver(functions: &'a Functions, resolver: &'a dyn PropertyResolver) -> Self {
        Self {
            functions,
            resolver,
        }
    }

    pub fn functions(&self) -> &Functions {
        self.functions
    }

    pub fn eval(&self, expr: &Expression, values: &Variables) -> Result<Value, EvalError> {
        match expr {
            Expression::Integer(value) => Ok(Value::Integer(*value)),
            Expression::Boolean(value) => Ok(Value::Boolean(*value)),
            Expression::String(value) => Ok(Value::String(value.clone())),
            Expression::Identifier(name) => {
                values
                    .get(name)
                    .cloned()
                    .ok_or_else(|| EvalError::UndefinedVariable {
                        name: name.to_string(),
                    })
            }
            Expression::Access(access) => self.eval_access(access, values),
        }
    }

    /// Evaluate an argument list to its values, preserving order.
    pub fn eval_arguments(
        &self,
        args: &Arguments,
        values: &Variables,
    ) -> Result<Vec<Value>, EvalError> {
        let mut evaluated = Vec::with_capacity(args.len());
        for arg in &args.0 {
            evaluated.push(self.eval(arg, values)?);
        }
        Ok(evaluated)
    }

    fn eval_access(&self, access: &Access, values: &Variables) -> Result<Value, EvalError> {
        match access {
            Access::Property { base, name } => {
                let object = self.eval(base, values)?;
                let Value::Object(object_ref) = &object else {
                    return Err(EvalError::PropertyAccessOnNonObject {
                        type_name: object.type_name().to_string(),
                    });
                };
                let borrowed = object_ref.borrow();
                let Some(record) = borrowed.as_object_like() else {
                    return Err(EvalError::PropertyAccessOnNonObject {
                        type_name: borrowed.type_name().to_string(),
                    });
                };
                self.resolver.get_value(record, name)
            }
            Access::Method { base, name, args } => {
                let object = self.eval(base, values)?;
                let Value::Object(object_ref) = &object else {
                    return Err(EvalError::MethodCallOnNonObject {
                        type_name: object.type_name().to_string(),
                    });
                };
                let borrowed = object_ref.borrow();
                let Some(record) = borrowed.as_object_like() else {
                    return Err(EvalError::MethodCallOnNonObject {
                        type_name: borrowed.type_name().to_string(),
                    });
                };
                // The method name may itself be computed at evaluation time.
                let method = match self.eval(name, values)? {
                    Value::String(method) => method,
                    other => {
                        return Err(EvalError::ExpectedStringMethodName {
                            got: other.type_name().to_string(),
                        });
                    }
                };
                let arguments = self.eval_arguments(args, values)?;
                record.call_method(&method, &arguments)
            }
            Access::Index { base, index } => {
                let container = self.eval(base, values)?;
                let Value::Object(object_ref) = &container else {
                    return Err(EvalError::IndexAccessOnNonIndexable {
                        type_name: container.type_name().to_string(),
                    });
                };
                let borrowed = object_ref.borrow();
                let Some(indexable) = borrowed.as_indexable() else {
                    return Err(EvalError::IndexAccessOnNonIndexable {
                        type_name: borrowed.type_name().to_string(),
                    });
                };
                let key = self.eval(index, values)?;
                indexable.get_item(&key)
            }
        }
    }
}

impl Expression {
    /// Evaluate this tree against a function registry and a variable map,
    /// using the default property-resolution strategy.
    pub fn evaluate(&self, functions: &Functions, values: &Variables) -> Result<Value, EvalError> {
        Evaluator::new(functions).eval(self, values)
    }
}
