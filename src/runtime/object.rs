use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::runtime::error::EvalError;
use crate::runtime::value::Value;

/// A value may satisfy the "object-like" capability: addressable by
/// string-keyed property names and able to dispatch named methods.
pub trait ObjectLike {
    fn type_name(&self) -> &'static str;
    /// Direct field lookup, without any getter or magic-accessor fallback.
    /// Resolution order across fields and accessors belongs to the resolver.
    fn field(&self, name: &str) -> Option<Value>;
    fn has_method(&self, name: &str) -> bool;
    /// Invoke the named method with arguments in order. Fails with
    /// `NoSuchMethod` or `MethodArityMismatch` before the body runs.
    fn call_method(&self, method: &str, args: &[Value]) -> Result<Value, EvalError>;
}

/// A value may satisfy the "indexable" capability: an ordered sequence
/// addressed by integer position or a mapping addressed by string key.
pub trait Indexable {
    fn type_name(&self) -> &'static str;
    /// Element lookup. A missing element fails with the container's native
    /// error; no default value is ever substituted.
    fn get_item(&self, key: &Value) -> Result<Value, EvalError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Record(RecordObject),
    List(ListObject),
    Map(MapObject),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub kind: ObjectKind,
}

pub type ObjectRef = Rc<RefCell<Object>>;

impl Object {
    pub fn record(record: RecordObject) -> Self {
        Self {
            kind: ObjectKind::Record(record),
        }
    }

    pub fn list(values: Vec<Value>) -> Self {
        Self {
            kind: ObjectKind::List(ListObject::new(values)),
        }
    }

    pub fn map(entries: HashMap<String, Value>) -> Self {
        Self {
            kind: ObjectKind::Map(MapObject::new(entries)),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            ObjectKind::Record(record) => record.type_name(),
            ObjectKind::List(list) => Indexable::type_name(list),
            ObjectKind::Map(map) => Indexable::type_name(map),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match &self.kind {
            ObjectKind::Record(_) => true,
            ObjectKind::List(list) => !list.is_empty(),
            ObjectKind::Map(map) => !map.is_empty(),
        }
    }

    pub fn as_object_like(&self) -> Option<&dyn ObjectLike> {
        match &self.kind {
            ObjectKind::Record(record) => Some(record),
            ObjectKind::List(_) | ObjectKind::Map(_) => None,
        }
    }

    pub fn as_indexable(&self) -> Option<&dyn Indexable> {
        match &self.kind {
            ObjectKind::List(list) => Some(list),
            ObjectKind::Map(map) => Some(map),
            ObjectKind::Record(_) => None,
        }
    }
}

pub fn new_record_object(record: RecordObject) -> ObjectRef {
    Rc::new(RefCell::new(Object::record(record)))
}

pub fn new_list_object(values: Vec<Value>) -> ObjectRef {
    Rc::new(RefCell::new(Object::list(values)))
}

pub fn new_map_object(entries: HashMap<String, Value>) -> ObjectRef {
    Rc::new(RefCell::new(Object::map(entries)))
}

/// Native method bound to a record: a declared arity plus the body closure.
#[derive(Clone)]
pub struct Method {
    arity: usize,
    body: Rc<MethodBody>,
}

pub type MethodBody = dyn Fn(&RecordObject, &[Value]) -> Result<Value, EvalError>;

impl Method {
    pub fn new(
        arity: usize,
        body: impl Fn(&RecordObject, &[Value]) -> Result<Value, EvalError> + 'static,
    ) -> Self {
        Self {
            arity,
            body: Rc::new(body),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<method/{}>", self.arity)
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.arity == other.arity && Rc::ptr_eq(&self.body, &other.body)
    }
}

/// String-keyed fields plus named native methods.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordObject {
    fields: HashMap<String, Value>,
    methods: HashMap<String, Method>,
}

impl RecordObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, method: Method) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }
}

impl ObjectLike for RecordObject {
    fn type_name(&self) -> &'static str {
        "record"
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }

    fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    fn call_method(&self, method: &str, args: &[Value]) -> Result<Value, EvalError> {
        let Some(bound) = self.methods.get(method) else {
            return Err(EvalError::NoSuchMethod {
                method: method.to_string(),
                type_name: self.type_name().to_string(),
            });
        };
        if args.len() != bound.arity {
            return Err(EvalError::MethodArityMismatch {
                method: method.to_string(),
                expected: bound.arity,
                found: args.len(),
            });
        }
        (bound.body)(self, args)
    }
}

/// Ordered sequence addressed by non-negative integer position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListObject {
    values: Vec<Value>,
}

impl ListObject {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Indexable for ListObject {
    fn type_name(&self) -> &'static str {
        "list"
    }

    fn get_item(&self, key: &Value) -> Result<Value, EvalError> {
        let raw_index = match key {
            Value::Integer(index) => *index,
            other => {
                return Err(EvalError::ExpectedIntegerIndex {
                    got: other.type_name().to_string(),
                });
            }
        };
        if raw_index < 0 {
            return Err(EvalError::NegativeIndex { index: raw_index });
        }
        let index = raw_index as usize;
        self.values
            .get(index)
            .cloned()
            .ok_or(EvalError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
    }
}

/// Mapping addressed by string key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapObject {
    entries: HashMap<String, Value>,
}

impl MapObject {
    pub fn new(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &HashMap<String, Value> {
        &self.entries
    }
}

impl Indexable for MapObject {
    fn type_name(&self) -> &'static str {
        "map"
    }

    fn get_item(&self, key: &Value) -> Result<Value, EvalError> {
        let key = match key {
            Value::String(key) => key,
            other => {
                return Err(EvalError::ExpectedStringKey {
                    got: other.type_name().to_string(),
                });
            }
        };
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| EvalError::KeyNotFound { key: key.clone() })
    }
}
