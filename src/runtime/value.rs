use std::collections::HashMap;

use crate::runtime::object::{
    ObjectKind, ObjectRef, RecordObject, new_list_object, new_map_object, new_record_object,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Object(ObjectRef),
    None,
}

impl Value {
    pub fn record(record: RecordObject) -> Self {
        Value::Object(new_record_object(record))
    }

    pub fn list(values: Vec<Value>) -> Self {
        Value::Object(new_list_object(values))
    }

    pub fn map(entries: HashMap<String, Value>) -> Self {
        Value::Object(new_map_object(entries))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "int",
            Value::Boolean(_) => "bool",
            Value::String(_) => "str",
            Value::Object(object) => object.borrow().type_name(),
            Value::None => "NoneType",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(value) => *value != 0,
            Value::Boolean(value) => *value,
            Value::String(value) => !value.is_empty(),
            Value::Object(object) => object.borrow().is_truthy(),
            Value::None => false,
        }
    }

    /// Human-readable rendering. Map entries are emitted in sorted key order
    /// so the rendering is deterministic.
    pub fn to_output(&self) -> String {
        match self {
            Value::Integer(value) => value.to_string(),
            Value::Boolean(value) => {
                if *value {
                    "True".to_string()
                } else {
                    "False".to_string()
                }
            }
            Value::String(value) => value.clone(),
            Value::Object(object) => {
                let borrowed = object.borrow();
                match &borrowed.kind {
                    ObjectKind::Record(_) => "<record>".to_string(),
                    ObjectKind::List(list) => {
                        let rendered = list
                            .values()
                            .iter()
                            .map(Value::to_output)
                            .collect::<Vec<_>>()
                            .join(", ");
                        format!("[{rendered}]")
                    }
                    ObjectKind::Map(map) => {
                        let mut keys = map.entries().keys().collect::<Vec<_>>();
                        keys.sort();
                        let rendered = keys
                            .into_iter()
                            .map(|key| format!("{key}: {}", map.entries()[key].to_output()))
                            .collect::<Vec<_>>()
                            .join(", ");
                        format!("{{{rendered}}}")
                    }
                }
            }
            Value::None => "None".to_string(),
        }
    }
}
