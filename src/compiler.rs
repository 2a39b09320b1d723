//! Source-text compilation.
//!
//! `Compiler` is the sink the tree is emitted into: it owns the output
//! buffer, borrows the compile-scope function registry, and chains `compile`
//! and `raw` calls. Nothing is validated beyond what the emitter cannot
//! express as text; unresolved names surface only when the generated code is
//! later executed.
use std::collections::{HashMap, HashSet};

use anyhow::{Result, bail};

use crate::ast::{Access, Arguments, Expression};
use crate::resolver::{FieldThenGetter, PropertyResolver};

/// Compile-scope metadata for one registered name: which of its properties
/// are read through a getter in the emitted target text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Symbol {
    getters: HashSet<String>,
}

impl Symbol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_getter(mut self, property: impl Into<String>) -> Self {
        self.getters.insert(property.into());
        self
    }

    pub fn is_getter_backed(&self, property: &str) -> bool {
        self.getters.contains(property)
    }
}

/// A registry entry is either symbol metadata or a nested sub-scope
/// registry (the handle a sub-compilation publishes its names under).
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Symbol(Symbol),
    Scope(FunctionRegistry),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionRegistry {
    entries: HashMap<String, Descriptor>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_symbol(&mut self, name: impl Into<String>, symbol: Symbol) {
        self.entries.insert(name.into(), Descriptor::Symbol(symbol));
    }

    pub fn register_scope(&mut self, name: impl Into<String>, scope: FunctionRegistry) {
        self.entries.insert(name.into(), Descriptor::Scope(scope));
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.entries.get(name)
    }
}

pub struct Compiler<'a> {
    source: String,
    functions: &'a FunctionRegistry,
    resolver: &'a dyn PropertyResolver,
}

impl std::fmt::Debug for Compiler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler")
            .field("source", &self.source)
            .field("functions", &self.functions)
            .finish_non_exhaustive()
    }
}

impl<'a> Compiler<'a> {
    pub fn new(functions: &'a FunctionRegistry) -> Self {
        Self::with_resolver(functions, &FieldThenGetter)
    }

    pub fn with_resolver(
        functions: &'a FunctionRegistry,
        resolver: &'a dyn PropertyResolver,
    ) -> Self {
        Self {
            source: String::new(),
            functions,
            resolver,
        }
    }

    /// Verbatim append, chainable.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.source.push_str(text);
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&Descriptor> {
        self.functions.get(name)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    /// Emit one expression into the sink, chainable.
    pub fn compile(&mut self, expr: &Expression) -> Result<&mut Self> {
        match expr {
            Expression::Integer(value) => {
                self.raw(&value.to_string());
            }
            Expression::Boolean(value) => {
                self.raw(if *value { "true" } else { "false" });
            }
            Expression::String(value) => {
                let escaped = escape_string(value);
                self.raw(&format!("\"{escaped}\""));
            }
            Expression::Identifier(name) => {
                self.raw(name);
            }
            Expression::Access(access) => self.compile_access(access)?,
        }
        Ok(self)
    }

    fn compile_access(&mut self, access: &Access) -> Result<()> {
        match access {
            Access::Property { base, name } => {
                self.compile(base)?;
                let symbol = self.property_symbol(base);
                let path = self.resolver.accessor_path(&symbol, name);
                self.raw(&path);
            }
            Access::Method { base, name, args } => {
                let method = match name.as_ref() {
                    Expression::String(method) => method.clone(),
                    other => {
                        bail!("Method names must be string literals when compiling, got {other:?}")
                    }
                };
                self.compile(base)?.raw(".").raw(&method).raw("(");
                self.compile_arguments(args)?;
                self.raw(")");
            }
            Access::Index { base, index } => {
                self.compile(base)?.raw("[").compile(index)?.raw("]");
            }
        }
        Ok(())
    }

    fn compile_arguments(&mut self, args: &Arguments) -> Result<()> {
        for (position, arg) in args.0.iter().enumerate() {
            if position > 0 {
                self.raw(", ");
            }
            self.compile(arg)?;
        }
        Ok(())
    }

    /// Compile-scope metadata for a property base. A registry entry that is
    /// itself a sub-scope redirects the lookup of that name into the nested
    /// registry, one level, before the accessor path is computed.
    fn property_symbol(&self, base: &Expression) -> Symbol {
        let Expression::Identifier(name) = base else {
            return Symbol::new();
        };
        match self.functions.get(name) {
            Some(Descriptor::Symbol(symbol)) => symbol.clone(),
            Some(Descriptor::Scope(inner)) => match inner.get(name) {
                Some(Descriptor::Symbol(symbol)) => symbol.clone(),
                _ => Symbol::new(),
            },
            None => Symbol::new(),
        }
    }
}

pub fn escape_string(value: &str) -> String {
    let mut escaped = String::new();
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
