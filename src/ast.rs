/// Immutable expression tree. Nodes are built once by a front end and then
/// walked repeatedly by the evaluator and the compiler.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(i64),
    Boolean(bool),
    String(String),
    Identifier(String),
    Access(Access),
}

/// Attribute access over a previously evaluated base value. Each variant
/// carries exactly the children its dispatch needs.
#[derive(Debug, PartialEq, Clone)]
pub enum Access {
    /// Read the named property off an object-like value. The name is a
    /// literal; dynamic property names are not part of the language.
    Property {
        base: Box<Expression>,
        name: String,
    },
    /// Invoke a named method with ordered arguments. The name is itself an
    /// expression and may be computed at evaluation time.
    Method {
        base: Box<Expression>,
        name: Box<Expression>,
        args: Arguments,
    },
    /// Index into a sequence or key into a mapping.
    Index {
        base: Box<Expression>,
        index: Box<Expression>,
    },
}

/// Ordered argument list of a method call.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Arguments(pub Vec<Expression>);

impl Arguments {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Expression>> for Arguments {
    fn from(args: Vec<Expression>) -> Self {
        Self(args)
    }
}

impl Expression {
    pub fn property(base: Expression, name: impl Into<String>) -> Self {
        Expression::Access(Access::Property {
            base: Box::new(base),
            name: name.into(),
        })
    }

    pub fn method(base: Expression, name: Expression, args: Vec<Expression>) -> Self {
        Expression::Access(Access::Method {
            base: Box::new(base),
            name: Box::new(name),
            args: Arguments(args),
        })
    }

    pub fn index(base: Expression, index: Expression) -> Self {
        Expression::Access(Access::Index {
            base: Box::new(base),
            index: Box::new(index),
        })
    }
}
