pub mod ast;
pub mod compiler;
pub mod eval;
pub mod resolver;
pub mod runtime;
