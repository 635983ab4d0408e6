//! Fluent builder for Cypher query text and its parameter bindings.
//!
//! The builder only assembles text: fragments are inserted verbatim and
//! `$name` placeholders are left for the executing driver to substitute
//! from [`CypherBuilder::parameters`].

pub mod builder;
pub mod clause;
pub mod error;
pub mod statement;

pub mod prelude {
    pub use crate::builder::{CypherBuilder, Parameters};
    pub use crate::clause::Clause;
    pub use crate::error::{BuilderError, BuilderResult};
    pub use crate::statement::Statement;
}

pub use prelude::*;

// Declare the tests module, only compiled when running tests
#[cfg(test)]
mod tests;
