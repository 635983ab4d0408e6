//! Clause keywords and fragment formatting.

use std::fmt;

/// A Cypher clause keyword the builder knows how to emit.
///
/// Every line the builder produces starts with one of these keywords followed
/// by caller-supplied text, which is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Match,
    OptionalMatch,
    Where,
    And,
    Or,
    With,
    Return,
    OrderBy,
    Skip,
    Limit,
    Union,
    UnionAll,
}

impl Clause {
    /// The keyword as it appears in query text.
    pub fn keyword(&self) -> &'static str {
        match self {
            Clause::Match => "MATCH",
            Clause::OptionalMatch => "OPTIONAL MATCH",
            Clause::Where => "WHERE",
            Clause::And => "AND",
            Clause::Or => "OR",
            Clause::With => "WITH",
            Clause::Return => "RETURN",
            Clause::OrderBy => "ORDER BY",
            Clause::Skip => "SKIP",
            Clause::Limit => "LIMIT",
            Clause::Union => "UNION",
            Clause::UnionAll => "UNION ALL",
        }
    }

    /// Formats `<KEYWORD> <body>`, inserting `body` verbatim.
    pub fn fragment(&self, body: impl fmt::Display) -> String {
        format!("{} {}", self.keyword(), body)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
