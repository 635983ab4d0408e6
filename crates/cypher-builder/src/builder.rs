use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::clause::Clause;
use crate::error::{BuilderError, BuilderResult};
use crate::statement::Statement;

/// Parameter bindings keyed by placeholder name (without the leading `$`).
pub type Parameters = BTreeMap<String, Value>;

/// Builds a Cypher query using a fluent interface.
///
/// Clauses are kept in per-family buffers and rendered in a fixed order:
/// `MATCH`-family, `WHERE`-family, `WITH`, `RETURN`, `ORDER BY`, `SKIP`,
/// `LIMIT`. Fragment text is inserted verbatim; nothing is parsed or escaped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CypherBuilder {
    match_clauses: Vec<String>,
    where_clauses: Vec<String>,
    with_clauses: Vec<String>,
    return_clause: Option<String>,
    order_by_clause: Option<String>,
    skip: Option<u64>,
    limit: Option<u64>,
    parameters: Parameters,
}

impl CypherBuilder {
    /// Creates a new, empty CypherBuilder.
    pub fn new() -> Self {
        CypherBuilder::default()
    }

    /// Appends `MATCH <pattern>`.
    pub fn r#match(mut self, pattern: impl Into<String>) -> Self {
        self.match_clauses.push(Clause::Match.fragment(pattern.into()));
        self
    }

    /// Appends `OPTIONAL MATCH <pattern>`.
    pub fn optional_match(mut self, pattern: impl Into<String>) -> Self {
        self.match_clauses.push(Clause::OptionalMatch.fragment(pattern.into()));
        self
    }

    /// Appends `WHERE <condition>`.
    ///
    /// Calling this more than once emits several `WHERE` lines; use
    /// [`and_where`](Self::and_where) or [`or_where`](Self::or_where) to
    /// extend an existing condition.
    pub fn r#where(mut self, condition: impl Into<String>) -> Self {
        self.where_clauses.push(Clause::Where.fragment(condition.into()));
        self
    }

    /// Appends `AND <condition>`, or `WHERE <condition>` if no condition
    /// has been added yet.
    pub fn and_where(self, condition: impl Into<String>) -> Self {
        self.push_condition(Clause::And, condition.into())
    }

    /// Appends `OR <condition>`, or `WHERE <condition>` if no condition
    /// has been added yet.
    ///
    /// Conditions are not grouped: `where(a).and_where(b).or_where(c)` renders
    /// as `WHERE a`, `AND b`, `OR c` and Cypher precedence applies.
    pub fn or_where(self, condition: impl Into<String>) -> Self {
        self.push_condition(Clause::Or, condition.into())
    }

    /// Appends `WITH <expression>`.
    pub fn with(mut self, expression: impl Into<String>) -> Self {
        self.with_clauses.push(Clause::With.fragment(expression.into()));
        self
    }

    /// Sets `RETURN <expression>`, replacing any previous return clause.
    pub fn r#return(mut self, expression: impl Into<String>) -> Self {
        self.return_clause = Some(Clause::Return.fragment(expression.into()));
        self
    }

    /// Sets `ORDER BY <expression>`, replacing any previous ordering.
    pub fn order_by(mut self, expression: impl Into<String>) -> Self {
        self.order_by_clause = Some(Clause::OrderBy.fragment(expression.into()));
        self
    }

    /// Sets the number of rows to skip. `skip(0)` still renders `SKIP 0`.
    pub fn skip(mut self, count: u64) -> Self {
        self.skip = Some(count);
        self
    }

    /// Sets the maximum number of rows returned.
    pub fn limit(mut self, count: u64) -> Self {
        self.limit = Some(count);
        self
    }

    /// Binds `value` to the placeholder `$name`. A later binding for the same
    /// name replaces the earlier one.
    pub fn set_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Like [`set_parameter`](Self::set_parameter), but accepts any
    /// serializable value.
    pub fn try_set_parameter<T>(self, name: impl Into<String>, value: &T) -> BuilderResult<Self>
    where
        T: Serialize + ?Sized,
    {
        let name = name.into();
        match serde_json::to_value(value) {
            Ok(value) => Ok(self.set_parameter(name, value)),
            Err(source) => Err(BuilderError::Parameter { name, source }),
        }
    }

    /// Renders the query text. Does not modify the builder.
    pub fn build(&self) -> String {
        let skip = self.skip.map(|count| Clause::Skip.fragment(count));
        let limit = self.limit.map(|count| Clause::Limit.fragment(count));

        let text = self
            .match_clauses
            .iter()
            .chain(&self.where_clauses)
            .chain(&self.with_clauses)
            .chain(&self.return_clause)
            .chain(&self.order_by_clause)
            .chain(&skip)
            .chain(&limit)
            .filter(|line| !line.is_empty())
            .join("\n");

        #[cfg(feature = "debug-logging")]
        trace!(lines = text.lines().count(), query = %text, "rendered cypher query");
        #[cfg(not(feature = "debug-logging"))]
        trace!(lines = text.lines().count(), "rendered cypher query");

        text
    }

    /// Returns a copy of the parameter bindings.
    pub fn parameters(&self) -> Parameters {
        self.parameters.clone()
    }

    /// Borrows the value bound to `name`, if any.
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// True when nothing has been added since construction or the last
    /// [`clear`](Self::clear).
    pub fn is_empty(&self) -> bool {
        self == &CypherBuilder::default()
    }

    /// Renders the text and copies the parameters into a [`Statement`].
    pub fn statement(&self) -> Statement {
        Statement::new(self.build(), self.parameters())
    }

    /// Consumes the builder, producing its [`Statement`].
    pub fn into_statement(self) -> Statement {
        let text = self.build();
        Statement::new(text, self.parameters)
    }

    /// Resets every clause, pagination value and parameter.
    pub fn clear(self) -> Self {
        debug!(
            clauses = self.clause_count(),
            parameters = self.parameters.len(),
            "clearing cypher builder"
        );
        CypherBuilder::default()
    }

    /// Builds a nested query on a fresh builder and appends it, wrapped in
    /// parentheses, as a single `MATCH`-family entry.
    ///
    /// Parameters set inside `configure` are merged into this builder; on a
    /// name collision the nested value wins.
    pub fn subquery<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(CypherBuilder) -> CypherBuilder,
    {
        let sub = configure(CypherBuilder::new());
        debug!(
            clauses = sub.clause_count(),
            parameters = sub.parameters.len(),
            "merging subquery"
        );

        self.match_clauses.push(format!("({})", sub.build()));
        self.parameters.extend(sub.parameters);
        self
    }

    /// Replaces this query with `<this> UNION <other>`.
    ///
    /// Parameters of this builder are discarded along with its clauses; the
    /// result carries `other`'s parameters. `other` is only read.
    pub fn union(self, other: &CypherBuilder) -> Self {
        self.combine(Clause::Union, other)
    }

    /// Replaces this query with `<this> UNION ALL <other>`.
    ///
    /// Follows the same parameter rules as [`union`](Self::union).
    pub fn union_all(self, other: &CypherBuilder) -> Self {
        self.combine(Clause::UnionAll, other)
    }

    fn combine(self, operator: Clause, other: &CypherBuilder) -> Self {
        let left = self.build();
        let right = other.build();
        debug!(
            %operator,
            dropped_parameters = self.parameters.len(),
            merged_parameters = other.parameters.len(),
            "combining cypher queries"
        );

        let mut combined = self.clear();
        combined
            .match_clauses
            .push(format!("{}\n{}\n{}", left, operator, right));
        combined.parameters.extend(other.parameters.clone());
        combined
    }

    fn push_condition(mut self, connective: Clause, condition: String) -> Self {
        let clause = if self.where_clauses.is_empty() {
            Clause::Where
        } else {
            connective
        };
        self.where_clauses.push(clause.fragment(condition));
        self
    }

    fn clause_count(&self) -> usize {
        self.match_clauses.len()
            + self.where_clauses.len()
            + self.with_clauses.len()
            + usize::from(self.return_clause.is_some())
            + usize::from(self.order_by_clause.is_some())
    }
}

impl fmt::Display for CypherBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
