use crate::clause::Clause;

use pretty_assertions::assert_eq;

#[test]
fn test_keywords() {
    assert_eq!(Clause::Match.keyword(), "MATCH");
    assert_eq!(Clause::OptionalMatch.keyword(), "OPTIONAL MATCH");
    assert_eq!(Clause::OrderBy.keyword(), "ORDER BY");
    assert_eq!(Clause::UnionAll.keyword(), "UNION ALL");
}

#[test]
fn test_display_matches_keyword() {
    for clause in [
        Clause::Match,
        Clause::OptionalMatch,
        Clause::Where,
        Clause::And,
        Clause::Or,
        Clause::With,
        Clause::Return,
        Clause::OrderBy,
        Clause::Skip,
        Clause::Limit,
        Clause::Union,
        Clause::UnionAll,
    ] {
        assert_eq!(clause.to_string(), clause.keyword());
    }
}

#[test]
fn test_fragment_inserts_body_verbatim() {
    assert_eq!(Clause::Where.fragment("a  =  'b'"), "WHERE a  =  'b'");
    assert_eq!(Clause::Limit.fragment(25u64), "LIMIT 25");
    assert_eq!(Clause::With.fragment(""), "WITH ");
}
