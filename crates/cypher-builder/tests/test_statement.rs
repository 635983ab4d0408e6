use cypher_builder::{CypherBuilder, Statement};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_statement_serializes_to_transaction_body() {
    let statement = CypherBuilder::new()
        .r#match("(p:Person {name: $name})")
        .r#return("p")
        .set_parameter("name", "Alice")
        .into_statement();

    let body = statement.to_json().unwrap();
    assert_eq!(
        body,
        json!({
            "statement": "MATCH (p:Person {name: $name})\nRETURN p",
            "parameters": {"name": "Alice"}
        })
    );
}

#[test]
fn test_statement_from_json_without_parameters() {
    let statement = Statement::from_json(json!({"statement": "RETURN 1"})).unwrap();
    assert_eq!(statement.text(), "RETURN 1");
    assert!(statement.parameters().is_empty());
}

#[test]
fn test_statement_from_json_rejects_missing_text() {
    let result = Statement::from_json(json!({"parameters": {}}));
    assert!(result.is_err());
}

#[test]
fn test_statement_display_is_query_text() {
    let builder = CypherBuilder::new().r#match("(n)").r#return("n").limit(1);
    let statement = builder.statement();
    assert_eq!(statement.to_string(), "MATCH (n)\nRETURN n\nLIMIT 1");

    let (text, parameters) = statement.into_parts();
    assert_eq!(text, builder.build());
    assert!(parameters.is_empty());
}
