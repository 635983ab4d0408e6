//! Example: compose a Cypher statement and print the request body.
//!
//! Run with:
//! ```
//! RUST_LOG=cypher_builder=trace cargo run --example compose
//! ```

use cypher_builder::CypherBuilder;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let owners = CypherBuilder::new()
        .r#match("(p:Person)")
        .r#where("p.age > $minAge")
        .set_parameter("minAge", 18)
        .subquery(|sub| {
            sub.r#match("(p)-[:OWNS]->(c:Car)")
                .r#return("count(c) AS carCount")
        })
        .r#return("p.name AS name, carCount")
        .order_by("carCount DESC")
        .limit(10);

    println!("=== Query ===\n{}\n", owners);

    let statement = owners.into_statement();
    let body = serde_json::json!({ "statements": [statement.to_json()?] });
    println!("=== Request body ===\n{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
